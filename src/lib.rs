pub mod builtin;
pub mod checks;
pub mod config;
pub mod display;
pub mod error;
pub mod model;
pub mod scenario;

pub use error::{Error, Result};
