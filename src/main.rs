use campus::checks;
use campus::config::Config;
use campus::display::{display_details, display_stats};
use campus::scenario::Group;
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(version, author, about)]
struct Args {
    /// Use FILE to add examples and settings
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Only check examples of this group
    #[arg(short, long)]
    group: Option<Group>,
    /// Set verbosity level
    #[arg(short, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    let level = match args.verbose {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    let config = match &args.config {
        Some(file_name) => Config::load(file_name)?,
        None => Config::default(),
    };
    let scenarios = checks::collect(&config, args.group);
    let report = checks::run(&scenarios, config.check.fail_fast);
    display_details(&report);
    display_stats(&report);
    checks::ensure_all_passed(&report)
}
