use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Value violations: an argument has the right type but lies outside its
/// valid domain.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("{entity} name cannot be empty")]
    EmptyName { entity: &'static str },

    #[error("classroom capacity must be positive")]
    ZeroCapacity,

    #[error("subject duration must be positive")]
    ZeroDuration,

    #[error("number of course-years must be positive")]
    ZeroCourses,

    #[error("number of students must be between 0 and {capacity} (got {count})")]
    StudentCount { count: u32, capacity: u32 },

    #[error("number of learned hours must be between 0 and {remaining} (got {hours})")]
    LearnedHours { hours: u32, remaining: u32 },
}

#[test]
fn test_messages_state_range() {
    assert_eq!(
        Error::StudentCount {
            count: 60,
            capacity: 50
        }
        .to_string(),
        "number of students must be between 0 and 50 (got 60)"
    );
    assert_eq!(
        Error::LearnedHours {
            hours: 6,
            remaining: 5
        }
        .to_string(),
        "number of learned hours must be between 0 and 5 (got 6)"
    );
    assert_eq!(
        Error::EmptyName { entity: "student" }.to_string(),
        "student name cannot be empty"
    );
}
