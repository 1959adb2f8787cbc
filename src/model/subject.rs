use crate::error::{Error, Result};
use serde::Serialize;
use std::fmt;

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Subject {
    name: String,
    duration_hours: u32,
    progress_hours: u32,
}

impl Subject {
    pub fn new(name: impl Into<String>, duration_hours: u32) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::EmptyName { entity: "subject" });
        }
        if duration_hours == 0 {
            return Err(Error::ZeroDuration);
        }
        Ok(Self {
            name,
            duration_hours,
            progress_hours: 0,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn duration_hours(&self) -> u32 {
        self.duration_hours
    }

    pub fn progress_hours(&self) -> u32 {
        self.progress_hours
    }

    /// Add `hours` to the time already spent on this subject.
    pub fn learn(&mut self, hours: u32) -> Result<()> {
        let remaining = self.remaining_hours();
        if hours > remaining {
            return Err(Error::LearnedHours { hours, remaining });
        }
        self.progress_hours += hours;
        Ok(())
    }

    pub fn remaining_hours(&self) -> u32 {
        self.duration_hours - self.progress_hours
    }

    pub fn is_completed(&self) -> bool {
        self.remaining_hours() == 0
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}/{} hours)",
            self.name, self.progress_hours, self.duration_hours
        )
    }
}

#[test]
fn test_learn_is_additive() {
    let mut s = Subject::new("Linguistics", 10).unwrap();
    assert_eq!(s.progress_hours(), 0);
    s.learn(3).unwrap();
    s.learn(2).unwrap();
    assert_eq!(s.progress_hours(), 5);
    assert_eq!(s.remaining_hours(), 5);
    assert_eq!(s.to_string(), "Linguistics (5/10 hours)");
}

#[test]
fn test_learn_bounds() {
    let mut s = Subject::new("Linguistics", 10).unwrap();
    s.learn(5).unwrap();
    assert_eq!(
        s.learn(6),
        Err(Error::LearnedHours {
            hours: 6,
            remaining: 5
        })
    );
    assert_eq!(s.progress_hours(), 5);
    s.learn(0).unwrap();
    s.learn(5).unwrap();
    assert!(s.is_completed());
    assert!(s.learn(1).is_err());
}

#[test]
fn test_invalid_subject() {
    assert_eq!(
        Subject::new("", 10),
        Err(Error::EmptyName { entity: "subject" })
    );
    assert_eq!(Subject::new("X", 0), Err(Error::ZeroDuration));
}
