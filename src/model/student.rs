use crate::error::{Error, Result};
use serde::Serialize;
use std::fmt;

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Student {
    name: String,
    courses_count: u32,
    course: u32,
}

impl Student {
    pub fn new(name: impl Into<String>, courses_count: u32) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::EmptyName { entity: "student" });
        }
        if courses_count == 0 {
            return Err(Error::ZeroCourses);
        }
        Ok(Self {
            name,
            courses_count,
            course: 1,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn courses_count(&self) -> u32 {
        self.courses_count
    }

    pub fn course(&self) -> u32 {
        self.course
    }

    /// Move on to the next course-year. There is no upper bound: a graduated
    /// student keeps counting.
    pub fn advance_course(&mut self) {
        self.course = self.course.saturating_add(1);
    }

    pub fn is_graduated(&self) -> bool {
        self.course > self.courses_count
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_graduated() {
            write!(f, "{} (graduated)", self.name)
        } else {
            write!(
                f,
                "{} (year {}/{})",
                self.name, self.course, self.courses_count
            )
        }
    }
}

#[test]
fn test_graduation() {
    let mut s = Student::new("Ivan", 3).unwrap();
    assert_eq!(s.course(), 1);
    for year in 2..=3 {
        assert!(!s.is_graduated());
        s.advance_course();
        assert_eq!(s.course(), year);
    }
    assert!(!s.is_graduated());
    assert_eq!(s.to_string(), "Ivan (year 3/3)");
    s.advance_course();
    assert!(s.is_graduated());
    assert_eq!(s.to_string(), "Ivan (graduated)");
    s.advance_course();
    assert_eq!(s.course(), 5);
    assert!(s.is_graduated());
}

#[test]
fn test_invalid_student() {
    assert_eq!(
        Student::new("", 3),
        Err(Error::EmptyName { entity: "student" })
    );
    assert_eq!(Student::new("Ivan", 0), Err(Error::ZeroCourses));
}
