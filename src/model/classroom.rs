use crate::error::{Error, Result};
use serde::Serialize;
use std::fmt;

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Classroom {
    number: u32,
    capacity: u32,
    occupied: u32,
}

impl Classroom {
    pub fn new(number: u32, capacity: u32) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }
        Ok(Self {
            number,
            capacity,
            occupied: 0,
        })
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn occupied(&self) -> u32 {
        self.occupied
    }

    pub fn free_seats(&self) -> u32 {
        self.capacity - self.occupied
    }

    pub fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    /// Seat `count` students. This replaces the current attendance rather
    /// than adding to it.
    pub fn start_lecture(&mut self, count: u32) -> Result<()> {
        if count > self.capacity {
            return Err(Error::StudentCount {
                count,
                capacity: self.capacity,
            });
        }
        self.occupied = count;
        Ok(())
    }

    pub fn stop_lecture(&mut self) {
        self.occupied = 0;
    }
}

impl fmt::Display for Classroom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "room {} ({}/{} seats occupied)",
            self.number, self.occupied, self.capacity
        )
    }
}

#[test]
fn test_start_and_stop_lecture() {
    let mut c = Classroom::new(10, 50).unwrap();
    assert_eq!(c.occupied(), 0);
    c.start_lecture(40).unwrap();
    assert_eq!(c.occupied(), 40);
    assert_eq!(c.free_seats(), 10);
    c.start_lecture(20).unwrap();
    assert_eq!(c.occupied(), 20);
    c.stop_lecture();
    assert!(c.is_empty());
    assert_eq!(c.to_string(), "room 10 (0/50 seats occupied)");
}

#[test]
fn test_capacity_bounds() {
    let mut c = Classroom::new(10, 50).unwrap();
    c.start_lecture(50).unwrap();
    assert_eq!(c.free_seats(), 0);
    assert_eq!(
        c.start_lecture(51),
        Err(Error::StudentCount {
            count: 51,
            capacity: 50
        })
    );
    assert_eq!(c.occupied(), 50);
    c.start_lecture(0).unwrap();
    assert!(c.is_empty());
}

#[test]
fn test_zero_capacity() {
    assert_eq!(Classroom::new(10, 0), Err(Error::ZeroCapacity));
    assert!(Classroom::new(0, 1).is_ok());
}
