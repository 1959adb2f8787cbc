//! Property-based checks of the model invariants.

use campus::Error;
use campus::model::{Classroom, Student, Subject};
use proptest::prelude::*;

proptest! {
    #[test]
    fn new_entities_start_at_documented_values(
        number in any::<u32>(),
        capacity in 1..1000u32,
        duration in 1..1000u32,
        courses in 1..10u32,
    ) {
        prop_assert_eq!(Classroom::new(number, capacity).unwrap().occupied(), 0);
        let subject = Subject::new("X", duration).unwrap();
        prop_assert_eq!(subject.progress_hours(), 0);
        prop_assert_eq!(subject.remaining_hours(), duration);
        prop_assert_eq!(Student::new("Ivan", courses).unwrap().course(), 1);
    }

    #[test]
    fn stop_lecture_always_empties(capacity in 1..1000u32, count in 0..1000u32) {
        let mut c = Classroom::new(1, capacity).unwrap();
        let count = count % (capacity + 1);
        c.start_lecture(count).unwrap();
        prop_assert_eq!(c.occupied(), count);
        c.stop_lecture();
        prop_assert_eq!(c.occupied(), 0);
    }

    #[test]
    fn start_lecture_checks_capacity(capacity in 1..1000u32, extra in 1..1000u32) {
        let mut c = Classroom::new(1, capacity).unwrap();
        prop_assert_eq!(
            c.start_lecture(capacity + extra),
            Err(Error::StudentCount { count: capacity + extra, capacity })
        );
        prop_assert_eq!(c.occupied(), 0);
    }

    #[test]
    fn learning_is_additive(a in 0..500u32, b in 0..500u32) {
        let mut split = Subject::new("X", 1000).unwrap();
        split.learn(a).unwrap();
        split.learn(b).unwrap();
        let mut once = Subject::new("X", 1000).unwrap();
        once.learn(a + b).unwrap();
        prop_assert_eq!(split, once);
    }

    #[test]
    fn progress_never_exceeds_duration(
        duration in 1..100u32,
        hours in proptest::collection::vec(0..50u32, 0..20),
    ) {
        let mut s = Subject::new("X", duration).unwrap();
        for h in hours {
            let before = s.progress_hours();
            match s.learn(h) {
                Ok(()) => prop_assert_eq!(s.progress_hours(), before + h),
                Err(_) => prop_assert_eq!(s.progress_hours(), before),
            }
            prop_assert!(s.progress_hours() <= duration);
            prop_assert_eq!(s.remaining_hours(), duration - s.progress_hours());
        }
    }

    #[test]
    fn graduation_is_monotonic(courses in 1..20u32, advances in 0..40u32) {
        let mut s = Student::new("Ivan", courses).unwrap();
        let mut graduated = false;
        for _ in 0..advances {
            s.advance_course();
            if graduated {
                prop_assert!(s.is_graduated());
            }
            graduated = s.is_graduated();
            prop_assert_eq!(graduated, s.course() > courses);
        }
        prop_assert_eq!(s.course(), advances + 1);
    }
}

#[test]
fn subject_exhausted() {
    let mut s = Subject::new("X", 10).unwrap();
    s.learn(10).unwrap();
    assert_eq!(s.remaining_hours(), 0);
    assert_eq!(
        s.learn(1),
        Err(Error::LearnedHours {
            hours: 1,
            remaining: 0
        })
    );
}

#[test]
fn ivan_graduates_after_three_years() {
    let mut s = Student::new("Ivan", 3).unwrap();
    assert!(!s.is_graduated());
    for _ in 0..3 {
        s.advance_course();
    }
    assert!(s.is_graduated());
}
