use crate::error::Result;
use crate::model::{Classroom, Student, Subject};
use serde::Deserialize;
use std::fmt;
use tracing::trace;

/// Which entity a scenario exercises.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, clap::ValueEnum)]
pub enum Group {
    Classroom,
    Subject,
    Student,
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Group::Classroom => "classroom",
            Group::Subject => "subject",
            Group::Student => "student",
        })
    }
}

/// An observed value differing from the expected one. Step 0 is the
/// construction of the entity.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Mismatch {
    pub step: usize,
    pub expected: String,
    pub observed: String,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.step == 0 {
            write!(f, "construction: ")?;
        } else {
            write!(f, "step {}: ", self.step)?;
        }
        write!(f, "expected {}, got {}", self.expected, self.observed)
    }
}

fn mismatch(expected: impl fmt::Display, observed: impl fmt::Display) -> Mismatch {
    Mismatch {
        step: 0,
        expected: expected.to_string(),
        observed: observed.to_string(),
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    Passed,
    Failed(Mismatch),
}

impl Outcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, Outcome::Passed)
    }
}

pub trait Scenario {
    fn group(&self) -> Group;
    fn label(&self) -> String;
    fn run(&self) -> Outcome;
}

/// Run an operation which must be refused, and check that it left the
/// entity untouched.
fn expect_violation<E, F>(entity: &mut E, op: F) -> std::result::Result<(), Mismatch>
where
    E: Clone + PartialEq + fmt::Display,
    F: FnOnce(&mut E) -> Result<()>,
{
    let before = entity.clone();
    match op(&mut *entity) {
        Ok(()) => Err(mismatch("a value violation", "success")),
        Err(_) if *entity != before => Err(mismatch(before, &*entity)),
        Err(e) => {
            trace!(error = %e, "operation refused as expected");
            Ok(())
        }
    }
}

fn expect_eq<T>(expected: T, observed: T) -> std::result::Result<(), Mismatch>
where
    T: PartialEq + fmt::Display,
{
    if expected == observed {
        Ok(())
    } else {
        Err(mismatch(expected, observed))
    }
}

fn replay<E, S, F>(built: Result<E>, rejected: bool, steps: &[S], mut apply: F) -> Outcome
where
    E: fmt::Display,
    S: fmt::Debug,
    F: FnMut(&mut E, &S) -> std::result::Result<(), Mismatch>,
{
    let mut entity = match (built, rejected) {
        (Ok(entity), false) => entity,
        (Err(e), true) => {
            trace!(error = %e, "construction refused as expected");
            return Outcome::Passed;
        }
        (Ok(entity), true) => {
            return Outcome::Failed(mismatch("a value violation", entity));
        }
        (Err(e), false) => return Outcome::Failed(mismatch("a valid entity", e)),
    };
    for (idx, step) in steps.iter().enumerate() {
        trace!(step = idx + 1, ?step, entity = %entity, "replaying step");
        if let Err(m) = apply(&mut entity, step) {
            return Outcome::Failed(Mismatch { step: idx + 1, ..m });
        }
    }
    Outcome::Passed
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ClassroomStep {
    StartLecture(u32),
    StartLectureFails(u32),
    StopLecture,
    Occupied(u32),
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ClassroomScenario {
    #[serde(default)]
    pub name: Option<String>,
    pub number: u32,
    pub capacity: u32,
    #[serde(default)]
    pub rejected: bool,
    #[serde(default)]
    pub steps: Vec<ClassroomStep>,
}

impl Scenario for ClassroomScenario {
    fn group(&self) -> Group {
        Group::Classroom
    }

    fn label(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("Classroom({}, {})", self.number, self.capacity))
    }

    fn run(&self) -> Outcome {
        let built = Classroom::new(self.number, self.capacity);
        replay(built, self.rejected, &self.steps, |c, step| match *step {
            ClassroomStep::StartLecture(n) => c
                .start_lecture(n)
                .map_err(|e| mismatch(format!("{n} students seated"), e)),
            ClassroomStep::StartLectureFails(n) => expect_violation(c, |c| c.start_lecture(n)),
            ClassroomStep::StopLecture => {
                c.stop_lecture();
                Ok(())
            }
            ClassroomStep::Occupied(n) => expect_eq(n, c.occupied()),
        })
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum SubjectStep {
    Learn(u32),
    LearnFails(u32),
    Remaining(u32),
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SubjectScenario {
    #[serde(default)]
    pub name: Option<String>,
    pub subject: String,
    pub duration: u32,
    #[serde(default)]
    pub rejected: bool,
    #[serde(default)]
    pub steps: Vec<SubjectStep>,
}

impl Scenario for SubjectScenario {
    fn group(&self) -> Group {
        Group::Subject
    }

    fn label(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("Subject({:?}, {})", self.subject, self.duration))
    }

    fn run(&self) -> Outcome {
        let built = Subject::new(self.subject.as_str(), self.duration);
        replay(built, self.rejected, &self.steps, |s, step| match *step {
            SubjectStep::Learn(h) => s
                .learn(h)
                .map_err(|e| mismatch(format!("{h} hours learned"), e)),
            SubjectStep::LearnFails(h) => expect_violation(s, |s| s.learn(h)),
            SubjectStep::Remaining(h) => expect_eq(h, s.remaining_hours()),
        })
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum StudentStep {
    AdvanceCourse,
    Course(u32),
    Graduated(bool),
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct StudentScenario {
    #[serde(default)]
    pub name: Option<String>,
    pub student: String,
    pub courses: u32,
    #[serde(default)]
    pub rejected: bool,
    #[serde(default)]
    pub steps: Vec<StudentStep>,
}

impl Scenario for StudentScenario {
    fn group(&self) -> Group {
        Group::Student
    }

    fn label(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("Student({:?}, {})", self.student, self.courses))
    }

    fn run(&self) -> Outcome {
        let built = Student::new(self.student.as_str(), self.courses);
        replay(built, self.rejected, &self.steps, |s, step| match *step {
            StudentStep::AdvanceCourse => {
                s.advance_course();
                Ok(())
            }
            StudentStep::Course(n) => expect_eq(n, s.course()),
            StudentStep::Graduated(g) => expect_eq(g, s.is_graduated()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hall(steps: Vec<ClassroomStep>) -> ClassroomScenario {
        ClassroomScenario {
            name: None,
            number: 10,
            capacity: 50,
            rejected: false,
            steps,
        }
    }

    #[test]
    fn passing_classroom() {
        let s = hall(vec![
            ClassroomStep::StartLecture(50),
            ClassroomStep::Occupied(50),
            ClassroomStep::StartLectureFails(51),
            ClassroomStep::Occupied(50),
            ClassroomStep::StopLecture,
            ClassroomStep::Occupied(0),
        ]);
        assert_eq!(s.label(), "Classroom(10, 50)");
        assert_eq!(s.run(), Outcome::Passed);
    }

    #[test]
    fn wrong_expectation_reports_step() {
        let s = hall(vec![ClassroomStep::StartLecture(40), ClassroomStep::Occupied(41)]);
        let Outcome::Failed(m) = s.run() else {
            panic!("scenario should have failed");
        };
        assert_eq!(m.step, 2);
        assert_eq!(m.to_string(), "step 2: expected 41, got 40");
    }

    #[test]
    fn unexpected_success_is_a_failure() {
        let s = hall(vec![ClassroomStep::StartLectureFails(50)]);
        assert!(!s.run().is_passed());
    }

    #[test]
    fn rejected_construction() {
        let s = SubjectScenario {
            name: Some("empty name".into()),
            subject: String::new(),
            duration: 10,
            rejected: true,
            steps: vec![],
        };
        assert_eq!(s.label(), "empty name");
        assert!(s.run().is_passed());
        let s = SubjectScenario {
            rejected: false,
            ..s
        };
        let Outcome::Failed(m) = s.run() else {
            panic!("construction should have failed");
        };
        assert_eq!(m.step, 0);
        assert_eq!(
            m.to_string(),
            "construction: expected a valid entity, got subject name cannot be empty"
        );
    }

    #[test]
    fn valid_entity_marked_rejected() {
        let s = StudentScenario {
            name: None,
            student: "Ivan".into(),
            courses: 3,
            rejected: true,
            steps: vec![],
        };
        assert!(!s.run().is_passed());
    }

    #[test]
    fn student_steps() {
        let s = StudentScenario {
            name: None,
            student: "Ivan".into(),
            courses: 1,
            rejected: false,
            steps: vec![
                StudentStep::Course(1),
                StudentStep::Graduated(false),
                StudentStep::AdvanceCourse,
                StudentStep::Course(2),
                StudentStep::Graduated(true),
            ],
        };
        assert_eq!(s.label(), "Student(\"Ivan\", 1)");
        assert!(s.run().is_passed());
    }
}
