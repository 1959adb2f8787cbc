//! The documented usage examples of the model types, kept as scenarios so
//! that the `campus` binary can check them.

use crate::scenario::{
    ClassroomScenario, ClassroomStep, StudentScenario, StudentStep, SubjectScenario, SubjectStep,
};

fn classroom(
    name: &str,
    capacity: u32,
    rejected: bool,
    steps: Vec<ClassroomStep>,
) -> ClassroomScenario {
    ClassroomScenario {
        name: Some(name.to_owned()),
        number: 10,
        capacity,
        rejected,
        steps,
    }
}

fn subject(
    name: &str,
    title: &str,
    duration: u32,
    rejected: bool,
    steps: Vec<SubjectStep>,
) -> SubjectScenario {
    SubjectScenario {
        name: Some(name.to_owned()),
        subject: title.to_owned(),
        duration,
        rejected,
        steps,
    }
}

fn student(
    name: &str,
    who: &str,
    courses: u32,
    rejected: bool,
    steps: Vec<StudentStep>,
) -> StudentScenario {
    StudentScenario {
        name: Some(name.to_owned()),
        student: who.to_owned(),
        courses,
        rejected,
        steps,
    }
}

pub fn classrooms() -> Vec<ClassroomScenario> {
    use ClassroomStep::*;
    vec![
        classroom("new classroom is empty", 50, false, vec![Occupied(0)]),
        classroom(
            "lecture seats students",
            50,
            false,
            vec![StartLecture(40), Occupied(40)],
        ),
        classroom(
            "stopping a lecture empties the room",
            50,
            false,
            vec![StartLecture(40), StopLecture, Occupied(0)],
        ),
        classroom(
            "attendance is replaced, not added",
            50,
            false,
            vec![StartLecture(40), StartLecture(30), Occupied(30)],
        ),
        classroom(
            "too many students",
            50,
            false,
            vec![StartLecture(40), StopLecture, StartLectureFails(60), Occupied(0)],
        ),
        classroom(
            "full room",
            50,
            false,
            vec![StartLecture(50), Occupied(50), StartLectureFails(51)],
        ),
        classroom("no seats", 0, true, vec![]),
    ]
}

pub fn subjects() -> Vec<SubjectScenario> {
    use SubjectStep::*;
    vec![
        subject(
            "new subject has all hours left",
            "Linguistics",
            10,
            false,
            vec![Remaining(10)],
        ),
        subject(
            "learning reduces remaining hours",
            "Linguistics",
            10,
            false,
            vec![Learn(5), Remaining(5)],
        ),
        subject(
            "cannot learn more than remains",
            "Linguistics",
            10,
            false,
            vec![Learn(5), LearnFails(6), Remaining(5)],
        ),
        subject(
            "learning is additive",
            "Linguistics",
            10,
            false,
            vec![Learn(3), Learn(2), Remaining(5)],
        ),
        subject(
            "completed subject",
            "X",
            10,
            false,
            vec![Learn(10), Remaining(0), LearnFails(1)],
        ),
        subject("empty name", "", 10, true, vec![]),
        subject("no hours", "Linguistics", 0, true, vec![]),
    ]
}

pub fn students() -> Vec<StudentScenario> {
    use StudentStep::*;
    vec![
        student("freshman", "Ivan", 3, false, vec![Course(1), Graduated(false)]),
        student(
            "graduation after the last year",
            "Ivan",
            3,
            false,
            vec![
                AdvanceCourse,
                Graduated(false),
                AdvanceCourse,
                Graduated(false),
                AdvanceCourse,
                Graduated(true),
            ],
        ),
        student(
            "graduates stay graduated",
            "Ivan",
            1,
            false,
            vec![AdvanceCourse, AdvanceCourse, Course(3), Graduated(true)],
        ),
        student("empty name", "", 3, true, vec![]),
        student("no course-years", "Ivan", 0, true, vec![]),
    ]
}
