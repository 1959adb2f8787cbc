pub use self::classroom::Classroom;
pub use self::student::Student;
pub use self::subject::Subject;

mod classroom;
mod student;
mod subject;
