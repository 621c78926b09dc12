//! Storage port: repository traits for persistence.

use std::future::Future;

use classroom_domain::email::Email;
use classroom_domain::error::ClassroomError;
use classroom_domain::id::{StudentId, TeacherId};
use classroom_domain::student::Student;
use classroom_domain::teacher::Teacher;

/// Repository for persisting and querying [`Teacher`]s and their rosters.
pub trait TeacherRepository {
    /// Return the teacher with `email`, creating it first if needed.
    fn upsert(&self, email: &Email)
    -> impl Future<Output = Result<Teacher, ClassroomError>> + Send;

    /// Look up a teacher by email.
    fn find_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<Teacher>, ClassroomError>> + Send;

    /// Register students to a teacher. Existing links are left untouched.
    fn enroll(
        &self,
        teacher: TeacherId,
        students: &[StudentId],
    ) -> impl Future<Output = Result<(), ClassroomError>> + Send;
}

/// Repository for persisting and querying [`Student`]s.
pub trait StudentRepository {
    /// Return the student with `email`, creating it (active) first if needed.
    fn upsert(&self, email: &Email)
    -> impl Future<Output = Result<Student, ClassroomError>> + Send;

    /// Look up a student by email.
    fn find_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<Student>, ClassroomError>> + Send;

    /// All students with one of the given emails. Unknown emails are skipped.
    fn find_by_emails(
        &self,
        emails: &[Email],
    ) -> impl Future<Output = Result<Vec<Student>, ClassroomError>> + Send;

    /// Students registered to `teacher`, ordered by email.
    fn find_by_teacher(
        &self,
        teacher: TeacherId,
    ) -> impl Future<Output = Result<Vec<Student>, ClassroomError>> + Send;

    /// Persist changes to an existing student.
    fn update(&self, student: Student)
    -> impl Future<Output = Result<Student, ClassroomError>> + Send;
}
