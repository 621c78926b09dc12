//! Teacher service: registrations, common students, and notification recipients.

use std::collections::HashSet;

use classroom_domain::email::Email;
use classroom_domain::error::{ClassroomError, NotFoundError, ValidationError};
use classroom_domain::notification::Notification;
use classroom_domain::registration::Registration;
use classroom_domain::roster::{common_students, merge_recipients};
use classroom_domain::student::Student;
use classroom_domain::teacher::Teacher;

use crate::ports::{StudentRepository, TeacherRepository};

/// Application service for the teacher-facing use-cases.
pub struct TeacherService<T, S> {
    teachers: T,
    students: S,
}

impl<T, S> TeacherService<T, S>
where
    T: TeacherRepository,
    S: StudentRepository,
{
    /// Create a new service backed by the given repositories.
    pub fn new(teachers: T, students: S) -> Self {
        Self { teachers, students }
    }

    /// Register students to a teacher, creating either side when missing.
    ///
    /// Registering a student that is already on the teacher's roster is a no-op.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repositories.
    #[tracing::instrument(
        skip(self, registration),
        fields(teacher = %registration.teacher, students = registration.students.len())
    )]
    pub async fn register(&self, registration: Registration) -> Result<(), ClassroomError> {
        let teacher = self.teachers.upsert(&registration.teacher).await?;

        let mut student_ids = Vec::with_capacity(registration.students.len());
        for email in &registration.students {
            student_ids.push(self.students.upsert(email).await?.id);
        }

        self.teachers.enroll(teacher.id, &student_ids).await?;
        tracing::debug!(teacher_id = %teacher.id, "students registered");
        Ok(())
    }

    /// Students registered to every one of `teachers`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NoTeachersSpecified`] for an empty list,
    /// [`ClassroomError::NotFound`] when any teacher is unknown, or a storage
    /// error from the repositories.
    #[tracing::instrument(skip(self))]
    pub async fn common_students(&self, teachers: &[String]) -> Result<Vec<Email>, ClassroomError> {
        if teachers.is_empty() {
            return Err(ValidationError::NoTeachersSpecified.into());
        }

        let mut rosters = Vec::with_capacity(teachers.len());
        for email in teachers {
            let teacher = self.get_teacher(email).await?;
            let roster = self
                .students
                .find_by_teacher(teacher.id)
                .await?
                .into_iter()
                .map(|student| student.email)
                .collect();
            rosters.push(roster);
        }

        Ok(common_students(rosters))
    }

    /// Students that should receive `notification`.
    ///
    /// That is every active student registered to the sender, plus every
    /// `@mentioned` student that exists and is active, without duplicates.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownTeacher`] when the sender is not
    /// registered, or a storage error from the repositories.
    #[tracing::instrument(skip(self, notification), fields(teacher = %notification.teacher))]
    pub async fn recipients_for(
        &self,
        notification: &Notification,
    ) -> Result<Vec<Email>, ClassroomError> {
        let teacher = self
            .teachers
            .find_by_email(&notification.teacher)
            .await?
            .ok_or(ValidationError::UnknownTeacher)?;

        let registered = self
            .students
            .find_by_teacher(teacher.id)
            .await?
            .into_iter()
            .filter(Student::is_active)
            .map(|student| student.email);

        let mut distinct = HashSet::new();
        let mentions: Vec<Email> = notification
            .mentions()
            .into_iter()
            .filter(|email| distinct.insert(email.clone()))
            .collect();
        let active_mentioned: HashSet<Email> = if mentions.is_empty() {
            HashSet::new()
        } else {
            self.students
                .find_by_emails(&mentions)
                .await?
                .into_iter()
                .filter(Student::is_active)
                .map(|student| student.email)
                .collect()
        };
        let mentioned = mentions
            .into_iter()
            .filter(|email| active_mentioned.contains(email));

        Ok(merge_recipients(registered, mentioned))
    }

    async fn get_teacher(&self, email: &str) -> Result<Teacher, ClassroomError> {
        self.teachers.find_by_email(email).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Teacher",
                id: email.to_string(),
            }
            .into()
        })
    }
}
