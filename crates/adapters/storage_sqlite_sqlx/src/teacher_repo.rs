//! `SQLite` implementation of [`TeacherRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use classroom_app::ports::TeacherRepository;
use classroom_domain::email::Email;
use classroom_domain::error::ClassroomError;
use classroom_domain::id::{StudentId, TeacherId};
use classroom_domain::teacher::Teacher;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Teacher`].
struct Wrapper(Teacher);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Teacher> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: uuid::Uuid = row.try_get("id")?;
        let email: String = row.try_get("email")?;

        let email = Email::parse(email).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Teacher {
            id: TeacherId::from_uuid(id),
            email,
        }))
    }
}

const INSERT_IF_MISSING: &str =
    "INSERT INTO teachers (id, email) VALUES (?, ?) ON CONFLICT (email) DO NOTHING";
const SELECT_BY_EMAIL: &str = "SELECT id, email FROM teachers WHERE email = ?";
const INSERT_REGISTRATION: &str =
    "INSERT OR IGNORE INTO registrations (teacher_id, student_id) VALUES (?, ?)";

/// `SQLite`-backed teacher repository.
pub struct SqliteTeacherRepository {
    pool: SqlitePool,
}

impl SqliteTeacherRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl TeacherRepository for SqliteTeacherRepository {
    async fn upsert(&self, email: &Email) -> Result<Teacher, ClassroomError> {
        sqlx::query(INSERT_IF_MISSING)
            .bind(TeacherId::new().as_uuid())
            .bind(email.as_str())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        let row: Wrapper = sqlx::query_as(SELECT_BY_EMAIL)
            .bind(email.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(row.0)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Teacher>, ClassroomError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_EMAIL)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }

    async fn enroll(
        &self,
        teacher: TeacherId,
        students: &[StudentId],
    ) -> Result<(), ClassroomError> {
        let mut tx = self.pool.begin().await.map_err(StorageError::from)?;

        for student in students {
            sqlx::query(INSERT_REGISTRATION)
                .bind(teacher.as_uuid())
                .bind(student.as_uuid())
                .execute(&mut *tx)
                .await
                .map_err(StorageError::from)?;
        }

        tx.commit().await.map_err(StorageError::from)?;
        Ok(())
    }
}
