//! `SQLite` implementation of [`StudentRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, QueryBuilder, Row, Sqlite, SqlitePool};

use classroom_app::ports::StudentRepository;
use classroom_domain::email::Email;
use classroom_domain::error::ClassroomError;
use classroom_domain::id::{StudentId, TeacherId};
use classroom_domain::student::Student;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Student`].
struct Wrapper(Student);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Student> {
        value.map(|w| w.0)
    }

    fn unwrap_all(rows: Vec<Self>) -> Vec<Student> {
        rows.into_iter().map(|w| w.0).collect()
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: uuid::Uuid = row.try_get("id")?;
        let email: String = row.try_get("email")?;
        let suspended: bool = row.try_get("suspended")?;

        let email = Email::parse(email).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Student {
            id: StudentId::from_uuid(id),
            email,
            suspended,
        }))
    }
}

const INSERT_IF_MISSING: &str =
    "INSERT INTO students (id, email, suspended) VALUES (?, ?, 0) ON CONFLICT (email) DO NOTHING";
const SELECT_BY_EMAIL: &str = "SELECT id, email, suspended FROM students WHERE email = ?";
const SELECT_BY_EMAILS: &str = "SELECT id, email, suspended FROM students WHERE email IN (";
const SELECT_BY_TEACHER: &str = r"
    SELECT s.id, s.email, s.suspended
    FROM students s
    JOIN registrations r ON r.student_id = s.id
    WHERE r.teacher_id = ?
    ORDER BY s.email
";
/// Upper bound on `IN (...)` binds per statement, well under `SQLite`'s variable limit.
const MAX_BINDS_PER_QUERY: usize = 500;

const UPDATE: &str = "UPDATE students SET email = ?, suspended = ? WHERE id = ?";

/// `SQLite`-backed student repository.
pub struct SqliteStudentRepository {
    pool: SqlitePool,
}

impl SqliteStudentRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl StudentRepository for SqliteStudentRepository {
    async fn upsert(&self, email: &Email) -> Result<Student, ClassroomError> {
        sqlx::query(INSERT_IF_MISSING)
            .bind(StudentId::new().as_uuid())
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

    async fn find_by_email(&self, email: &str) -> Result<Option<Student>, ClassroomError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_EMAIL)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }

    async fn find_by_emails(&self, emails: &[Email]) -> Result<Vec<Student>, ClassroomError> {
        if emails.is_empty() {
            return Ok(Vec::new());
        }

        let mut students = Vec::with_capacity(emails.len());
        for chunk in emails.chunks(MAX_BINDS_PER_QUERY) {
            let mut builder = QueryBuilder::<Sqlite>::new(SELECT_BY_EMAILS);
            let mut separated = builder.separated(", ");
            for email in chunk {
                separated.push_bind(email.as_str());
            }
            separated.push_unseparated(")");

            let rows: Vec<Wrapper> = builder
                .build_query_as()
                .fetch_all(&self.pool)
                .await
                .map_err(StorageError::from)?;
            students.extend(Wrapper::unwrap_all(rows));
        }

        Ok(students)
    }

    async fn find_by_teacher(&self, teacher: TeacherId) -> Result<Vec<Student>, ClassroomError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_TEACHER)
            .bind(teacher.as_uuid())
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::unwrap_all(rows))
    }

    async fn update(&self, student: Student) -> Result<Student, ClassroomError> {
        sqlx::query(UPDATE)
            .bind(student.email.as_str())
            .bind(student.suspended)
            .bind(student.id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(student)
    }
}
