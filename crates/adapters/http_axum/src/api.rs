//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod students;
#[allow(clippy::missing_errors_doc)]
pub mod teachers;

use axum::Router;
use axum::routing::{get, post};

use classroom_app::ports::{StudentRepository, TeacherRepository};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<TR, SR>() -> Router<AppState<TR, SR>>
where
    TR: TeacherRepository + Send + Sync + 'static,
    SR: StudentRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/register", post(teachers::register::<TR, SR>))
        .route("/commonstudents", get(teachers::common_students::<TR, SR>))
        .route(
            "/retrievefornotifications",
            post(teachers::retrieve_for_notifications::<TR, SR>),
        )
        .route("/suspend", post(students::suspend::<TR, SR>))
}
