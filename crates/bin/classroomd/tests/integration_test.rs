//! End-to-end smoke tests for the full classroomd stack.
//!
//! Each test spins up the complete application (in-memory `SQLite`, real repos,
//! real services, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot`. No TCP port is bound.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use classroom_adapter_http_axum::router;
use classroom_adapter_http_axum::state::AppState;
use classroom_adapter_storage_sqlite_sqlx::{
    Config, SqliteStudentRepository, SqliteTeacherRepository,
};
use classroom_app::services::student_service::StudentService;
use classroom_app::services::teacher_service::TeacherService;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

/// Build a fully-wired router backed by an in-memory `SQLite` database.
async fn app() -> Router {
    let db = Config {
        database_url: "sqlite::memory:".to_string(),
    }
    .build()
    .await
    .expect("in-memory database should initialise");

    let pool = db.pool().clone();

    let teacher_service = TeacherService::new(
        SqliteTeacherRepository::new(pool.clone()),
        SqliteStudentRepository::new(pool.clone()),
    );
    let student_service = StudentService::new(SqliteStudentRepository::new(pool));

    let state = AppState::new(teacher_service, student_service).with_error_details(true);

    router::build(state)
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Send `request` and decode the body as JSON (`Value::Null` when empty).
async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(request).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    if bytes.is_empty() {
        return (status, Value::Null);
    }
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn register(app: &Router, teacher: &str, students: &[&str]) {
    let (status, _) = send(
        app,
        post_json(
            "/api/register",
            &json!({ "teacher": teacher, "students": students }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

async fn suspend(app: &Router, student: &str) {
    let (status, _) = send(app, post_json("/api/suspend", &json!({ "student": student }))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

fn assert_fail(body: &Value, message: &str) {
    assert_eq!(body["status"], "fail");
    assert_eq!(body["message"], message);
}

const KEN: &str = "teacherken@gmail.com";
const JOE: &str = "teacherjoe@gmail.com";

// ---------------------------------------------------------------------------
// Health check & fallback
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let resp = app().await.oneshot(get("/health")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"OK");
}

#[tokio::test]
async fn should_return_not_found_message_for_unknown_route() {
    let app = app().await;

    let (status, body) = send(&app, get("/api/unknown?x=1")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_fail(&body, "Can't find /api/unknown?x=1 on this server!");
}

// ---------------------------------------------------------------------------
// POST /api/register
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_register_students_to_teacher() {
    let app = app().await;

    register(
        &app,
        KEN,
        &["studentjon@gmail.com", "studenthon@gmail.com"],
    )
    .await;

    let (status, body) = send(
        &app,
        get("/api/commonstudents?teacher=teacherken%40gmail.com"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "status": "success",
            "students": ["studenthon@gmail.com", "studentjon@gmail.com"],
        })
    );
}

#[tokio::test]
async fn should_accept_repeated_registration_of_same_pair() {
    let app = app().await;

    register(&app, KEN, &["studentjon@gmail.com"]).await;
    register(&app, KEN, &["studentjon@gmail.com", "studentjon@gmail.com"]).await;

    let (_, body) = send(
        &app,
        get("/api/commonstudents?teacher=teacherken%40gmail.com"),
    )
    .await;
    assert_eq!(body["students"], json!(["studentjon@gmail.com"]));
}

#[tokio::test]
async fn should_reject_registration_without_students() {
    let app = app().await;

    let (status, body) = send(&app, post_json("/api/register", &json!({ "teacher": KEN }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_fail(&body, "Missing teacher or students");
}

#[tokio::test]
async fn should_reject_registration_without_teacher() {
    let app = app().await;

    let (status, body) = send(
        &app,
        post_json("/api/register", &json!({ "students": ["studentjon@gmail.com"] })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_fail(&body, "Missing teacher or students");
}

#[tokio::test]
async fn should_treat_non_array_students_as_missing() {
    let app = app().await;

    for students in [json!("studentjon@gmail.com"), json!(null), json!({ "a": 1 })] {
        let (status, body) = send(
            &app,
            post_json("/api/register", &json!({ "teacher": KEN, "students": students })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_fail(&body, "Missing teacher or students");
    }
}

#[tokio::test]
async fn should_reject_non_string_student_entry() {
    let app = app().await;

    let (status, body) = send(
        &app,
        post_json(
            "/api/register",
            &json!({ "teacher": KEN, "students": ["studentjon@gmail.com", 42] }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_fail(&body, "Invalid student email format");
}

#[tokio::test]
async fn should_reject_invalid_teacher_email() {
    let app = app().await;

    let (status, body) = send(
        &app,
        post_json(
            "/api/register",
            &json!({ "teacher": "not-an-email", "students": ["studentjon@gmail.com"] }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_fail(&body, "Invalid teacher email format");
}

#[tokio::test]
async fn should_reject_invalid_student_email_without_persisting() {
    let app = app().await;

    let (status, body) = send(
        &app,
        post_json(
            "/api/register",
            &json!({ "teacher": KEN, "students": ["studentjon@gmail.com", "bad email"] }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_fail(&body, "Invalid student email format");

    let (status, _) = send(
        &app,
        get("/api/commonstudents?teacher=teacherken%40gmail.com"),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_reject_malformed_json_body() {
    let app = app().await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/register")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"teacher\": "))
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "fail");
}

// ---------------------------------------------------------------------------
// GET /api/commonstudents
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_register_same_student_under_two_teachers() {
    let app = app().await;

    register(
        &app,
        KEN,
        &["commonstudent1@gmail.com", "studentonlyunderken@gmail.com"],
    )
    .await;
    register(
        &app,
        JOE,
        &["commonstudent1@gmail.com", "studentonlyunderjoe@gmail.com"],
    )
    .await;

    let (status, body) = send(
        &app,
        get("/api/commonstudents?teacher=teacherken%40gmail.com&teacher=teacherjoe%40gmail.com"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["students"], json!(["commonstudent1@gmail.com"]));
}

#[tokio::test]
async fn should_return_empty_list_when_no_students_in_common() {
    let app = app().await;

    register(&app, KEN, &["studentonlyunderken@gmail.com"]).await;
    register(&app, JOE, &["studentonlyunderjoe@gmail.com"]).await;

    let (status, body) = send(
        &app,
        get("/api/commonstudents?teacher=teacherken%40gmail.com&teacher=teacherjoe%40gmail.com"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "success", "students": [] }));
}

#[tokio::test]
async fn should_reject_common_students_without_teacher() {
    let app = app().await;

    let (status, body) = send(&app, get("/api/commonstudents")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_fail(&body, "No teachers specified");
}

#[tokio::test]
async fn should_return_not_found_for_unknown_teacher_in_common_students() {
    let app = app().await;
    register(&app, KEN, &["studentjon@gmail.com"]).await;

    let (status, body) = send(
        &app,
        get("/api/commonstudents?teacher=teacherken%40gmail.com&teacher=ghost%40gmail.com"),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_fail(&body, "Teacher does not exist");
}

// ---------------------------------------------------------------------------
// POST /api/suspend
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_suspend_student_idempotently() {
    let app = app().await;
    register(&app, KEN, &["studentbob@gmail.com", "studentmary@gmail.com"]).await;

    suspend(&app, "studentmary@gmail.com").await;
    suspend(&app, "studentmary@gmail.com").await;

    let (status, body) = retrieve(&app, KEN, "Hello @studentmary@gmail.com").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["recipients"], json!(["studentbob@gmail.com"]));
}

#[tokio::test]
async fn should_reject_suspend_of_unknown_student() {
    let app = app().await;

    let (status, body) = send(
        &app,
        post_json("/api/suspend", &json!({ "student": "ghost@gmail.com" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_fail(&body, "Student does not exist");
}

#[tokio::test]
async fn should_reject_suspend_without_student() {
    let app = app().await;

    let (status, body) = send(&app, post_json("/api/suspend", &json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_fail(&body, "No student specified");
}

// ---------------------------------------------------------------------------
// POST /api/retrievefornotifications
// ---------------------------------------------------------------------------

async fn retrieve(app: &Router, teacher: &str, notification: &str) -> (StatusCode, Value) {
    send(
        app,
        post_json(
            "/api/retrievefornotifications",
            &json!({ "teacher": teacher, "notification": notification }),
        ),
    )
    .await
}

#[tokio::test]
async fn should_include_registered_and_mentioned_students() {
    let app = app().await;
    register(&app, KEN, &["studentbob@gmail.com"]).await;
    register(
        &app,
        JOE,
        &["studentagnes@gmail.com", "studentmiche@gmail.com"],
    )
    .await;

    let (status, body) = retrieve(
        &app,
        KEN,
        "Hello students! @studentagnes@gmail.com @studentmiche@gmail.com",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "status": "success",
            "recipients": [
                "studentbob@gmail.com",
                "studentagnes@gmail.com",
                "studentmiche@gmail.com",
            ],
        })
    );
}

#[tokio::test]
async fn should_return_only_registered_students_without_mentions() {
    let app = app().await;
    register(&app, KEN, &["studentbob@gmail.com"]).await;
    register(&app, JOE, &["studentagnes@gmail.com"]).await;

    let (status, body) = retrieve(&app, KEN, "Hey everybody").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["recipients"], json!(["studentbob@gmail.com"]));
}

#[tokio::test]
async fn should_ignore_mentions_of_unknown_students_and_duplicates() {
    let app = app().await;
    register(&app, KEN, &["studentbob@gmail.com"]).await;

    let (_, body) = retrieve(
        &app,
        KEN,
        "Hi @studentbob@gmail.com and @stranger@gmail.com",
    )
    .await;

    assert_eq!(body["recipients"], json!(["studentbob@gmail.com"]));
}

#[tokio::test]
async fn should_resolve_notification_flooded_with_repeated_mentions() {
    let app = app().await;
    register(&app, KEN, &["studentbob@gmail.com"]).await;

    let text = "@studentbob@gmail.com ".repeat(40_000);
    let (status, body) = retrieve(&app, KEN, &text).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["recipients"], json!(["studentbob@gmail.com"]));
}

#[tokio::test]
async fn should_resolve_notification_with_many_distinct_mentions() {
    let app = app().await;
    register(&app, KEN, &["studentbob@gmail.com"]).await;
    register(&app, JOE, &["studentagnes@gmail.com"]).await;

    let mut text: String = (0..2_000).map(|i| format!("@ghost{i}@gmail.com ")).collect();
    text.push_str("@studentagnes@gmail.com");
    let (status, body) = retrieve(&app, KEN, &text).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["recipients"],
        json!(["studentbob@gmail.com", "studentagnes@gmail.com"])
    );
}

#[tokio::test]
async fn should_exclude_suspended_students_from_recipients() {
    let app = app().await;
    register(
        &app,
        KEN,
        &["studentbob@gmail.com", "studentmary@gmail.com"],
    )
    .await;
    register(&app, JOE, &["studentagnes@gmail.com"]).await;
    suspend(&app, "studentmary@gmail.com").await;
    suspend(&app, "studentagnes@gmail.com").await;

    let (status, body) = retrieve(
        &app,
        KEN,
        "Hello @studentagnes@gmail.com and @studentmary@gmail.com",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["recipients"], json!(["studentbob@gmail.com"]));
}

#[tokio::test]
async fn should_reject_notification_without_text() {
    let app = app().await;

    let (status, body) = send(
        &app,
        post_json("/api/retrievefornotifications", &json!({ "teacher": KEN })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_fail(&body, "Missing teacher or notification");
}

#[tokio::test]
async fn should_reject_notification_without_teacher() {
    let app = app().await;

    let (status, body) = send(
        &app,
        post_json(
            "/api/retrievefornotifications",
            &json!({ "notification": "Hello" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_fail(&body, "Missing teacher or notification");
}

#[tokio::test]
async fn should_reject_notification_from_unknown_teacher() {
    let app = app().await;

    let (status, body) = retrieve(&app, "ghost@gmail.com", "Hello").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_fail(&body, "Teacher does not exist");
}
