//! End-to-end tests for the HTTP API, driven through the router with
//! `tower::ServiceExt::oneshot`.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;
use uuid::Uuid;

use common::AppError;
use user_service_lib::api::{create_router, AppState};
use user_service_lib::config::Settings;

const USERS_DOCUMENT: &str =
    r#"{"users":[{"id":1,"login":"alice","age":20},{"id":2,"login":"bob","age":22}]}"#;

// =============================================================================
// Helpers
// =============================================================================

async fn fake_app() -> (TempDir, Router) {
    let dir = tempfile::tempdir().unwrap();
    let json_path = dir.path().join("users.json");
    std::fs::write(&json_path, USERS_DOCUMENT).unwrap();

    let settings = Settings {
        users_backend: "fake".to_string(),
        users_json_path: json_path.to_string_lossy().into_owned(),
        ..Settings::default()
    };
    let state = AppState::from_settings(settings).await.unwrap();
    (dir, create_router(state))
}

async fn db_app() -> (TempDir, Router) {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("users.db").display());

    let settings = Settings {
        users_backend: "db".to_string(),
        database_url: Some(url),
        ..Settings::default()
    };
    let state = AppState::from_settings(settings).await.unwrap();
    (dir, create_router(state))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

// =============================================================================
// Fake backend
// =============================================================================

#[tokio::test]
async fn test_list_users_from_json_source() {
    let (_dir, app) = fake_app().await;

    let (status, body) = send(&app, Method::GET, "/users", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"id": 1, "login": "alice", "age": 20},
            {"id": 2, "login": "bob", "age": 22}
        ])
    );
}

#[tokio::test]
async fn test_get_user_by_id() {
    let (_dir, app) = fake_app().await;

    let (status, body) = send(&app, Method::GET, "/users/2", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["login"], "bob");
}

#[tokio::test]
async fn test_get_unknown_user_is_not_found() {
    let (_dir, app) = fake_app().await;

    let (status, body) = send(&app, Method::GET, "/users/99999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_create_user_assigns_next_id() {
    let (_dir, app) = fake_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/users",
        Some(json!({"login": "carol", "age": 33})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"id": 3, "login": "carol", "age": 33}));
}

#[tokio::test]
async fn test_fake_creations_do_not_outlive_the_request() {
    let (_dir, app) = fake_app().await;

    send(
        &app,
        Method::POST,
        "/users",
        Some(json!({"login": "carol", "age": 33})),
    )
    .await;
    let (_, body) = send(&app, Method::GET, "/users", None).await;

    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_create_user_missing_field_is_rejected() {
    let (_dir, app) = fake_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/users",
        Some(json!({"login": "missing_age"})),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_create_user_constraint_violations_are_rejected() {
    let (_dir, app) = fake_app().await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/users",
        Some(json!({"login": "", "age": 30})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, body) = send(
        &app,
        Method::POST,
        "/users",
        Some(json!({"login": "dave", "age": -1})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("Age cannot be negative"));
}

#[tokio::test]
async fn test_health_without_database() {
    let (_dir, app) = fake_app().await;

    let (status, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["backend"], "fake");
    assert_eq!(body["database"]["status"], "not_configured");
}

#[tokio::test]
async fn test_missing_json_source_is_server_error() {
    let settings = Settings {
        users_backend: "fake".to_string(),
        users_json_path: "does/not/exist.json".to_string(),
        ..Settings::default()
    };
    let app = create_router(AppState::new(settings, None));

    let (status, body) = send(&app, Method::GET, "/users", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "IO_ERROR");
}

#[tokio::test]
async fn test_malformed_json_source_is_server_error() {
    let dir = tempfile::tempdir().unwrap();
    let json_path = dir.path().join("users.json");
    std::fs::write(&json_path, r#"{"users":{"id":1}}"#).unwrap();

    let settings = Settings {
        users_backend: "fake".to_string(),
        users_json_path: json_path.to_string_lossy().into_owned(),
        ..Settings::default()
    };
    let app = create_router(AppState::new(settings, None));

    let (status, body) = send(&app, Method::GET, "/users", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "CONFIGURATION_ERROR");
    let message = body["error"]["message"].as_str().unwrap();
    assert!(!message.contains("users"));
    assert!(!message.contains(&*json_path.to_string_lossy()));
}

// =============================================================================
// Database backend
// =============================================================================

#[tokio::test]
async fn test_db_create_then_get() {
    let (_dir, app) = db_app().await;
    let login = format!("user_{}", Uuid::new_v4().simple());

    let (status, created) = send(
        &app,
        Method::POST,
        "/users",
        Some(json!({"login": login, "age": 41})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let id = created["id"].as_i64().unwrap();
    let (status, fetched) = send(&app, Method::GET, &format!("/users/{}", id), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_db_duplicate_login_is_conflict() {
    let (_dir, app) = db_app().await;
    let payload = json!({"login": format!("user_{}", Uuid::new_v4().simple()), "age": 30});

    let (status, _) = send(&app, Method::POST, "/users", Some(payload.clone())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, Method::POST, "/users", Some(payload)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "CONFLICT");

    // The failed request rolled back; only the first row exists
    let (_, users) = send(&app, Method::GET, "/users", None).await;
    assert_eq!(users.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_db_health_is_healthy() {
    let (_dir, app) = db_app().await;

    let (status, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"]["status"], "healthy");
}

#[tokio::test]
async fn test_db_backend_without_engine_is_server_error() {
    let settings = Settings {
        users_backend: "db".to_string(),
        ..Settings::default()
    };
    let app = create_router(AppState::new(settings, None));

    let (status, body) = send(&app, Method::GET, "/users", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "CONFIGURATION_ERROR");
}

#[tokio::test]
async fn test_unknown_backend_fails_at_startup() {
    let settings = Settings {
        users_backend: "mongo".to_string(),
        ..Settings::default()
    };

    let result = AppState::from_settings(settings).await;

    assert!(matches!(result, Err(AppError::Configuration(_))));
}
