//! User handlers.
//!
//! Each handler runs exactly one service operation inside
//! [`AppState::with_users_service`] and maps the outcome to HTTP.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};

use common::{AppResult, OptionExt};
use domain::{User, UserCreate};

use crate::api::extractors::ValidatedJson;
use crate::api::state::AppState;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user))
}

/// List all users
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = state
        .with_users_service(|service| Box::pin(async move { service.list_users().await }))
        .await?;

    Ok(Json(users))
}

/// Get user by ID, 404 when absent
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<User>> {
    let user = state
        .with_users_service(move |service| {
            Box::pin(async move { service.get_user_by_id(id).await })
        })
        .await?
        .ok_or_not_found()?;

    Ok(Json(user))
}

/// Create a user; the id is assigned by the backend
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UserCreate>,
) -> AppResult<(StatusCode, Json<User>)> {
    let user = state
        .with_users_service(move |mut service| {
            Box::pin(async move { service.create_user(payload).await })
        })
        .await?;

    tracing::info!(id = user.id, "User created");
    Ok((StatusCode::CREATED, Json(user)))
}
