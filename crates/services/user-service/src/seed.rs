//! Bulk load of the relational backend from the JSON source.
//!
//! Unlike `create_user`, records keep the ids found in the document; the
//! database's autoincrement is bypassed.

use std::path::Path;

use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

use crate::infra::{ensure_schema, DbSession};
use crate::repository::entities::user::ActiveModel;
use common::AppResult;
use domain::UsersFactory;

/// Insert every user of `json_path` into `engine`, creating the table if
/// needed. All rows go in one transaction; returns how many were inserted.
pub async fn seed_users(engine: &DatabaseConnection, json_path: impl AsRef<Path>) -> AppResult<usize> {
    let json_path = json_path.as_ref();
    let text = tokio::fs::read_to_string(json_path).await?;
    let users = UsersFactory::new().parse_users(&text)?;

    ensure_schema(engine).await?;

    let session = DbSession::begin(engine).await?;
    for user in &users {
        ActiveModel {
            id: Set(user.id),
            login: Set(user.login.clone()),
            age: Set(user.age),
        }
        .insert(session.connection())
        .await?;
    }
    session.commit().await?;

    tracing::info!(
        inserted = users.len(),
        path = %json_path.display(),
        "Users seeded"
    );

    Ok(users.len())
}
