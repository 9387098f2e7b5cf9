//! Relational users repository.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};

use super::entities::user::{ActiveModel, Entity as UserEntity};
use super::UsersRepository;
use crate::infra::DbSession;
use common::AppResult;
use domain::{User, UserCreate};

/// Repository over the `users` table, bound to a borrowed session.
///
/// Every statement runs inside the session's transaction; committing is left
/// to whoever owns the session.
pub struct SqlUsersRepository<'a> {
    session: &'a DbSession,
}

impl<'a> SqlUsersRepository<'a> {
    /// Create new repository instance
    pub fn new(session: &'a DbSession) -> Self {
        Self { session }
    }
}

#[async_trait]
impl<'a> UsersRepository for SqlUsersRepository<'a> {
    async fn list_users(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .all(self.session.connection())
            .await?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn get_user_by_id(&self, id: i32) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(self.session.connection())
            .await?;

        Ok(result.map(User::from))
    }

    async fn create_user(&mut self, payload: UserCreate) -> AppResult<User> {
        let active_model = ActiveModel {
            login: Set(payload.login),
            age: Set(payload.age),
            ..Default::default()
        };

        // Executed right away so the id and any unique violation surface here
        let model = active_model.insert(self.session.connection()).await?;
        tracing::debug!(id = model.id, "User row inserted");

        Ok(User::from(model))
    }
}
