//! Users service - Handles user-related business logic.
//!
//! SOLID (SRP): Handles user-related use cases only.

use common::AppResult;
use domain::{User, UserCreate};

use crate::repository::UsersRepository;

/// Backend-agnostic users service holding exactly one repository.
pub struct UsersService<R> {
    repository: R,
}

impl<R: UsersRepository> UsersService<R> {
    /// Create new users service instance with repository
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repository.list_users().await
    }

    /// Absent users are `Ok(None)`; turning that into a 404 is the caller's call.
    pub async fn get_user_by_id(&self, id: i32) -> AppResult<Option<User>> {
        self.repository.get_user_by_id(id).await
    }

    pub async fn create_user(&mut self, payload: UserCreate) -> AppResult<User> {
        self.repository.create_user(payload).await
    }
}
