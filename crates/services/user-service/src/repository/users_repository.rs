//! Users repository contract shared by every backend.

use async_trait::async_trait;

use common::AppResult;
use domain::{User, UserCreate};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Instances are built per request and dropped with it.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UsersRepository: Send + Sync {
    /// List all users
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Find user by ID; `None` when no user has this id
    async fn get_user_by_id(&self, id: i32) -> AppResult<Option<User>>;

    /// Create a new user; the backend assigns the id
    async fn create_user(&mut self, payload: UserCreate) -> AppResult<User>;
}
