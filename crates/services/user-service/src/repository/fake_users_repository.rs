//! File-backed users repository.
//!
//! The whole JSON source is read once at construction and kept in memory.
//! Created users are never written back to the file.
//!
//! Login uniqueness is not enforced here, unlike the relational backend.
//! Mutation goes through `&mut self`, so a store has one user at a time.

use std::path::Path;

use async_trait::async_trait;

use common::{AppError, AppResult};
use domain::{User, UserCreate, UsersFactory, FIRST_USER_ID};

use super::UsersRepository;

/// In-memory repository seeded from a JSON document.
#[derive(Debug, Clone, Default)]
pub struct FakeUsersRepository {
    users: Vec<User>,
}

impl FakeUsersRepository {
    /// Read and parse `json_path` through `factory`.
    ///
    /// A malformed document is a configuration error, never a validation one.
    pub async fn load(factory: UsersFactory, json_path: impl AsRef<Path>) -> AppResult<Self> {
        let json_path = json_path.as_ref();
        let text = tokio::fs::read_to_string(json_path).await?;
        let users = factory.parse_users(&text).map_err(|e| {
            AppError::configuration(format!(
                "Invalid users source {}: {}",
                json_path.display(),
                e
            ))
        })?;

        tracing::debug!(
            count = users.len(),
            path = %json_path.display(),
            "Users loaded from JSON source"
        );

        Ok(Self { users })
    }

    /// Create a repository over already validated users.
    pub fn from_users(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Highest id plus one; ids freed by gaps are not reused.
    fn next_id(&self) -> i32 {
        self.users
            .iter()
            .map(|user| user.id)
            .max()
            .map_or(FIRST_USER_ID, |max| max + 1)
    }
}

#[async_trait]
impl UsersRepository for FakeUsersRepository {
    async fn list_users(&self) -> AppResult<Vec<User>> {
        Ok(self.users.clone())
    }

    async fn get_user_by_id(&self, id: i32) -> AppResult<Option<User>> {
        Ok(self.users.iter().find(|user| user.id == id).cloned())
    }

    async fn create_user(&mut self, payload: UserCreate) -> AppResult<User> {
        let user = User::from_payload(self.next_id(), payload);
        self.users.push(user.clone());
        Ok(user)
    }
}
