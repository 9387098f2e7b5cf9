//! Tagged union over the repository backends.

use async_trait::async_trait;

use super::{FakeUsersRepository, SqlUsersRepository, UsersRepository};
use common::AppResult;
use domain::{User, UserCreate};

/// Repository chosen for one request.
pub enum UsersStore<'a> {
    Fake(FakeUsersRepository),
    Sql(SqlUsersRepository<'a>),
}

impl UsersStore<'_> {
    /// Backend name, for logs
    pub fn kind(&self) -> &'static str {
        match self {
            UsersStore::Fake(_) => "fake",
            UsersStore::Sql(_) => "db",
        }
    }
}

#[async_trait]
impl<'a> UsersRepository for UsersStore<'a> {
    async fn list_users(&self) -> AppResult<Vec<User>> {
        match self {
            UsersStore::Fake(repo) => repo.list_users().await,
            UsersStore::Sql(repo) => repo.list_users().await,
        }
    }

    async fn get_user_by_id(&self, id: i32) -> AppResult<Option<User>> {
        match self {
            UsersStore::Fake(repo) => repo.get_user_by_id(id).await,
            UsersStore::Sql(repo) => repo.get_user_by_id(id).await,
        }
    }

    async fn create_user(&mut self, payload: UserCreate) -> AppResult<User> {
        match self {
            UsersStore::Fake(repo) => repo.create_user(payload).await,
            UsersStore::Sql(repo) => repo.create_user(payload).await,
        }
    }
}
