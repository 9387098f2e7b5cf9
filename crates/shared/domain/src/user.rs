//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// User domain entity
///
/// The `id` is always assigned by the storage layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub login: String,
    pub age: i32,
}

impl User {
    /// Build a user from a creation payload and a storage-assigned id
    pub fn from_payload(id: i32, payload: UserCreate) -> Self {
        Self {
            id,
            login: payload.login,
            age: payload.age,
        }
    }
}

/// User creation data transfer object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct UserCreate {
    /// Unique login
    #[validate(length(min = 1, message = "Login cannot be empty"))]
    pub login: String,
    /// Age in years
    #[validate(range(min = 0, message = "Age cannot be negative"))]
    pub age: i32,
}

impl UserCreate {
    pub fn new(login: impl Into<String>, age: i32) -> Self {
        Self {
            login: login.into(),
            age,
        }
    }
}
