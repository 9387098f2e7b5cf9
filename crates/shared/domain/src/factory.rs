//! Users factory - builds validated entities from a raw source document.
//!
//! Expected shape: `{ "users": [ { "id": 1, "login": "alice", "age": 20 }, ... ] }`

use std::collections::HashSet;

use serde::Deserialize;
use serde_json::Value;

use crate::constants::USERS_FIELD;
use crate::error::{DomainError, DomainResult};
use crate::user::User;

/// Turns a parsed users document into domain entities.
#[derive(Debug, Clone, Copy, Default)]
pub struct UsersFactory;

impl UsersFactory {
    pub fn new() -> Self {
        Self
    }

    /// Build users from a parsed document, preserving record order.
    ///
    /// Fails when the `users` field is missing, is not an array, or holds a
    /// record with missing/mistyped fields, a non-positive id or a repeated id.
    pub fn create_users(&self, document: &Value) -> DomainResult<Vec<User>> {
        let records = document.get(USERS_FIELD).ok_or_else(|| {
            DomainError::validation(format!("Missing \"{}\" field", USERS_FIELD))
        })?;

        let records = records.as_array().ok_or_else(|| {
            DomainError::validation(format!("\"{}\" must be a list of users", USERS_FIELD))
        })?;

        let mut seen = HashSet::with_capacity(records.len());
        let mut users = Vec::with_capacity(records.len());

        for (index, record) in records.iter().enumerate() {
            let user = User::deserialize(record).map_err(|e| {
                DomainError::validation(format!("Invalid user at index {}: {}", index, e))
            })?;

            if user.id < 1 {
                return Err(DomainError::validation(format!(
                    "Invalid user at index {}: id must be positive",
                    index
                )));
            }
            if !seen.insert(user.id) {
                return Err(DomainError::validation(format!(
                    "Invalid user at index {}: duplicate id {}",
                    index, user.id
                )));
            }

            users.push(user);
        }

        Ok(users)
    }

    /// Parse raw JSON text, then build users from it.
    pub fn parse_users(&self, text: &str) -> DomainResult<Vec<User>> {
        let document: Value = serde_json::from_str(text)
            .map_err(|e| DomainError::validation(format!("Malformed users document: {}", e)))?;

        self.create_users(&document)
    }
}
