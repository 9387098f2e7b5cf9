//! Users service configuration.

use std::env;
use std::fmt;
use std::str::FromStr;

use common::{AppError, AppResult};

// =============================================================================
// Defaults
// =============================================================================

/// Backend used when `USERS_BACKEND` is not set
pub const DEFAULT_USERS_BACKEND: &str = "fake";

/// Database used when `DATABASE_URL` is not set
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/app.db?mode=rwc";

/// JSON source used when `USERS_JSON_PATH` is not set
pub const DEFAULT_USERS_JSON_PATH: &str = "data/users.json";

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8000;

// =============================================================================
// Backend selection
// =============================================================================

/// Known repository backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsersBackend {
    /// In-memory store loaded from the JSON source file
    Fake,
    /// Relational `users` table
    Db,
}

impl FromStr for UsersBackend {
    type Err = AppError;

    fn from_str(value: &str) -> AppResult<Self> {
        match value {
            "fake" => Ok(UsersBackend::Fake),
            "db" => Ok(UsersBackend::Db),
            other => Err(AppError::configuration(format!(
                "Unknown users backend '{}' (expected 'fake' or 'db')",
                other
            ))),
        }
    }
}

impl fmt::Display for UsersBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UsersBackend::Fake => write!(f, "fake"),
            UsersBackend::Db => write!(f, "db"),
        }
    }
}

// =============================================================================
// Settings
// =============================================================================

/// Users service settings.
#[derive(Clone)]
pub struct Settings {
    /// Repository backend name, checked when a repository is selected
    pub users_backend: String,
    /// Relational connection string; `None` falls back to the default
    pub database_url: Option<String>,
    /// Source document for the fake backend and the seed command
    pub users_json_path: String,
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("users_backend", &self.users_backend)
            .field("database_url", &"[REDACTED]")
            .field("users_json_path", &self.users_json_path)
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}

impl Settings {
    /// Load settings from `.env` and environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            users_backend: env::var("USERS_BACKEND")
                .unwrap_or_else(|_| DEFAULT_USERS_BACKEND.to_string()),
            database_url: env::var("DATABASE_URL").ok().filter(|url| !url.is_empty()),
            users_json_path: env::var("USERS_JSON_PATH")
                .unwrap_or_else(|_| DEFAULT_USERS_JSON_PATH.to_string()),
            host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            port: env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
        }
    }

    /// Parse the configured backend name.
    pub fn backend(&self) -> AppResult<UsersBackend> {
        self.users_backend.parse()
    }

    /// Connection string for the relational backend.
    pub fn database_url(&self) -> &str {
        self.database_url.as_deref().unwrap_or(DEFAULT_DATABASE_URL)
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            users_backend: DEFAULT_USERS_BACKEND.to_string(),
            database_url: None,
            users_json_path: DEFAULT_USERS_JSON_PATH.to_string(),
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
        }
    }
}
