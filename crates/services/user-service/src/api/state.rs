//! Application state for dependency injection.
//!
//! The state holds only process-wide things: settings and, for the `db`
//! backend, the shared engine. Sessions, repositories and services are built
//! per request by [`AppState::with_users_service`].

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::{Settings, UsersBackend};
use crate::infra::{ensure_schema, get_engine, with_session, SessionFuture};
use crate::repository::UsersStore;
use crate::service::{build_users_service, UsersService};
use common::AppResult;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    /// Present only when the `db` backend is configured
    pub engine: Option<DatabaseConnection>,
}

impl AppState {
    /// Create new app state.
    pub fn new(settings: Settings, engine: Option<DatabaseConnection>) -> Self {
        Self {
            settings: Arc::new(settings),
            engine,
        }
    }

    /// Create app state from settings, connecting the engine when needed.
    ///
    /// Fails fast on an unknown backend name.
    pub async fn from_settings(settings: Settings) -> AppResult<Self> {
        let engine = match settings.backend()? {
            UsersBackend::Fake => None,
            UsersBackend::Db => {
                let engine = get_engine(settings.database_url()).await?;
                ensure_schema(&engine).await?;
                Some(engine)
            }
        };

        Ok(Self::new(settings, engine))
    }

    /// Run `f` with a users service built for this request.
    ///
    /// A session is opened first when an engine is configured and released
    /// once `f` completes, whatever the outcome.
    pub async fn with_users_service<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(UsersService<UsersStore<'a>>) -> SessionFuture<'a, T> + Send + 'static,
        T: Send + 'static,
    {
        let settings = Arc::clone(&self.settings);

        with_session(self.engine.as_ref(), move |session| {
            Box::pin(async move {
                let service = build_users_service(&settings, session).await?;
                f(service).await
            })
        })
        .await
    }
}
