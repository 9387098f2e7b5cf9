//! Service container - picks the users repository for one request.
//!
//! SOLID (DIP): callers receive a `UsersService` over [`UsersStore`] and never
//! name a concrete backend.

use common::{AppError, AppResult};
use domain::UsersFactory;

use super::UsersService;
use crate::config::{Settings, UsersBackend};
use crate::infra::DbSession;
use crate::repository::{FakeUsersRepository, SqlUsersRepository, UsersStore};

/// Build the repository configured by `settings.users_backend`.
///
/// - `fake`: loads `users_json_path`; any session is ignored.
/// - `db`: binds to `session`, which must be present.
///
/// Unknown backends and a `db` backend without a session are configuration
/// errors, reported before any storage is touched.
pub async fn build_users_repository<'a>(
    settings: &Settings,
    session: Option<&'a DbSession>,
) -> AppResult<UsersStore<'a>> {
    let store = match settings.backend()? {
        UsersBackend::Fake => {
            let repo =
                FakeUsersRepository::load(UsersFactory::new(), &settings.users_json_path).await?;
            UsersStore::Fake(repo)
        }
        UsersBackend::Db => {
            let session = session.ok_or_else(|| {
                AppError::configuration("The 'db' users backend requires a database session")
            })?;
            UsersStore::Sql(SqlUsersRepository::new(session))
        }
    };

    tracing::debug!(backend = store.kind(), "Users repository selected");
    Ok(store)
}

/// Build a users service over the configured repository.
pub async fn build_users_service<'a>(
    settings: &Settings,
    session: Option<&'a DbSession>,
) -> AppResult<UsersService<UsersStore<'a>>> {
    let repository = build_users_repository(settings, session).await?;
    Ok(UsersService::new(repository))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn settings(backend: &str, users_json_path: &str) -> Settings {
        Settings {
            users_backend: backend.to_string(),
            users_json_path: users_json_path.to_string(),
            ..Settings::default()
        }
    }

    #[tokio::test]
    async fn test_fake_backend_builds_fake_repository() {
        let mut source = tempfile::NamedTempFile::new().unwrap();
        source
            .write_all(br#"{"users":[{"id":1,"login":"alice","age":20}]}"#)
            .unwrap();
        let settings = settings("fake", source.path().to_str().unwrap());

        let store = build_users_repository(&settings, None).await.unwrap();

        assert!(matches!(store, UsersStore::Fake(_)));
    }

    #[tokio::test]
    async fn test_db_backend_without_session_is_configuration_error() {
        let settings = settings("db", "unused.json");

        let result = build_users_repository(&settings, None).await;

        assert!(matches!(result, Err(AppError::Configuration(_))));
    }

    #[tokio::test]
    async fn test_unknown_backend_is_configuration_error() {
        let settings = settings("mongo", "unused.json");

        let result = build_users_repository(&settings, None).await;

        assert!(matches!(result, Err(AppError::Configuration(_))));
    }

    #[tokio::test]
    async fn test_service_built_over_fake_backend() {
        let mut source = tempfile::NamedTempFile::new().unwrap();
        source
            .write_all(br#"{"users":[{"id":1,"login":"alice","age":20},{"id":2,"login":"bob","age":22}]}"#)
            .unwrap();
        let settings = settings("fake", source.path().to_str().unwrap());

        let service = build_users_service(&settings, None).await.unwrap();

        assert_eq!(service.list_users().await.unwrap().len(), 2);
    }
}
