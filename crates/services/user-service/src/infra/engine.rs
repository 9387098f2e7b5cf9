//! Process-wide registry of database engines.
//!
//! An engine is a sea-orm `DatabaseConnection`, i.e. a connection pool. One is
//! created per distinct database URL on first use and shared by every request
//! afterwards. Units of work are never cached here, see [`super::DbSession`].

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Statement};
use tokio::sync::{Mutex, OnceCell};

use common::{AppError, AppResult};

type EngineCell = Arc<OnceCell<DatabaseConnection>>;

/// One cell per database URL. The map lock only covers lookups; connecting
/// happens on the URL's own cell, so a slow connect never stalls other URLs.
static ENGINES: Lazy<Mutex<HashMap<String, EngineCell>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Get the engine for `database_url`, connecting on first use.
///
/// Concurrent first calls for the same URL share a single connect. A failed
/// connect leaves the cell empty and the next call tries again.
pub async fn get_engine(database_url: &str) -> AppResult<DatabaseConnection> {
    let cell = {
        let mut engines = ENGINES.lock().await;
        Arc::clone(engines.entry(database_url.to_string()).or_default())
    };

    let engine = cell
        .get_or_try_init(|| async {
            let engine = Database::connect(database_url).await?;
            tracing::info!(
                backend = ?engine.get_database_backend(),
                "Database engine created"
            );
            Ok::<_, AppError>(engine)
        })
        .await?;

    Ok(engine.clone())
}

/// Forget every cached engine and return how many were dropped.
///
/// Handles already given out keep working; the next [`get_engine`] call for a
/// URL builds a fresh pool. Meant for test setups that switch databases.
pub async fn clear_engine_cache() -> usize {
    let mut engines = ENGINES.lock().await;
    let cleared = engines.values().filter(|cell| cell.initialized()).count();
    engines.clear();
    tracing::debug!(cleared, "Database engine cache cleared");
    cleared
}

/// Check database connectivity by executing a simple query.
pub async fn ping(engine: &DatabaseConnection) -> AppResult<()> {
    engine
        .execute(Statement::from_string(
            engine.get_database_backend(),
            "SELECT 1".to_string(),
        ))
        .await?;
    Ok(())
}
