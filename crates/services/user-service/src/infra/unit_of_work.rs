//! Unit of Work - one database transaction per request.
//!
//! A [`DbSession`] wraps a single `DatabaseTransaction` checked out from an
//! engine. It is owned by the request scope that opened it and lent by
//! reference to repositories; nothing caches or shares it.
//!
//! [`with_session`] is the scope: the session is committed when the closure
//! succeeds and rolled back when it fails. If the closure panics or its future
//! is dropped, the transaction's own drop rolls it back.

use std::future::Future;
use std::pin::Pin;

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use common::AppResult;

/// Future returned by closures run inside [`with_session`].
pub type SessionFuture<'a, T> = Pin<Box<dyn Future<Output = AppResult<T>> + Send + 'a>>;

/// Scoped unit-of-work handle.
pub struct DbSession {
    txn: DatabaseTransaction,
}

impl DbSession {
    /// Begin a new transaction on `engine`.
    pub async fn begin(engine: &DatabaseConnection) -> AppResult<Self> {
        let txn = engine.begin().await?;
        tracing::debug!("Session opened");
        Ok(Self { txn })
    }

    /// Connection to run statements on; every statement joins the transaction.
    pub fn connection(&self) -> &DatabaseTransaction {
        &self.txn
    }

    /// Commit the transaction and release the connection.
    pub async fn commit(self) -> AppResult<()> {
        self.txn.commit().await?;
        tracing::debug!("Session committed");
        Ok(())
    }

    /// Roll back the transaction and release the connection.
    pub async fn rollback(self) -> AppResult<()> {
        self.txn.rollback().await?;
        tracing::debug!("Session rolled back");
        Ok(())
    }
}

/// Run `f` inside a request-scoped session.
///
/// Without an engine (file-backed configuration) `f` receives `None` and no
/// transaction is opened. With one, `f` receives the session, which is
/// committed on `Ok` and rolled back on `Err`; the closure's error wins over a
/// rollback failure.
pub async fn with_session<F, T>(engine: Option<&DatabaseConnection>, f: F) -> AppResult<T>
where
    F: for<'a> FnOnce(Option<&'a DbSession>) -> SessionFuture<'a, T> + Send,
    T: Send,
{
    let Some(engine) = engine else {
        return f(None).await;
    };

    let session = DbSession::begin(engine).await?;

    match f(Some(&session)).await {
        Ok(value) => {
            session.commit().await?;
            Ok(value)
        }
        Err(e) => {
            if let Err(rollback_err) = session.rollback().await {
                tracing::error!("Session rollback failed: {}", rollback_err);
            }
            Err(e)
        }
    }
}
