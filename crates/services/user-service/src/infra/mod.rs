//! Infrastructure layer - database engines, schema and units of work.

mod engine;
mod schema;
mod unit_of_work;

pub use engine::{clear_engine_cache, get_engine, ping};
pub use schema::ensure_schema;
pub use unit_of_work::{with_session, DbSession, SessionFuture};
