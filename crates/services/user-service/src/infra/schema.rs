//! Table bootstrap for the relational backend.

use sea_orm::{ConnectionTrait, Schema};

use crate::repository::entities::user;
use common::AppResult;

/// Create the `users` table from its entity definition if it does not exist.
pub async fn ensure_schema<C>(conn: &C) -> AppResult<()>
where
    C: ConnectionTrait,
{
    let backend = conn.get_database_backend();
    let mut statement = Schema::new(backend).create_table_from_entity(user::Entity);
    statement.if_not_exists();

    conn.execute(backend.build(&statement)).await?;
    Ok(())
}
