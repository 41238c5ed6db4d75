//! Embedded schema migrations.
//!
//! The SQL lives in `migrations/sqlite/` at the workspace root and is baked
//! into the binary at compile time, so deployments never ship loose files.
//! To evolve the schema, add a new `NNN_description.sql`; applied files are
//! immutable once released.

use sqlx::SqlitePool;
use tracing::info;

use crate::error::DbResult;

static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations/sqlite");

/// Brings the schema up to date, applying whatever `_sqlx_migrations` says
/// is still pending, in filename order, each inside its own transaction.
/// Safe to call repeatedly.
pub async fn run_migrations(pool: &SqlitePool) -> DbResult<()> {
    MIGRATOR.run(pool).await?;
    info!("Schema is up to date");
    Ok(())
}
