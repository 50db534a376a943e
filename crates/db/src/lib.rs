//! Persistence layer: row models, repositories, the [`EntityStore`]
//! abstraction and the consistency guard built on top of it.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub mod guard;
pub mod models;
pub mod repositories;
pub mod seed;
pub mod store;

pub use guard::{ConsistencyGuard, GuardError};
pub use store::{EntityStore, MemoryStore, PgStore, StoreError, DEFAULT_STORE_TIMEOUT};

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(
    database_url: &str,
    max_connections: u32,
    acquire_timeout: Duration,
) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(acquire_timeout)
        .connect(database_url)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the bundled migrations in `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
