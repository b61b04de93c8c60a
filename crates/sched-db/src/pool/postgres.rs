//! PostgreSQL connection pool management
//!
//! Pool sizing and timeouts come from the `[database]` section of the
//! application configuration; there is no separate pool config surface.

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};

use sched_common::DatabaseConfig;

/// Create a connection pool sized per the database configuration
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
        .connect(&config.url)
        .await
}

/// Apply embedded migrations to the connected database
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
