//! Database layer - repositories and data access

pub mod books;
pub mod catalog;
pub mod memory;
pub mod nullable;
pub mod rows;
pub mod search;
pub mod traits;

use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::PgPool;

use crate::config::DatabaseConfig;
use crate::{Error, Result};

pub use books::PostgresBookRepository;
pub use catalog::PostgresCatalogRepository;
pub use memory::{InMemoryBookRepository, InMemoryCatalogRepository};
pub use nullable::Nullable;
pub use traits::{BookRepository, CatalogRepository};

/// Connection options built from the `database` config section.
pub fn connect_options(config: &DatabaseConfig) -> Result<PgConnectOptions> {
    let ssl_mode: PgSslMode = config
        .ssl_mode
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid database.ssl_mode: {e}"))?;

    let mut options = PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .database(&config.name)
        .username(&config.username)
        .ssl_mode(ssl_mode);

    if !config.password.is_empty() {
        options = options.password(&config.password);
    }
    if !config.schema.is_empty() {
        options = options.options([("search_path", config.schema.as_str())]);
    }

    Ok(options)
}

/// Open the pool and check that the store answers.
pub async fn connect_pool(config: &DatabaseConfig) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.pool_max_size)
        .min_connections(config.pool_min_size)
        .acquire_timeout(Duration::from_secs(config.pool_timeout_seconds))
        .connect_with(connect_options(config)?)
        .await?;

    sqlx::query("SELECT 1")
        .execute(&pool)
        .await
        .map_err(Error::execution("reach the database"))?;

    tracing::info!(
        host = %config.host,
        port = config.port,
        database = %config.name,
        schema = %config.schema,
        max_connections = config.pool_max_size,
        "Database pool ready"
    );

    Ok(pool)
}
