//! Throwaway PostgreSQL schemas for repository tests
//!
//! Tests using this are skipped unless `READCOMMEND_TEST_DATABASE_URL` is set.

use anyhow::Context as _;
use sqlx::{postgres::PgPoolOptions, Connection as _, PgPool};
use url::Url;
use uuid::Uuid;

pub const TEST_DATABASE_URL_ENV: &str = "READCOMMEND_TEST_DATABASE_URL";

const SCHEMA_SQL: &str = include_str!("../fixtures/schema.sql");

pub struct TestDatabase {
    pub pool: PgPool,
    schema: String,
    admin_database_url: String,
}

impl TestDatabase {
    /// Create a schema loaded with `tests/fixtures/schema.sql`.
    ///
    /// Returns `None` when no test database is configured.
    pub async fn create() -> anyhow::Result<Option<Self>> {
        let Ok(admin_database_url) = std::env::var(TEST_DATABASE_URL_ENV) else {
            eprintln!("{TEST_DATABASE_URL_ENV} not set, skipping PostgreSQL test");
            return Ok(None);
        };

        let schema = format!("test_{}", Uuid::new_v4().simple());
        let mut admin_conn = sqlx::PgConnection::connect(&admin_database_url)
            .await
            .context("connect admin db for schema create")?;
        sqlx::query(&format!(r#"CREATE SCHEMA "{}""#, schema))
            .execute(&mut admin_conn)
            .await
            .context("create test schema")?;

        let pool = PgPoolOptions::new()
            .max_connections(2)
            .connect(&with_search_path(&admin_database_url, &schema)?)
            .await
            .context("connect test pool")?;

        sqlx::raw_sql(SCHEMA_SQL)
            .execute(&pool)
            .await
            .context("load schema fixture")?;

        Ok(Some(Self {
            pool,
            schema,
            admin_database_url,
        }))
    }

    pub async fn execute(&self, sql: &str) -> anyhow::Result<()> {
        sqlx::raw_sql(sql)
            .execute(&self.pool)
            .await
            .with_context(|| format!("execute {sql}"))?;
        Ok(())
    }

    pub async fn cleanup(self) -> anyhow::Result<()> {
        self.pool.close().await;

        let mut admin_conn = sqlx::PgConnection::connect(&self.admin_database_url)
            .await
            .context("connect admin db for schema drop")?;
        sqlx::query(&format!(r#"DROP SCHEMA "{}" CASCADE"#, self.schema))
            .execute(&mut admin_conn)
            .await
            .context("drop test schema")?;

        Ok(())
    }
}

fn with_search_path(database_url: &str, schema: &str) -> anyhow::Result<String> {
    let mut url = Url::parse(database_url).context("parse database URL")?;
    url.query_pairs_mut()
        .append_pair("options", &format!("-c search_path={}", schema));
    Ok(url.to_string())
}
