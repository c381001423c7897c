//! PostgreSQL lookup-table enumeration

use async_trait::async_trait;
use futures::{future, TryStreamExt};
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::rows::{
    map_author_row, map_era_row, map_genre_row, map_size_row, AUTHOR_COLUMNS, ERA_COLUMNS,
    GENRE_COLUMNS, SIZE_COLUMNS,
};
use super::traits::CatalogRepository;
use crate::models::{AuthorRecord, EraRecord, GenreRecord, SizeRecord};
use crate::{Error, Result};

/// Catalog repository backed by a PostgreSQL pool.
#[derive(Clone)]
pub struct PostgresCatalogRepository {
    pool: PgPool,
}

impl PostgresCatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn list<T>(
        &self,
        table: &'static str,
        columns: &[&str],
        context: &'static str,
        map: fn(&PgRow) -> Result<T>,
    ) -> Result<Vec<T>>
    where
        T: Send,
    {
        let sql = list_sql(table, columns);
        tracing::debug!(sql = %sql, "Listing {}", table);

        sqlx::query(&sql)
            .fetch(&self.pool)
            .map_err(Error::execution(context))
            .and_then(|row| future::ready(map(&row)))
            .try_collect()
            .await
    }
}

fn list_sql(table: &str, columns: &[&str]) -> String {
    format!("SELECT {} FROM {} ORDER BY id", columns.join(", "), table)
}

#[async_trait]
impl CatalogRepository for PostgresCatalogRepository {
    async fn list_authors(&self) -> Result<Vec<AuthorRecord>> {
        self.list("author", &AUTHOR_COLUMNS, "list authors", map_author_row)
            .await
    }

    async fn list_genres(&self) -> Result<Vec<GenreRecord>> {
        self.list("genre", &GENRE_COLUMNS, "list genres", map_genre_row)
            .await
    }

    async fn list_eras(&self) -> Result<Vec<EraRecord>> {
        self.list("era", &ERA_COLUMNS, "list eras", map_era_row).await
    }

    async fn list_sizes(&self) -> Result<Vec<SizeRecord>> {
        self.list("size", &SIZE_COLUMNS, "list sizes", map_size_row)
            .await
    }
}
