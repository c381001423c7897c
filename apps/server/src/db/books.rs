//! PostgreSQL book search

use async_trait::async_trait;
use futures::{future, TryStreamExt};
use sqlx::PgPool;

use super::rows::map_book_row;
use super::search::{bind_all, BookQuery};
use super::traits::BookRepository;
use crate::models::{BookRecord, SearchSpecification};
use crate::{Error, Result};

/// Book repository backed by a PostgreSQL pool.
#[derive(Clone)]
pub struct PostgresBookRepository {
    pool: PgPool,
}

impl PostgresBookRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookRepository for PostgresBookRepository {
    async fn search(&self, spec: &SearchSpecification) -> Result<Vec<BookRecord>> {
        let query = BookQuery::new(spec);
        let (sql, bind_params) = query.build_sql()?;

        tracing::debug!(
            sql = %sql,
            bind_count = bind_params.len(),
            "Executing book search"
        );

        let books: Vec<BookRecord> = bind_all(sqlx::query(&sql), bind_params)
            .fetch(&self.pool)
            .map_err(Error::execution("search books"))
            .and_then(|row| future::ready(map_book_row(&row)))
            .try_collect()
            .await?;

        tracing::debug!(count = books.len(), "Book search complete");

        Ok(books)
    }
}
