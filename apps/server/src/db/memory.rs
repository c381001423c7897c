//! In-memory repositories
//!
//! Used by the HTTP tests and for running the service without a database.
//! Search semantics follow the PostgreSQL repository: all populated filters
//! are AND-ed, results are ordered by rating descending and truncated to the
//! limit.

use async_trait::async_trait;

use super::traits::{BookRepository, CatalogRepository};
use crate::models::{
    AuthorRecord, BookRecord, EraRecord, GenreRecord, SearchSpecification, SizeRecord,
};
use crate::Result;

#[derive(Debug, Clone, Default)]
pub struct InMemoryBookRepository {
    books: Vec<BookRecord>,
}

impl InMemoryBookRepository {
    pub fn new(books: Vec<BookRecord>) -> Self {
        Self { books }
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn search(&self, spec: &SearchSpecification) -> Result<Vec<BookRecord>> {
        let mut books: Vec<BookRecord> = self
            .books
            .iter()
            .filter(|book| spec.matches(book))
            .cloned()
            .collect();

        // Stable, so equal ratings keep insertion order.
        books.sort_by(|a, b| b.rating.total_cmp(&a.rating));

        if let Some(limit) = spec.limit {
            books.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        }

        Ok(books)
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalogRepository {
    authors: Vec<AuthorRecord>,
    genres: Vec<GenreRecord>,
    eras: Vec<EraRecord>,
    sizes: Vec<SizeRecord>,
}

impl InMemoryCatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_authors(mut self, authors: Vec<AuthorRecord>) -> Self {
        self.authors = authors;
        self
    }

    pub fn with_genres(mut self, genres: Vec<GenreRecord>) -> Self {
        self.genres = genres;
        self
    }

    pub fn with_eras(mut self, eras: Vec<EraRecord>) -> Self {
        self.eras = eras;
        self
    }

    pub fn with_sizes(mut self, sizes: Vec<SizeRecord>) -> Self {
        self.sizes = sizes;
        self
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalogRepository {
    async fn list_authors(&self) -> Result<Vec<AuthorRecord>> {
        Ok(self.authors.clone())
    }

    async fn list_genres(&self) -> Result<Vec<GenreRecord>> {
        Ok(self.genres.clone())
    }

    async fn list_eras(&self) -> Result<Vec<EraRecord>> {
        Ok(self.eras.clone())
    }

    async fn list_sizes(&self) -> Result<Vec<SizeRecord>> {
        Ok(self.sizes.clone())
    }
}
