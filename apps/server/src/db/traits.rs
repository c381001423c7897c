//! Core traits for catalog storage backends

use crate::{
    models::{AuthorRecord, BookRecord, EraRecord, GenreRecord, SearchSpecification, SizeRecord},
    Result,
};
use async_trait::async_trait;

/// Book search over a catalog store.
///
/// Implementations return every book matching all populated filters of the
/// specification, ordered by rating (highest first), truncated to
/// `spec.limit` when present. A failure yields no partial result.
///
/// The search filters are not validated here; out-of-range bounds are passed
/// through to the store as given.
#[async_trait]
pub trait BookRepository: Send + Sync {
    async fn search(&self, spec: &SearchSpecification) -> Result<Vec<BookRecord>>;
}

/// Enumeration of the lookup tables that drive the search filters.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn list_authors(&self) -> Result<Vec<AuthorRecord>>;

    async fn list_genres(&self) -> Result<Vec<GenreRecord>>;

    /// Publication eras; open-ended eras carry `None` bounds.
    async fn list_eras(&self) -> Result<Vec<EraRecord>>;

    /// Book sizes by page count; open-ended sizes carry `None` bounds.
    async fn list_sizes(&self) -> Result<Vec<SizeRecord>>;
}
