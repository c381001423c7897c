//! Search service - book search driver
//!
//! Forwards a specification to the repository and returns its result
//! unchanged. Validation happens before this point.

use std::sync::Arc;

use crate::{
    db::BookRepository,
    models::{BookRecord, SearchSpecification},
    Result,
};

/// Search service coordinates book searches
#[derive(Clone)]
pub struct SearchService {
    repository: Arc<dyn BookRepository>,
}

impl SearchService {
    pub fn new(repository: Arc<dyn BookRepository>) -> Self {
        Self { repository }
    }

    /// Books matching `spec`, highest rated first.
    pub async fn search_books(&self, spec: &SearchSpecification) -> Result<Vec<BookRecord>> {
        self.repository.search(spec).await
    }
}
