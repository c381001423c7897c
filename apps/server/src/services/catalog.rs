//! Catalog service - lookup lists behind the search filters

use std::sync::Arc;

use crate::{
    db::CatalogRepository,
    models::{AuthorRecord, EraRecord, GenreRecord, SizeRecord},
    Result,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Arc<dyn CatalogRepository>,
}

impl CatalogService {
    pub fn new(repository: Arc<dyn CatalogRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_authors(&self) -> Result<Vec<AuthorRecord>> {
        self.repository.list_authors().await
    }

    pub async fn list_genres(&self) -> Result<Vec<GenreRecord>> {
        self.repository.list_genres().await
    }

    pub async fn list_eras(&self) -> Result<Vec<EraRecord>> {
        self.repository.list_eras().await
    }

    pub async fn list_sizes(&self) -> Result<Vec<SizeRecord>> {
        self.repository.list_sizes().await
    }
}
