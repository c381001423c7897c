//! Shared application state handed to every handler

use std::sync::Arc;

use anyhow::Context;

use crate::{
    config::Config,
    db::{
        self, BookRepository, CatalogRepository, PostgresBookRepository,
        PostgresCatalogRepository,
    },
    services::{CatalogService, SearchService},
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub search_service: Arc<SearchService>,
    pub catalog_service: Arc<CatalogService>,
}

impl AppState {
    /// Connect to PostgreSQL and wire the PostgreSQL repositories.
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let pool = db::connect_pool(&config.database)
            .await
            .context("Failed to connect to the database")?;

        Ok(Self::from_repositories(
            config,
            Arc::new(PostgresBookRepository::new(pool.clone())),
            Arc::new(PostgresCatalogRepository::new(pool)),
        ))
    }

    /// Wire arbitrary repositories, e.g. the in-memory ones.
    pub fn from_repositories(
        config: Config,
        books: Arc<dyn BookRepository>,
        catalog: Arc<dyn CatalogRepository>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            search_service: Arc::new(SearchService::new(books)),
            catalog_service: Arc::new(CatalogService::new(catalog)),
        }
    }
}
