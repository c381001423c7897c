pub mod assertions;
pub mod database;
pub mod doubles;
pub mod fixtures;

use std::sync::Arc;

use anyhow::Context as _;
use axum::{
    body::{Body, Bytes},
    http::{HeaderMap, HeaderName, HeaderValue, Method, Request, StatusCode},
    Router,
};
use readcommend::{
    api::create_router,
    db::{BookRepository, CatalogRepository, InMemoryBookRepository, InMemoryCatalogRepository},
    AppState, Config,
};
use tower::ServiceExt as _;

// Re-export commonly used items
pub use assertions::*;
pub use database::*;
pub use doubles::*;
pub use fixtures::*;

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

impl TestApp {
    /// Router over in-memory repositories holding the sample catalog.
    pub fn new() -> Self {
        let catalog = InMemoryCatalogRepository::new()
            .with_authors(sample_authors())
            .with_genres(sample_genres())
            .with_eras(sample_eras())
            .with_sizes(sample_sizes());

        Self::with_repositories(
            Arc::new(InMemoryBookRepository::new(sample_books())),
            Arc::new(catalog),
        )
    }

    pub fn with_repositories(
        books: Arc<dyn BookRepository>,
        catalog: Arc<dyn CatalogRepository>,
    ) -> Self {
        Self::with_config(|_| {}, books, catalog)
    }

    pub fn with_config(
        configure: impl FnOnce(&mut Config),
        books: Arc<dyn BookRepository>,
        catalog: Arc<dyn CatalogRepository>,
    ) -> Self {
        let mut config = Config::default();
        configure(&mut config);

        let state = AppState::from_repositories(config, books, catalog);
        let router = create_router(state.clone());

        Self { router, state }
    }

    pub async fn get(
        &self,
        path_and_query: &str,
    ) -> anyhow::Result<(StatusCode, HeaderMap, Bytes)> {
        self.request(Method::GET, path_and_query).await
    }

    pub async fn request(
        &self,
        method: Method,
        path_and_query: &str,
    ) -> anyhow::Result<(StatusCode, HeaderMap, Bytes)> {
        self.request_with_extra_headers(method, path_and_query, &[])
            .await
    }

    pub async fn request_with_extra_headers(
        &self,
        method: Method,
        path_and_query: &str,
        extra_headers: &[(&str, &str)],
    ) -> anyhow::Result<(StatusCode, HeaderMap, Bytes)> {
        let mut request = Request::builder()
            .method(method)
            .uri(path_and_query)
            .header("host", "example.org")
            .header("accept", "application/json")
            .body(Body::empty())
            .context("build request")?;

        for (name, value) in extra_headers {
            request.headers_mut().insert(
                name.parse::<HeaderName>().context("parse header name")?,
                value.parse::<HeaderValue>().context("parse header value")?,
            );
        }

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .context("dispatch request")?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .context("read response body")?;

        Ok((status, headers, body))
    }
}
