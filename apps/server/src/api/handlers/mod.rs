//! Request handlers for API endpoints
//!
//! Handlers extract request input, call the services under the configured
//! request timeout and render JSON. Errors render through `Error`'s
//! `IntoResponse`.

pub mod books;
pub mod catalog;

use std::future::Future;

use axum::http::Method;

use crate::{state::AppState, Error, Result};

pub use books::search_books;
pub use catalog::{list_authors, list_eras, list_genres, list_sizes};

/// Run a service call under `server.request_timeout_seconds`.
///
/// On expiry the inner future is dropped, which cancels any in-flight query.
pub(crate) async fn with_timeout<T>(
    state: &AppState,
    operation: impl Future<Output = Result<T>>,
) -> Result<T> {
    tokio::time::timeout(state.config.request_timeout(), operation)
        .await
        .map_err(|_| Error::Timeout)?
}

/// Fallback for every method a route does not serve.
pub async fn method_not_allowed(method: Method) -> Error {
    Error::MethodNotAllowed(method.to_string())
}
