//! Version 1 API routes, mounted under `/api/v1`
//!
//! Every route serves `GET` only; any other method gets 405 with a JSON
//! message.

use axum::{routing::get, Router};

use crate::api::handlers::{self, method_not_allowed};
use crate::state::AppState;

pub fn v1_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/books",
            get(handlers::search_books).fallback(method_not_allowed),
        )
        .route(
            "/authors",
            get(handlers::list_authors).fallback(method_not_allowed),
        )
        .route(
            "/genres",
            get(handlers::list_genres).fallback(method_not_allowed),
        )
        .route("/eras", get(handlers::list_eras).fallback(method_not_allowed))
        .route(
            "/sizes",
            get(handlers::list_sizes).fallback(method_not_allowed),
        )
}
