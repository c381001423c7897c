//! Book search handler
//!
//! `GET /api/v1/books?title=&min-pages=&max-pages=&min-year=&max-year=&genres=&authors=&limit=`

use axum::{
    extract::{RawQuery, State},
    Json,
};

use super::with_timeout;
use crate::{api::params, models::BookRecord, state::AppState, Result};

pub async fn search_books(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<Vec<BookRecord>>> {
    let spec = params::search_spec_from_query(query.as_deref())?;
    tracing::debug!(?spec, "Searching books");

    let books = with_timeout(&state, state.search_service.search_books(&spec)).await?;
    Ok(Json(books))
}
