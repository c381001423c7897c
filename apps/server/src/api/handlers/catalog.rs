//! Lookup list handlers

use axum::{extract::State, Json};

use super::with_timeout;
use crate::{
    models::{AuthorRecord, EraRecord, GenreRecord, SizeRecord},
    state::AppState,
    Result,
};

pub async fn list_authors(State(state): State<AppState>) -> Result<Json<Vec<AuthorRecord>>> {
    let authors = with_timeout(&state, state.catalog_service.list_authors()).await?;
    Ok(Json(authors))
}

pub async fn list_genres(State(state): State<AppState>) -> Result<Json<Vec<GenreRecord>>> {
    let genres = with_timeout(&state, state.catalog_service.list_genres()).await?;
    Ok(Json(genres))
}

pub async fn list_eras(State(state): State<AppState>) -> Result<Json<Vec<EraRecord>>> {
    let eras = with_timeout(&state, state.catalog_service.list_eras()).await?;
    Ok(Json(eras))
}

pub async fn list_sizes(State(state): State<AppState>) -> Result<Json<Vec<SizeRecord>>> {
    let sizes = with_timeout(&state, state.catalog_service.list_sizes()).await?;
    Ok(Json(sizes))
}
