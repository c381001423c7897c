//! readcommend - book recommendation search service
//!
//! Serves a read-only catalog of books, authors, genres, eras and sizes
//! from PostgreSQL:
//! - Filtered book search ordered by rating
//! - Lookup lists that drive the search filters
//! - JSON HTTP API under `/api/v1`

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod state;

pub use config::Config;
pub use error::{Error, Result};
pub use state::AppState;
