//! Service layer - the operations the HTTP handlers drive

pub mod catalog;
pub mod search;

pub use catalog::CatalogService;
pub use search::SearchService;
