//! Domain models for the catalog service

pub mod catalog;
pub mod search;

pub use catalog::{AuthorRecord, BookRecord, EraRecord, GenreRecord, SizeRecord};
pub use search::{SearchSpecification, PAGE_RANGE, YEAR_RANGE};
