//! Book search query construction

mod bind;
pub mod predicate;
mod query_builder;

pub use bind::BindValue;
pub(crate) use bind::bind_all;
pub use predicate::{build_predicates, Condition, Predicate};
pub use query_builder::{BookQuery, BOOK_COLUMNS, MAX_BIND_PARAMS};
