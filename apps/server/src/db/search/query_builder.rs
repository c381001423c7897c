//! SQL query builder for book searches.
//!
//! Renders the fixed book projection, the AND-chain of search predicates,
//! the rating ordering and an optional row limit into one statement with
//! `$n` placeholders and the matching ordered bind list.

use super::bind::BindValue;
use super::predicate::{build_predicates, Predicate};
use crate::models::SearchSpecification;
use crate::{Error, Result};

/// Largest number of bind parameters PostgreSQL accepts in one statement.
pub const MAX_BIND_PARAMS: usize = u16::MAX as usize;

/// Projected columns, in scan order.
pub const BOOK_COLUMNS: [&str; 10] = [
    "book.id",
    "book.title",
    "year_published",
    "rating",
    "pages",
    "author.id",
    "first_name",
    "last_name",
    "genre.id",
    "genre.title",
];

const BOOK_FROM: &str = "FROM book \
    LEFT JOIN author ON book.author_id = author.id \
    LEFT JOIN genre ON book.genre_id = genre.id";

const BOOK_ORDER_BY: &str = "ORDER BY rating DESC";

/// PostgreSQL reads `LIMIT` as a bigint; larger limits are clamped to it.
const MAX_LIMIT: u64 = i64::MAX as u64;

/// Query builder for book searches.
#[derive(Debug, Clone)]
pub struct BookQuery {
    predicates: Vec<Predicate>,
    limit: Option<u64>,
}

impl BookQuery {
    pub fn new(spec: &SearchSpecification) -> Self {
        Self {
            predicates: build_predicates(spec),
            limit: spec.limit,
        }
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn build_sql(&self) -> Result<(String, Vec<BindValue>)> {
        let (clauses, bind_params) = self.predicates.iter().fold(
            (Vec::new(), Vec::new()),
            |(mut clauses, mut bind_params): (Vec<String>, Vec<BindValue>), predicate| {
                clauses.push(predicate.condition.render(bind_params.len() + 1));
                bind_params.extend(predicate.values.iter().cloned());
                (clauses, bind_params)
            },
        );

        if bind_params.len() > MAX_BIND_PARAMS {
            return Err(Error::Construction(format!(
                "{} bind parameters exceed the limit of {}",
                bind_params.len(),
                MAX_BIND_PARAMS
            )));
        }

        let mut sql = base_select();
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push(' ');
        sql.push_str(BOOK_ORDER_BY);

        if let Some(limit) = self.limit {
            sql.push_str(&format!(" LIMIT {}", limit.min(MAX_LIMIT)));
        }

        Ok((sql, bind_params))
    }
}

fn base_select() -> String {
    format!("SELECT {} {}", BOOK_COLUMNS.join(", "), BOOK_FROM)
}
