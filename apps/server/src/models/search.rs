//! Book search input

use std::ops::RangeInclusive;

use crate::models::BookRecord;
use crate::{Error, Result};

/// Accepted page counts for `min_pages` / `max_pages`.
pub const PAGE_RANGE: RangeInclusive<i16> = 1..=10000;

/// Accepted publication years for `min_year` / `max_year`.
pub const YEAR_RANGE: RangeInclusive<i16> = 1800..=2100;

/// Optional filters for a book search.
///
/// A `None` field imposes no constraint. An empty id set is treated the same
/// way: it never means "match nothing".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchSpecification {
    /// Exact title match.
    pub title: Option<String>,
    pub min_pages: Option<i16>,
    pub max_pages: Option<i16>,
    pub min_year: Option<i16>,
    pub max_year: Option<i16>,
    /// Books whose genre is any of these ids.
    pub genre_ids: Option<Vec<i32>>,
    /// Books whose author is any of these ids.
    pub author_ids: Option<Vec<i32>>,
    /// Maximum number of books returned.
    pub limit: Option<u64>,
}

impl SearchSpecification {
    /// Check bound legality.
    ///
    /// The repositories never call this; callers that accept untrusted input
    /// run it before searching.
    pub fn validate(&self) -> Result<()> {
        check_range("min-pages", self.min_pages, &PAGE_RANGE)?;
        check_range("max-pages", self.max_pages, &PAGE_RANGE)?;
        check_range("min-year", self.min_year, &YEAR_RANGE)?;
        check_range("max-year", self.max_year, &YEAR_RANGE)?;
        check_order("pages", self.min_pages, self.max_pages)?;
        check_order("year", self.min_year, self.max_year)?;

        if self.limit == Some(0) {
            return Err(Error::InvalidQueryParam(
                "limit is 0 but should be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Whether `book` satisfies every populated filter.
    pub fn matches(&self, book: &BookRecord) -> bool {
        let in_set = |ids: &Option<Vec<i32>>, id: i32| match ids {
            Some(ids) if !ids.is_empty() => ids.contains(&id),
            _ => true,
        };

        in_set(&self.author_ids, book.author.id)
            && in_set(&self.genre_ids, book.genre.id)
            && self.title.as_deref().map_or(true, |t| t == book.title)
            && self.min_pages.map_or(true, |min| book.pages >= min)
            && self.max_pages.map_or(true, |max| book.pages <= max)
            && self.min_year.map_or(true, |min| book.year_published >= min)
            && self.max_year.map_or(true, |max| book.year_published <= max)
    }
}

fn check_range(name: &str, value: Option<i16>, range: &RangeInclusive<i16>) -> Result<()> {
    match value {
        Some(v) if !range.contains(&v) => Err(Error::InvalidQueryParam(format!(
            "{} is {} but should be in range [{},{}]",
            name,
            v,
            range.start(),
            range.end()
        ))),
        _ => Ok(()),
    }
}

fn check_order(name: &str, min: Option<i16>, max: Option<i16>) -> Result<()> {
    match (min, max) {
        (Some(min), Some(max)) if min > max => Err(Error::InvalidQueryParam(format!(
            "min-{name} is {min} but should not exceed max-{name} {max}"
        ))),
        _ => Ok(()),
    }
}
