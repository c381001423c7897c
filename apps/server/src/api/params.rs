//! Query-string parsing for `GET /books`
//!
//! Parameter names: `title`, `min-pages`, `max-pages`, `min-year`,
//! `max-year`, `genres`, `authors`, `limit`. `genres` and `authors` accept
//! repeated keys and comma-separated lists. An empty value is the same as an
//! absent parameter. Unknown parameters are ignored.

use std::str::FromStr;

use url::form_urlencoded;

use crate::models::SearchSpecification;
use crate::{Error, Result};

/// Parse and validate a raw query string into a search specification.
pub fn search_spec_from_query(query: Option<&str>) -> Result<SearchSpecification> {
    let pairs: Vec<(String, String)> = query
        .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default();
    let params = QueryParams { pairs };

    let spec = SearchSpecification {
        title: params.first("title").map(str::to_string),
        min_pages: params.scalar("min-pages")?,
        max_pages: params.scalar("max-pages")?,
        min_year: params.scalar("min-year")?,
        max_year: params.scalar("max-year")?,
        genre_ids: params.id_list("genres")?,
        author_ids: params.id_list("authors")?,
        limit: params.scalar("limit")?,
    };

    spec.validate()?;
    Ok(spec)
}

struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    fn values(&self, name: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
            .filter(|value| !value.is_empty())
            .collect()
    }

    fn first(&self, name: &str) -> Option<&str> {
        self.values(name).into_iter().next()
    }

    fn scalar<T: FromStr>(&self, name: &str) -> Result<Option<T>> {
        self.values(name)
            .into_iter()
            .map(str::trim)
            .find(|value| !value.is_empty())
            .map(|value| value.parse::<T>().map_err(|_| wrong_type(name)))
            .transpose()
    }

    fn id_list(&self, name: &str) -> Result<Option<Vec<i32>>> {
        let mut ids = Vec::new();
        for value in self.values(name) {
            for item in value.split(',').map(str::trim).filter(|s| !s.is_empty()) {
                ids.push(item.parse().map_err(|_| wrong_type(name))?);
            }
        }
        Ok((!ids.is_empty()).then_some(ids))
    }
}

fn wrong_type(name: &str) -> Error {
    Error::InvalidQueryParam(format!("received wrong type for parameter {}", name))
}
