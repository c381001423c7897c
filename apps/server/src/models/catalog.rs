//! Catalog entities returned by the repositories
//!
//! Every record is a snapshot taken at query time. Books own copies of their
//! author and genre rather than referencing them.

use serde::{Deserialize, Serialize};

/// A book together with the author and genre it was published under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRecord {
    pub id: i32,
    pub title: String,
    pub year_published: i16,
    /// Average review score out of 5, one decimal of real precision.
    pub rating: f32,
    pub pages: i16,
    pub genre: GenreRecord,
    pub author: AuthorRecord,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorRecord {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenreRecord {
    pub id: i32,
    pub title: String,
}

/// Literary era, described by an optional publication-year window.
///
/// A missing bound means the era is open on that side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EraRecord {
    pub id: i32,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_year: Option<i16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_year: Option<i16>,
}

/// Size category, described by an optional page-count window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeRecord {
    pub id: i32,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_pages: Option<i16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_pages: Option<i16>,
}
