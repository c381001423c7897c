//! Predicate builders for book search filters
//!
//! Each builder looks at one field of a [`SearchSpecification`] and yields at
//! most one predicate. Builders never look at each other's output, so any
//! subset of them can be AND-ed together.

use super::bind::BindValue;
use crate::models::SearchSpecification;

/// SQL condition shape. Column names are compile-time constants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    Equals(&'static str),
    AtLeast(&'static str),
    AtMost(&'static str),
    In { column: &'static str, arity: usize },
}

impl Condition {
    /// Number of placeholders this condition consumes.
    pub fn arity(&self) -> usize {
        match self {
            Condition::In { arity, .. } => *arity,
            _ => 1,
        }
    }

    /// Render with `$n` placeholders starting at `first`.
    pub fn render(&self, first: usize) -> String {
        match self {
            Condition::Equals(column) => format!("{} = ${}", column, first),
            Condition::AtLeast(column) => format!("{} >= ${}", column, first),
            Condition::AtMost(column) => format!("{} <= ${}", column, first),
            Condition::In { column, arity } => {
                let placeholders: Vec<String> =
                    (first..first + arity).map(|i| format!("${}", i)).collect();
                format!("{} IN ({})", column, placeholders.join(","))
            }
        }
    }

    /// Render with anonymous `?` placeholders, for logging.
    pub fn template(&self) -> String {
        match self {
            Condition::Equals(column) => format!("{} = ?", column),
            Condition::AtLeast(column) => format!("{} >= ?", column),
            Condition::AtMost(column) => format!("{} <= ?", column),
            Condition::In { column, arity } => {
                format!("{} IN ({})", column, vec!["?"; *arity].join(","))
            }
        }
    }
}

/// One AND-able condition plus the values bound to its placeholders.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    pub condition: Condition,
    pub values: Vec<BindValue>,
}

pub type PredicateBuilder = fn(&SearchSpecification) -> Option<Predicate>;

/// Evaluation order fixes placeholder positions.
pub const PREDICATE_BUILDERS: [PredicateBuilder; 7] = [
    author_ids, genre_ids, title, min_pages, max_pages, min_year, max_year,
];

/// Run every builder in order and keep the predicates that apply.
pub fn build_predicates(spec: &SearchSpecification) -> Vec<Predicate> {
    PREDICATE_BUILDERS
        .iter()
        .filter_map(|build| build(spec))
        .collect()
}

fn id_set(column: &'static str, ids: Option<&Vec<i32>>) -> Option<Predicate> {
    let ids = ids.filter(|ids| !ids.is_empty())?;
    Some(Predicate {
        condition: Condition::In {
            column,
            arity: ids.len(),
        },
        values: ids.iter().copied().map(BindValue::Int32).collect(),
    })
}

fn bound(condition: Condition, value: Option<i16>) -> Option<Predicate> {
    value.map(|v| Predicate {
        condition,
        values: vec![BindValue::Int16(v)],
    })
}

pub fn author_ids(spec: &SearchSpecification) -> Option<Predicate> {
    id_set("author_id", spec.author_ids.as_ref())
}

pub fn genre_ids(spec: &SearchSpecification) -> Option<Predicate> {
    id_set("genre_id", spec.genre_ids.as_ref())
}

pub fn title(spec: &SearchSpecification) -> Option<Predicate> {
    spec.title.as_ref().map(|title| Predicate {
        condition: Condition::Equals("book.title"),
        values: vec![BindValue::Text(title.clone())],
    })
}

pub fn min_pages(spec: &SearchSpecification) -> Option<Predicate> {
    bound(Condition::AtLeast("pages"), spec.min_pages)
}

pub fn max_pages(spec: &SearchSpecification) -> Option<Predicate> {
    bound(Condition::AtMost("pages"), spec.max_pages)
}

pub fn min_year(spec: &SearchSpecification) -> Option<Predicate> {
    bound(Condition::AtLeast("year_published"), spec.min_year)
}

pub fn max_year(spec: &SearchSpecification) -> Option<Predicate> {
    bound(Condition::AtMost("year_published"), spec.max_year)
}
