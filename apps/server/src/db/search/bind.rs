use sqlx::postgres::PgArguments;
use sqlx::query::Query;
use sqlx::Postgres;

/// Bind values for `sqlx` queries.
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    Int16(i16),
    Int32(i32),
    Text(String),
}

impl From<i16> for BindValue {
    fn from(value: i16) -> Self {
        BindValue::Int16(value)
    }
}

impl From<i32> for BindValue {
    fn from(value: i32) -> Self {
        BindValue::Int32(value)
    }
}

impl From<&str> for BindValue {
    fn from(value: &str) -> Self {
        BindValue::Text(value.to_string())
    }
}

pub(crate) fn bind_all(
    mut query: Query<'_, Postgres, PgArguments>,
    values: Vec<BindValue>,
) -> Query<'_, Postgres, PgArguments> {
    for value in values {
        query = match value {
            BindValue::Int16(v) => query.bind(v),
            BindValue::Int32(v) => query.bind(v),
            BindValue::Text(v) => query.bind(v),
        };
    }
    query
}
