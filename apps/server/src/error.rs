//! Error types for the catalog service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use sqlx::error::BoxDynError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The search statement could not be rendered.
    #[error("unable to build SQL query: {0}")]
    Construction(String),

    /// The store rejected the statement or failed while streaming its rows.
    #[error("unable to {context}: {source}")]
    Execution {
        context: &'static str,
        #[source]
        source: sqlx::Error,
    },

    /// A column was NULL where a value is required, had the wrong type, or was missing.
    #[error("unable to scan column {column}: {source}")]
    Scan {
        column: &'static str,
        #[source]
        source: BoxDynError,
    },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("invalid URL query parameter provided: {0}")]
    InvalidQueryParam(String),

    #[error("HTTP method {0} is not allowed")]
    MethodNotAllowed(String),

    #[error("request timed out")]
    Timeout,

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    pub(crate) fn execution(context: &'static str) -> impl Fn(sqlx::Error) -> Self + Copy {
        move |source| Error::Execution { context, source }
    }

    pub(crate) fn scan(column: &'static str, source: impl Into<BoxDynError>) -> Self {
        Error::Scan {
            column,
            source: source.into(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Error::InvalidQueryParam(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            Error::MethodNotAllowed(_) => (StatusCode::METHOD_NOT_ALLOWED, self.to_string()),
            Error::Timeout => {
                tracing::warn!("Request timed out");
                (StatusCode::GATEWAY_TIMEOUT, self.to_string())
            }
            Error::Construction(_)
            | Error::Execution { .. }
            | Error::Scan { .. }
            | Error::Database(_)
            | Error::Other(_) => {
                tracing::error!(error = %self, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                Error::InvalidQueryParam("limit is 0".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                Error::MethodNotAllowed("POST".to_string()),
                StatusCode::METHOD_NOT_ALLOWED,
            ),
            (Error::Timeout, StatusCode::GATEWAY_TIMEOUT),
            (
                Error::Construction("too many parameters".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                Error::scan("rating", "unexpected NULL"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                Error::execution("search books")(sqlx::Error::PoolTimedOut),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, status) in cases {
            assert_eq!(error.into_response().status(), status);
        }
    }

    #[test]
    fn test_messages_name_the_failed_phase() {
        let error = Error::execution("search books")(sqlx::Error::PoolTimedOut);
        assert!(error.to_string().starts_with("unable to search books: "));

        let error = Error::scan("book.id", "unexpected NULL");
        assert_eq!(
            error.to_string(),
            "unable to scan column book.id: unexpected NULL"
        );
    }
}
