use anyhow::Context as _;
use axum::{body::Bytes, http::StatusCode};
use serde_json::Value;

pub fn assert_status(actual: StatusCode, expected: StatusCode, context: &str) {
    assert_eq!(actual, expected, "unexpected status for {context}");
}

pub fn json_body(body: &Bytes) -> anyhow::Result<Value> {
    serde_json::from_slice(body).context("parse JSON response body")
}

/// The `message` field of an error body.
pub fn error_message(body: &Bytes) -> anyhow::Result<String> {
    let value = json_body(body)?;
    value
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
        .context("error body has a string message")
}

/// Ids of a JSON array of records, in response order.
pub fn record_ids(body: &Bytes) -> anyhow::Result<Vec<i64>> {
    let value = json_body(body)?;
    value
        .as_array()
        .context("response body is an array")?
        .iter()
        .map(|record| record.get("id").and_then(Value::as_i64).context("record id"))
        .collect()
}
