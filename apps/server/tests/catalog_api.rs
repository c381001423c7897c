//! Lookup list endpoint tests (GET /api/v1/{authors,genres,eras,sizes})

#[allow(unused)]
mod support;

use axum::http::{Method, StatusCode};
use serde_json::json;
use support::{assert_status, error_message, json_body, record_ids, TestApp};

#[tokio::test]
async fn lists_authors() -> anyhow::Result<()> {
    let app = TestApp::new();

    let (status, _, body) = app.get("/api/v1/authors").await?;

    assert_status(status, StatusCode::OK, "authors");
    assert_eq!(
        json_body(&body)?[0],
        json!({"id": 1, "firstName": "J.R.R.", "lastName": "Tolkien"})
    );
    assert_eq!(record_ids(&body)?, vec![1, 2, 3]);
    Ok(())
}

#[tokio::test]
async fn lists_genres() -> anyhow::Result<()> {
    let app = TestApp::new();

    let (status, _, body) = app.get("/api/v1/genres").await?;

    assert_status(status, StatusCode::OK, "genres");
    assert_eq!(record_ids(&body)?, vec![2, 6, 3]);
    Ok(())
}

#[tokio::test]
async fn open_ended_era_bounds_are_omitted() -> anyhow::Result<()> {
    let app = TestApp::new();

    let (status, _, body) = app.get("/api/v1/eras").await?;

    assert_status(status, StatusCode::OK, "eras");
    assert_eq!(
        json_body(&body)?,
        json!([
            {"id": 1, "title": "Classic", "maxYear": 1969},
            {"id": 2, "title": "Modern", "minYear": 1970, "maxYear": 2000},
        ])
    );
    Ok(())
}

#[tokio::test]
async fn open_ended_size_bounds_are_omitted() -> anyhow::Result<()> {
    let app = TestApp::new();

    let (status, _, body) = app.get("/api/v1/sizes").await?;

    assert_status(status, StatusCode::OK, "sizes");
    assert_eq!(
        json_body(&body)?,
        json!([
            {"id": 1, "title": "Short story", "maxPages": 50},
            {"id": 3, "title": "Monument", "minPages": 800},
        ])
    );
    Ok(())
}

#[tokio::test]
async fn list_routes_reject_other_methods() -> anyhow::Result<()> {
    let app = TestApp::new();

    for path in ["/api/v1/authors", "/api/v1/genres", "/api/v1/eras", "/api/v1/sizes"] {
        let (status, _, body) = app.request(Method::POST, path).await?;
        assert_status(status, StatusCode::METHOD_NOT_ALLOWED, path);
        assert_eq!(error_message(&body)?, "HTTP method POST is not allowed");
    }
    Ok(())
}

#[tokio::test]
async fn health_check() -> anyhow::Result<()> {
    let app = TestApp::new();

    let (status, _, body) = app.get("/health").await?;

    assert_status(status, StatusCode::OK, "health");
    assert_eq!(
        json_body(&body)?,
        json!({"status": "ok", "service": "readcommend"})
    );
    Ok(())
}
