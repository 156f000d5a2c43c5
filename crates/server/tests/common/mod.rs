#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use configs::{AppConfig, DatabaseConfig};
use serde_json::Value;
use tower::ServiceExt;

/// Router over a fresh, migrated and seeded in-memory database.
/// Seeded ids: restaurants 1..=3, pizzas 1..=3, restaurant pizzas
/// 1 = (r1, p1, 10.0), 2 = (r1, p2, 12.0), 3 = (r2, p3, 8.0).
pub async fn build_app() -> anyhow::Result<Router> {
    let cfg = AppConfig {
        database: DatabaseConfig {
            url: "sqlite::memory:".into(),
            seed: true,
            ..Default::default()
        },
        ..Default::default()
    };
    server::startup::build_app(&cfg).await
}

pub async fn send(app: &Router, req: Request<Body>) -> anyhow::Result<(StatusCode, Vec<u8>)> {
    let res = app.clone().oneshot(req).await?;
    let status = res.status();
    let bytes = to_bytes(res.into_body(), usize::MAX).await?;
    Ok((status, bytes.to_vec()))
}

pub async fn get_json(app: &Router, uri: &str) -> anyhow::Result<(StatusCode, Value)> {
    let req = Request::builder().method("GET").uri(uri).body(Body::empty())?;
    let (status, body) = send(app, req).await?;
    Ok((status, serde_json::from_slice(&body)?))
}

pub async fn post_json(app: &Router, uri: &str, body: &Value) -> anyhow::Result<(StatusCode, Value)> {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body)?))?;
    let (status, body) = send(app, req).await?;
    Ok((status, serde_json::from_slice(&body)?))
}

pub async fn delete(app: &Router, uri: &str) -> anyhow::Result<(StatusCode, Vec<u8>)> {
    let req = Request::builder().method("DELETE").uri(uri).body(Body::empty())?;
    send(app, req).await
}
