#![allow(dead_code)] // not every test file uses every helper

use std::sync::Arc;

use anyhow::Result;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use epicmoments_api::app;
use epicmoments_api::context::ApiContext;
use epicmoments_api::storage::StorageLinks;
use epicmoments_api::testing::MemoryStore;

pub const ASSET_BASE: &str = "https://media.test/assets";

/// Router wired to an in-memory store; no database, no network.
pub fn app_with(store: MemoryStore) -> Router {
    let links = StorageLinks::new(ASSET_BASE).expect("test asset base");
    app(ApiContext::new(Arc::new(store), links))
}

pub async fn get(app: &Router, uri: &str) -> Result<(StatusCode, Value)> {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty())?)
        .await?;
    read_json(response).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> Result<(StatusCode, Value)> {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))?,
        )
        .await?;
    read_json(response).await
}

async fn read_json(response: axum::response::Response) -> Result<(StatusCode, Value)> {
    let status = response.status();
    let bytes = response.into_body().collect().await?.to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };
    Ok((status, value))
}
