//! Shared helpers for the recipe integration tests.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use recipe_service::service::{self, RunningServer};
use recipe_service::{InMemoryRecipeStore, ServiceConfig};
use serde_json::Value;
use tower::ServiceExt;

/// A seeded store and a router sharing it.
pub fn seeded_app() -> (Arc<InMemoryRecipeStore>, Router) {
    recipe_service::logging::init("warn");
    let store = Arc::new(InMemoryRecipeStore::seeded().unwrap());
    let app = service::router(store.clone());
    (store, app)
}

/// A response with its body fully read.
pub struct Reply {
    pub status: StatusCode,
    pub content_type: String,
    pub body: Vec<u8>,
}

impl Reply {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    pub fn is_json(&self) -> bool {
        self.content_type.starts_with("application/json")
    }
}

pub async fn call(app: &Router, request: Request<Body>) -> Reply {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let body = response.into_body().collect().await.unwrap().to_bytes().to_vec();
    Reply {
        status,
        content_type,
        body,
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn with_json(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Start a seeded server on an ephemeral port.
pub async fn start_server() -> RunningServer {
    recipe_service::logging::init("warn");
    let config = ServiceConfig {
        bind_addr: "127.0.0.1:0".into(),
        ..ServiceConfig::default()
    };
    let store = Arc::new(InMemoryRecipeStore::seeded().unwrap());
    service::run_server(&config, store).await.unwrap()
}
