use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use client::net::types::PredictionRequest;
use tower::ServiceExt;

use super::*;
use crate::upstream::{Envelope, PredictionUpstream, UpstreamError};

struct UnusedUpstream;

#[async_trait::async_trait]
impl PredictionUpstream for UnusedUpstream {
    async fn predict(&self, _request: &PredictionRequest) -> Result<Envelope, UpstreamError> {
        Err(UpstreamError::Request("not wired in this test".into()))
    }
}

fn state() -> AppState {
    AppState::new(Arc::new(UnusedUpstream))
}

fn temp_site() -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("ecopack-site-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("index.html"), "<html><body>EcoPack AI</body></html>").unwrap();
    dir
}

#[tokio::test]
async fn healthz_is_ok() {
    let resp = api_routes(state())
        .oneshot(Request::get("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn root_serves_site_index() {
    let site = temp_site();
    let resp = app(state(), &site)
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    assert!(String::from_utf8_lossy(&bytes).contains("EcoPack AI"));
    std::fs::remove_dir_all(site).unwrap();
}

#[tokio::test]
async fn unknown_static_path_is_not_found() {
    let site = temp_site();
    let resp = app(state(), &site)
        .oneshot(Request::get("/missing.js").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    std::fs::remove_dir_all(site).unwrap();
}

#[tokio::test]
async fn predict_is_post_only() {
    let resp = api_routes(state())
        .oneshot(Request::get("/api/predict").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}
