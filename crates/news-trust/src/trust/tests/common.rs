use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use serde_json::Value;

use crate::trust::{ArticleInput, FixedCredibility, TrustScorer};

pub(super) const STUB_CREDIBILITY: u8 = 70;

pub(super) fn scorer() -> TrustScorer<FixedCredibility> {
    TrustScorer::new(FixedCredibility(STUB_CREDIBILITY))
}

pub(super) fn shared_scorer() -> Arc<TrustScorer<FixedCredibility>> {
    Arc::new(scorer())
}

/// `http://x` repeated past 1000 characters; one unbroken link.
pub(super) fn linked_long_body() -> String {
    let body = "http://x".repeat(126);
    assert!(body.chars().count() > 1000);
    body
}

pub(super) fn well_supported_article() -> ArticleInput {
    ArticleInput::new(linked_long_body())
        .with_votes(80, 20)
        .with_source("metro-desk")
        .with_id("a-1")
}

pub(super) fn json_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

pub(super) async fn json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("body is json")
}
