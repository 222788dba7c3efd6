//! Per-request access log.

use axum::{
    body::Body,
    extract::MatchedPath,
    http::{HeaderName, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{info, warn};

const REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Logs one line per request under the `http` target.
///
/// Routes are logged by their matched pattern when there is one, so cache
/// keys embedded in paths do not explode log cardinality. Server errors are
/// logged at `warn`.
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| request.uri().path().to_string(), |p| p.as_str().to_string());
    let request_id = request
        .headers()
        .get(&REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let elapsed_ms = started.elapsed().as_millis();

    if response.status().is_server_error() {
        warn!(target: "http", %method, %route, %request_id, status, elapsed_ms, "request failed");
    } else {
        info!(target: "http", %method, %route, %request_id, status, elapsed_ms, "request completed");
    }

    response
}
