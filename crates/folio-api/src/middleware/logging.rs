// Copyright 2025 Anubhav Chaurasia
// SPDX-License-Identifier: Apache-2.0

// Request/response body logging at trace level

use axum::body::{Body, Bytes};
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use http_body_util::BodyExt;

/// Bodies larger than this are not logged
const MAX_LOGGED_BODY: usize = 10_000;

/// Log JSON request and response bodies at trace level
///
/// Submissions carry personal data, so this only runs when trace logging is
/// enabled for `folio-api`.
pub async fn log_request_response_bodies(
    request: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    if !tracing::enabled!(target: "folio-api", tracing::Level::TRACE) {
        return Ok(next.run(request).await);
    }

    let (parts, body) = request.into_parts();
    let bytes = collect(body).await?;
    log_body("📥 Request body", &bytes);
    let request = Request::from_parts(parts, Body::from(bytes));

    let response = next.run(request).await;

    let (parts, body) = response.into_parts();
    let bytes = collect(body).await?;
    log_body("📤 Response body", &bytes);
    Ok(Response::from_parts(parts, Body::from(bytes)))
}

async fn collect(body: Body) -> Result<Bytes, StatusCode> {
    body.collect()
        .await
        .map(|collected| collected.to_bytes())
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

fn log_body(label: &str, bytes: &Bytes) {
    if bytes.is_empty() || bytes.len() >= MAX_LOGGED_BODY {
        return;
    }
    if let Ok(text) = std::str::from_utf8(bytes) {
        if text.starts_with('{') {
            tracing::trace!(target: "folio-api", "{}: {}", label, text);
        }
    }
}
