// Copyright 2025 Anubhav Chaurasia
// SPDX-License-Identifier: Apache-2.0

// HTTP server implementation (Axum)
//
// Routing, middleware and shared state for the contact relay.

use axum::{
    middleware,
    response::Json,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::common::ApiError;
use crate::endpoints::{contact, health};
use crate::middleware::cors::create_cors_layer;
use crate::middleware::logging::log_request_response_bodies;
use crate::openapi::ApiDoc;
use folio_services::ContactService;

/// Application state shared across all HTTP handlers
#[derive(Clone)]
pub struct ApiState {
    pub contact_service: Arc<dyn ContactService + Send + Sync>,
    /// Allowed browser origins; empty allows any origin
    pub cors_allowed_origins: Vec<String>,
}

impl ApiState {
    pub fn new(contact_service: Arc<dyn ContactService + Send + Sync>) -> Self {
        Self {
            contact_service,
            cors_allowed_origins: Vec::new(),
        }
    }

    pub fn with_cors_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_allowed_origins = origins;
        self
    }
}

/// Create the main HTTP server application
pub fn create_http_server(state: ApiState) -> Router {
    let cors = create_cors_layer(&state.cors_allowed_origins);

    Router::new()
        .route(
            "/api/send-email",
            post(contact::send_email).fallback(contact::method_not_allowed),
        )
        .route("/health", get(health::health_check))
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .fallback(|| async {
            tracing::warn!(target: "folio-api", "⚠️ Unmatched request - 404 Not Found");
            ApiError::not_found()
        })
        .with_state(state)
        .layer(middleware::from_fn(log_request_response_bodies))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::span!(
                        target: "folio-api",
                        tracing::Level::DEBUG,
                        "request",
                        method = %request.method(),
                        uri = %request.uri(),
                        version = ?request.version(),
                    )
                })
                .on_request(|request: &axum::http::Request<_>, _span: &tracing::Span| {
                    tracing::debug!(target: "folio-api", "📥 Incoming request: {} {}", request.method(), request.uri());
                })
                .on_response(
                    |response: &axum::http::Response<_>, latency: std::time::Duration, _span: &tracing::Span| {
                        tracing::debug!(
                            target: "folio-api",
                            "📤 Response: status={}, latency={:?}",
                            response.status(),
                            latency
                        );
                    },
                )
                .on_failure(
                    |_error: tower_http::classify::ServerErrorsFailureClass,
                     latency: std::time::Duration,
                     _span: &tracing::Span| {
                        tracing::error!(target: "folio-api", "❌ Request failed, latency={:?}", latency);
                    },
                ),
        )
}
