//! HTTP API server

use axum::{
    body::Body,
    http::Request,
    routing::{any, get},
    Router,
};
use tower_http::{
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
    LatencyUnit,
};
use tracing::Span;

pub mod error;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

/// Build the API router using the provided application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health/info", get(handlers::get_info))
        .route("/health/info", get(handlers::get_info))
        .route(
            "/api/update",
            any(handlers::method_not_allowed).post(handlers::update_info),
        )
        .fallback(handlers::not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new())
                .on_request(|request: &Request<Body>, _span: &Span| {
                    tracing::debug!(
                        "{method} {path}",
                        method = request.method(),
                        path = request.uri().path()
                    )
                })
                .on_response(
                    DefaultOnResponse::new()
                        .level(tracing::Level::DEBUG)
                        .latency_unit(LatencyUnit::Micros),
                ),
        )
        .with_state(state)
}
