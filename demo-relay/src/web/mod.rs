//! Web server module for handling inbound webhooks.
//!
//! Routes:
//! - `GET /health` for liveness probes
//! - `POST /leetify/webhook` for Faceit "demo ready" notifications

pub mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub use handlers::{
    health, leetify_webhook, AppState, HealthResponse, WebhookNotification, WebhookPayload,
};

/// Build the application router.
///
/// Every request gets an INFO span and an INFO response event, so the default
/// `info` filter logs all traffic.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/leetify/webhook", post(leetify_webhook))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
