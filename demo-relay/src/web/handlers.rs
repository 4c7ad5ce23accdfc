//! Webhook endpoint handlers.
//!
//! The webhook handler runs the whole relay chain inline and only answers
//! once Leetify has accepted the download URL.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::RelayError;
use crate::relay::Relay;

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub relay: Relay,
}

impl AppState {
    pub fn new(relay: Relay) -> Self {
        Self { relay }
    }
}

// =============================================================================
// Health Check
// =============================================================================

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

// =============================================================================
// Faceit Webhook
// =============================================================================

/// Faceit "demo ready" webhook body.
///
/// Only `payload.demo_url` is read; the rest of the event is ignored.
#[derive(Debug, Deserialize)]
pub struct WebhookNotification {
    pub payload: WebhookPayload,
}

#[derive(Debug, Deserialize)]
pub struct WebhookPayload {
    pub demo_url: String,
}

/// Faceit webhook endpoint.
///
/// 1. Rejects bodies that are not a valid notification with 400
/// 2. Resolves, logs in and submits via [`Relay::relay_demo`]
/// 3. Returns 202 with an empty body
pub async fn leetify_webhook(
    State(state): State<AppState>,
    body: Result<Json<WebhookNotification>, JsonRejection>,
) -> Result<StatusCode, RelayError> {
    let Json(notification) = body.map_err(|rejection| {
        RelayError::InvalidPayload(rejection.body_text())
    })?;

    // Forwarded as received; the identifier is opaque.
    let demo_url = notification.payload.demo_url;
    if demo_url.trim().is_empty() {
        return Err(RelayError::InvalidPayload("demo_url is empty".to_string()));
    }

    info!(demo_url = %demo_url, "webhook_received");

    state.relay.relay_demo(&demo_url).await?;

    info!(demo_url = %demo_url, "webhook_accepted");

    Ok(StatusCode::ACCEPTED)
}
