//! Relay error taxonomy and its HTTP mapping.

use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::{error, warn};

/// Upstream platform a request was made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Faceit,
    Leetify,
}

impl Service {
    pub fn as_str(self) -> &'static str {
        match self {
            Service::Faceit => "faceit",
            Service::Leetify => "leetify",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that fail a relay request.
///
/// Everything except `InvalidPayload` is an upstream failure and maps to
/// `502 Bad Gateway`. Upstream details are logged but never returned to the
/// webhook caller.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("invalid webhook payload: {0}")]
    InvalidPayload(String),

    #[error("{service} request to {endpoint} failed: {source}")]
    Transport {
        service: Service,
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{service} returned {status} for {endpoint}")]
    Status {
        service: Service,
        endpoint: &'static str,
        status: reqwest::StatusCode,
    },

    #[error("{service} response from {endpoint} could not be decoded: {source}")]
    Decode {
        service: Service,
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{service} returned an empty {field}")]
    EmptyField {
        service: Service,
        field: &'static str,
    },

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

impl RelayError {
    /// Status code returned to the webhook caller.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            RelayError::HttpClient(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_key(&self) -> &'static str {
        match self {
            RelayError::InvalidPayload(_) => "invalid_payload",
            RelayError::HttpClient(_) => "internal_error",
            _ => "upstream_error",
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = match &self {
            RelayError::InvalidPayload(_) => {
                warn!(error = %self, "webhook_rejected");
                self.to_string()
            }
            _ => {
                error!(error = %self, "relay_failed");
                "Upstream request failed".to_string()
            }
        };

        (
            status,
            Json(serde_json::json!({
                "error": self.error_key(),
                "message": message,
            })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_invalid_payload_error() {
        let response = RelayError::InvalidPayload("missing demo_url".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["error"], "invalid_payload");
        assert_eq!(json["message"], "invalid webhook payload: missing demo_url");
    }

    #[tokio::test]
    async fn test_upstream_status_error_hides_details() {
        let error = RelayError::Status {
            service: Service::Leetify,
            endpoint: "/login",
            status: reqwest::StatusCode::UNAUTHORIZED,
        };
        assert_eq!(error.to_string(), "leetify returned 401 Unauthorized for /login");

        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let json = body_json(response).await;
        assert_eq!(json["error"], "upstream_error");
        assert_eq!(json["message"], "Upstream request failed");
    }

    #[tokio::test]
    async fn test_empty_field_error() {
        let error = RelayError::EmptyField {
            service: Service::Faceit,
            field: "download_url",
        };
        assert_eq!(error.to_string(), "faceit returned an empty download_url");
        assert_eq!(error.status_code(), StatusCode::BAD_GATEWAY);
    }
}
