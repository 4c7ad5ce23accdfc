//! Outbound platform clients.
//!
//! This module provides:
//! - Wire types for the Faceit and Leetify APIs
//! - A Faceit client that resolves demo download URLs
//! - A Leetify client that logs in and submits download URLs
//!
//! ## Flow
//!
//! ```text
//! demo_url → Faceit (download-url) → Leetify (login) → Leetify (submit)
//! ```

pub mod faceit;
pub mod leetify;
pub mod types;

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response};
use tracing::warn;
use url::Url;

use crate::error::{RelayError, Service};

pub use faceit::FaceitClient;
pub use leetify::LeetifyClient;

/// Build the HTTP client shared by every outbound call.
pub fn http_client(timeout: Duration) -> Result<Client, RelayError> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(RelayError::HttpClient)
}

/// Append a fixed API path to a base URL without doubling the slash.
pub(crate) fn endpoint(base: &Url, path: &str) -> String {
    format!(
        "{}/{}",
        base.as_str().trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Send a request and require a success status.
///
/// Transport failures and non-2xx statuses both end the relay for this
/// request. There is no retry.
pub(crate) async fn send(
    service: Service,
    endpoint: &'static str,
    request: RequestBuilder,
) -> Result<Response, RelayError> {
    let response = request.send().await.map_err(|source| {
        warn!(
            service = %service,
            endpoint = endpoint,
            is_timeout = source.is_timeout(),
            error = %source,
            "upstream_request_error"
        );
        RelayError::Transport {
            service,
            endpoint,
            source,
        }
    })?;

    let status = response.status();
    if !status.is_success() {
        warn!(
            service = %service,
            endpoint = endpoint,
            status_code = status.as_u16(),
            "upstream_status_error"
        );
        return Err(RelayError::Status {
            service,
            endpoint,
            status,
        });
    }

    Ok(response)
}
