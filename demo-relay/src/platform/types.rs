//! Request and response bodies for the Faceit and Leetify APIs.
//!
//! Request bodies borrow their fields since they only live for one call.
//! Unknown response fields are ignored.

use serde::{Deserialize, Serialize};

// =============================================================================
// Faceit
// =============================================================================

/// Body of `POST /download/v2/demos/download-url`.
#[derive(Debug, Serialize)]
pub struct DownloadUrlRequest<'a> {
    /// Demo resource URL from the webhook
    pub resource_url: &'a str,
}

/// Response of `POST /download/v2/demos/download-url`.
#[derive(Debug, Deserialize)]
pub struct DownloadUrlResponse {
    pub payload: DownloadUrlPayload,
}

#[derive(Debug, Deserialize)]
pub struct DownloadUrlPayload {
    /// Time-limited direct link to the demo file
    pub download_url: String,
}

// =============================================================================
// Leetify
// =============================================================================

/// Body of `POST /login`.
#[derive(Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Response of `POST /login`.
#[derive(Deserialize)]
pub struct LoginResponse {
    /// Bearer token for subsequent calls
    pub token: String,
}

/// Body of `POST /faceit-demos/submit-demo-download-url`.
#[derive(Debug, Serialize)]
pub struct SubmitDemoRequest<'a> {
    pub url: &'a str,
}
