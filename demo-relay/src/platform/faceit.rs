//! Faceit client for resolving demo download URLs.

use reqwest::Client;
use tracing::info;
use url::Url;

use super::types::{DownloadUrlRequest, DownloadUrlResponse};
use super::{endpoint, send};
use crate::error::{RelayError, Service};

const DOWNLOAD_URL_PATH: &str = "/download/v2/demos/download-url";

/// Faceit download API client.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct FaceitClient {
    client: Client,
    base_url: Url,
}

impl FaceitClient {
    /// Create a client for the given Faceit base URL.
    pub fn new(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    /// Exchange a demo resource URL for a time-limited download URL.
    pub async fn resolve_download_url(&self, resource_url: &str) -> Result<String, RelayError> {
        info!(resource_url = %resource_url, "faceit_download_url_requested");

        let request = self
            .client
            .post(endpoint(&self.base_url, DOWNLOAD_URL_PATH))
            .json(&DownloadUrlRequest { resource_url });

        let response = send(Service::Faceit, DOWNLOAD_URL_PATH, request).await?;

        let body: DownloadUrlResponse =
            response.json().await.map_err(|source| RelayError::Decode {
                service: Service::Faceit,
                endpoint: DOWNLOAD_URL_PATH,
                source,
            })?;

        let download_url = body.payload.download_url;
        if download_url.trim().is_empty() {
            return Err(RelayError::EmptyField {
                service: Service::Faceit,
                field: "download_url",
            });
        }

        info!(
            resource_url = %resource_url,
            download_url_length = download_url.len(),
            "faceit_download_url_resolved"
        );

        Ok(download_url)
    }
}
