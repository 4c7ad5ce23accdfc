//! Demo relay chain.
//!
//! ```text
//! demo_url → resolve_download_url() → login() → submit_demo_url()
//! ```
//!
//! Each step needs the previous one to succeed. A failure ends the chain
//! without touching later steps and nothing is undone.

use std::time::Duration;

use tracing::info;

use crate::config::Config;
use crate::error::RelayError;
use crate::platform::{http_client, FaceitClient, LeetifyClient};

/// The two platform clients wired together.
#[derive(Debug, Clone)]
pub struct Relay {
    faceit: FaceitClient,
    leetify: LeetifyClient,
}

impl Relay {
    pub fn new(faceit: FaceitClient, leetify: LeetifyClient) -> Self {
        Self { faceit, leetify }
    }

    /// Build both clients over one shared HTTP connection pool.
    pub fn from_config(config: &Config) -> Result<Self, RelayError> {
        let client = http_client(Duration::from_millis(config.request_timeout_ms))?;

        Ok(Self::new(
            FaceitClient::new(client.clone(), config.faceit_url.clone()),
            LeetifyClient::new(
                client,
                config.leetify_url.clone(),
                config.leetify_username.clone(),
                config.leetify_password.clone(),
            ),
        ))
    }

    /// Forward one demo from Faceit to Leetify.
    pub async fn relay_demo(&self, demo_url: &str) -> Result<(), RelayError> {
        info!(demo_url = %demo_url, "relay_start");

        let download_url = self.faceit.resolve_download_url(demo_url).await?;
        let token = self.leetify.login().await?;
        self.leetify.submit_demo_url(&token, &download_url).await?;

        info!(demo_url = %demo_url, "relay_complete");

        Ok(())
    }
}
