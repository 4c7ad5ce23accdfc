//! Leetify client for logging in and submitting demo download URLs.
//!
//! Tokens are not cached: callers log in once per relayed demo and pass the
//! token straight to [`LeetifyClient::submit_demo_url`].

use std::fmt;
use std::sync::Arc;

use reqwest::Client;
use tracing::info;
use url::Url;

use super::types::{LoginRequest, LoginResponse, SubmitDemoRequest};
use super::{endpoint, send};
use crate::error::{RelayError, Service};

const LOGIN_PATH: &str = "/login";
const SUBMIT_PATH: &str = "/faceit-demos/submit-demo-download-url";

/// Leetify account credentials.
struct Credentials {
    username: String,
    password: String,
}

/// Leetify API client.
#[derive(Clone)]
pub struct LeetifyClient {
    client: Client,
    base_url: Url,
    credentials: Arc<Credentials>,
}

impl LeetifyClient {
    /// Create a client that logs in with the given account.
    pub fn new(client: Client, base_url: Url, username: String, password: String) -> Self {
        Self {
            client,
            base_url,
            credentials: Arc::new(Credentials { username, password }),
        }
    }

    /// Log in with the configured account and return a bearer token.
    pub async fn login(&self) -> Result<String, RelayError> {
        info!("leetify_login_start");

        let request = self
            .client
            .post(endpoint(&self.base_url, LOGIN_PATH))
            .json(&LoginRequest {
                email: &self.credentials.username,
                password: &self.credentials.password,
            });

        let response = send(Service::Leetify, LOGIN_PATH, request).await?;

        let body: LoginResponse = response.json().await.map_err(|source| RelayError::Decode {
            service: Service::Leetify,
            endpoint: LOGIN_PATH,
            source,
        })?;

        if body.token.trim().is_empty() {
            return Err(RelayError::EmptyField {
                service: Service::Leetify,
                field: "token",
            });
        }

        info!(token_length = body.token.len(), "leetify_login_complete");

        Ok(body.token)
    }

    /// Submit a demo download URL, authorized by `token`.
    pub async fn submit_demo_url(&self, token: &str, download_url: &str) -> Result<(), RelayError> {
        info!(
            download_url_length = download_url.len(),
            "leetify_submit_start"
        );

        let request = self
            .client
            .post(endpoint(&self.base_url, SUBMIT_PATH))
            .bearer_auth(token)
            .json(&SubmitDemoRequest { url: download_url });

        let response = send(Service::Leetify, SUBMIT_PATH, request).await?;

        info!(
            status_code = response.status().as_u16(),
            "leetify_submit_complete"
        );

        Ok(())
    }
}

impl fmt::Debug for LeetifyClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LeetifyClient")
            .field("base_url", &self.base_url.as_str())
            .field("username", &self.credentials.username)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn client_for(server: &MockServer) -> LeetifyClient {
        LeetifyClient::new(
            Client::new(),
            Url::parse(&server.base_url()).unwrap(),
            "player@example.com".to_string(),
            "hunter2".to_string(),
        )
    }

    #[tokio::test]
    async fn test_login() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/login")
                    .json_body(json!({ "email": "player@example.com", "password": "hunter2" }));
                then.status(200).json_body(json!({ "token": "abc" }));
            })
            .await;

        let token = client_for(&server).login().await.unwrap();

        assert_eq!(token, "abc");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_login_rejected() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/login");
                then.status(401).json_body(json!({ "error": "bad credentials" }));
            })
            .await;

        let err = client_for(&server).login().await.unwrap_err();

        match err {
            RelayError::Status {
                service,
                endpoint,
                status,
            } => {
                assert_eq!(service, Service::Leetify);
                assert_eq!(endpoint, "/login");
                assert_eq!(status.as_u16(), 401);
            }
            other => panic!("Expected Status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_login_missing_token() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/login");
                then.status(200).json_body(json!({ "user": "player" }));
            })
            .await;

        let err = client_for(&server).login().await.unwrap_err();

        assert!(matches!(err, RelayError::Decode { service: Service::Leetify, .. }));
    }

    #[tokio::test]
    async fn test_login_empty_token() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/login");
                then.status(200).json_body(json!({ "token": "" }));
            })
            .await;

        let err = client_for(&server).login().await.unwrap_err();

        assert!(matches!(err, RelayError::EmptyField { field: "token", .. }));
    }

    #[tokio::test]
    async fn test_submit_demo_url() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/faceit-demos/submit-demo-download-url")
                    .header("authorization", "Bearer abc")
                    .header("content-type", "application/json")
                    .json_body(json!({ "url": "https://y/d.dem" }));
                then.status(200);
            })
            .await;

        client_for(&server)
            .submit_demo_url("abc", "https://y/d.dem")
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_submit_demo_url_non_success() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/faceit-demos/submit-demo-download-url");
                then.status(500);
            })
            .await;

        let err = client_for(&server)
            .submit_demo_url("abc", "https://y/d.dem")
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            RelayError::Status {
                endpoint: "/faceit-demos/submit-demo-download-url",
                ..
            }
        ));
    }

    #[test]
    fn test_debug_omits_password() {
        let client = LeetifyClient::new(
            Client::new(),
            Url::parse("https://api.leetify.com").unwrap(),
            "player@example.com".to_string(),
            "hunter2".to_string(),
        );

        let rendered = format!("{:?}", client);

        assert!(rendered.contains("player@example.com"));
        assert!(!rendered.contains("hunter2"));
    }
}
