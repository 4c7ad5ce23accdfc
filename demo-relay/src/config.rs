//! Configuration module for environment variable parsing.
//!
//! The four platform settings are required. Each may also be supplied under the
//! sectioned `ApplicationSettings__*` name used by older deployments.

use std::env;
use std::fmt;

use thiserror::Error;
use tracing::warn;
use url::Url;

/// Errors raised while loading configuration at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("environment variable {name} is not a valid base URL: {value}")]
    InvalidUrl { name: &'static str, value: String },
}

/// Application configuration loaded from environment variables.
#[derive(Clone)]
pub struct Config {
    /// Faceit API base URL
    pub faceit_url: Url,

    /// Leetify API base URL
    pub leetify_url: Url,

    /// Leetify account email used for login
    pub leetify_username: String,

    /// Leetify account password used for login
    pub leetify_password: String,

    /// Port for the web server to listen on
    pub port: u16,

    /// HTTP request timeout in milliseconds for outbound calls
    pub request_timeout_ms: u64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Config {
            faceit_url: required_url(&lookup, "FACEIT_URL", "ApplicationSettings__FaceitUrl")?,

            leetify_url: required_url(&lookup, "LEETIFY_URL", "ApplicationSettings__LeetifyUrl")?,

            leetify_username: required(
                &lookup,
                "LEETIFY_USERNAME",
                "ApplicationSettings__LeetifyUsername",
            )?,

            leetify_password: required(
                &lookup,
                "LEETIFY_PASSWORD",
                "ApplicationSettings__LeetifyPassword",
            )?,

            port: parse_or(&lookup, "PORT", 8080),

            request_timeout_ms: parse_or(&lookup, "REQUEST_TIMEOUT_MS", 30_000),
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("faceit_url", &self.faceit_url.as_str())
            .field("leetify_url", &self.leetify_url.as_str())
            .field("leetify_username", &self.leetify_username)
            .field("leetify_password", &"<redacted>")
            .field("port", &self.port)
            .field("request_timeout_ms", &self.request_timeout_ms)
            .finish()
    }
}

/// Read a required, non-blank value under its primary name or its alias.
///
/// The value is returned as given; credentials may legitimately carry spaces.
fn required<F>(lookup: &F, name: &'static str, alias: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    [name, alias]
        .into_iter()
        .filter_map(|key| lookup(key))
        .find(|v| !v.trim().is_empty())
        .ok_or(ConfigError::Missing(name))
}

/// Read a required value and check it is an absolute http(s) URL.
fn required_url<F>(lookup: &F, name: &'static str, alias: &str) -> Result<Url, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = required(lookup, name, alias)?.trim().to_string();

    match Url::parse(&raw) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => Ok(url),
        _ => Err(ConfigError::InvalidUrl { name, value: raw }),
    }
}

/// Parse an optional value, falling back to the default when absent or invalid.
fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    let raw = match lookup(name) {
        Some(v) => v,
        None => return default,
    };

    match raw.trim().parse() {
        Ok(v) => v,
        Err(_) => {
            warn!(env_var = name, value = %raw, "Invalid value, using default");
            default
        }
    }
}
