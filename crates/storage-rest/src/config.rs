//! Environment-driven configuration for the hosted data API client.

use std::time::Duration;

use questlog_core::errors::{Error, Result};

const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Connection settings for the hosted data API.
///
/// The access token is the session issued by the identity provider; the
/// store derives the owner identifier from it, and every query additionally
/// carries an explicit owner filter.
#[derive(Debug, Clone)]
pub struct RestConfig {
    /// Base URL of the hosted API, e.g. `https://abc.example.co`.
    pub base_url: String,
    /// Project API key, sent with every request.
    pub api_key: String,
    /// Bearer token for the current session.
    pub access_token: String,
    pub request_timeout: Duration,
}

impl RestConfig {
    pub fn new(base_url: String, api_key: String, access_token: String) -> Self {
        Self {
            base_url,
            api_key,
            access_token,
            request_timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }

    /// Loads the configuration from the environment (dotenv-aware).
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        let base_url = require_var("QUESTLOG_API_URL")?;
        let api_key = require_var("QUESTLOG_API_KEY")?;
        let access_token = require_var("QUESTLOG_ACCESS_TOKEN")?;
        let timeout_ms = match std::env::var("QUESTLOG_REQUEST_TIMEOUT_MS") {
            Ok(raw) => raw.parse::<u64>().map_err(|_| {
                Error::InvalidConfigValue(format!(
                    "QUESTLOG_REQUEST_TIMEOUT_MS must be an integer, got '{}'",
                    raw
                ))
            })?,
            Err(_) => DEFAULT_TIMEOUT_MS,
        };
        Ok(Self {
            base_url,
            api_key,
            access_token,
            request_timeout: Duration::from_millis(timeout_ms),
        })
    }
}

fn require_var(key: &str) -> Result<String> {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| Error::ConfigIO(format!("{} is not set", key)))
}
