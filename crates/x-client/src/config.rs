//! Configuration for XClient.

use std::env;
use std::time::Duration;

use predict_core::PredictError;

use crate::oauth::OAuthCredentials;

/// Default X API v2 base URL.
pub const DEFAULT_API_URL: &str = "https://api.x.com/2";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Profile fields requested from the user lookup endpoint.
pub const USER_FIELDS: &str = "profile_image_url,description,name";

/// Configuration for the X API client.
#[derive(Debug, Clone)]
pub struct XConfig {
    /// API base URL, without a trailing slash.
    pub api_url: String,

    /// OAuth 1.0a credentials.
    pub credentials: OAuthCredentials,

    /// Timeout applied to each request.
    pub timeout: Duration,
}

impl XConfig {
    /// Create a configuration with default URL and timeout.
    pub fn new(credentials: OAuthCredentials) -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            credentials,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `TWITTER_CONSUMER_KEY`
    /// - `TWITTER_CONSUMER_SECRET`
    /// - `TWITTER_ACCESS_TOKEN`
    /// - `TWITTER_ACCESS_TOKEN_SECRET`
    ///
    /// Optional environment variables:
    /// - `X_API_URL` - API base URL (default: https://api.x.com/2)
    /// - `X_TIMEOUT_SECS` - Request timeout (default: 30)
    pub fn from_env() -> Result<Self, PredictError> {
        let credentials = match (
            read_trimmed("TWITTER_CONSUMER_KEY"),
            read_trimmed("TWITTER_CONSUMER_SECRET"),
            read_trimmed("TWITTER_ACCESS_TOKEN"),
            read_trimmed("TWITTER_ACCESS_TOKEN_SECRET"),
        ) {
            (Some(key), Some(secret), Some(token), Some(token_secret)) => {
                OAuthCredentials::new(key, secret, token, token_secret)
            }
            _ => {
                return Err(PredictError::Configuration(
                    "Twitter API credentials not configured.".to_string(),
                ))
            }
        };

        let api_url = env::var("X_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let timeout = env::var("X_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self::new(credentials)
            .with_api_url(api_url)
            .with_timeout(Duration::from_secs(timeout)))
    }

    /// Set the API base URL.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// User lookup URL for an already-validated username.
    pub fn user_lookup_url(&self, username: &str) -> String {
        format!(
            "{}/users/by/username/{}?user.fields={}",
            self.api_url,
            urlencoding::encode(username),
            USER_FIELDS
        )
    }
}

fn read_trimmed(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
