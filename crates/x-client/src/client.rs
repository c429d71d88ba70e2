//! X API HTTP client.

use predict_core::{async_trait, PredictError, ProfileSource, RawProfile};
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use tracing::{debug, error, warn};

use crate::config::XConfig;
use crate::oauth::OAuthSigner;
use crate::types::UserLookupResponse;

/// Client for the X user lookup endpoint.
///
/// Every request is signed with OAuth 1.0a user-context credentials.
#[derive(Debug, Clone)]
pub struct XClient {
    http: Client,
    config: XConfig,
    signer: OAuthSigner,
}

impl XClient {
    /// Create a new client with the given configuration.
    pub fn new(config: XConfig) -> Result<Self, PredictError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                PredictError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        let signer = OAuthSigner::new(config.credentials.clone());

        debug!("XClient initialized for {}", config.api_url);

        Ok(Self {
            http,
            config,
            signer,
        })
    }

    /// Create a client from environment variables.
    ///
    /// See [`XConfig::from_env`] for the variables read.
    pub fn from_env() -> Result<Self, PredictError> {
        Self::new(XConfig::from_env()?)
    }

    /// Get the configuration.
    pub fn config(&self) -> &XConfig {
        &self.config
    }

    /// Look up a user by handle.
    ///
    /// Transport failures and non-success statuses are logged and reported
    /// as "could not fetch"; a 200 without user data is "not found".
    pub async fn lookup_user(&self, username: &str) -> Result<RawProfile, PredictError> {
        let url = self.config.user_lookup_url(username);

        let authorization = self.signer.authorization_header("GET", &url).map_err(|e| {
            error!(error = %e, url = %url, "Failed to sign X API request");
            PredictError::fetch_failed(username)
        })?;

        debug!("Fetching X profile: {}", url);

        let response = self
            .http
            .get(&url)
            .header(AUTHORIZATION, authorization)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, username, "X API request failed");
                PredictError::fetch_failed(username)
            })?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), body = %body, "X API error");
            return Err(PredictError::fetch_failed(username));
        }

        let lookup: UserLookupResponse = response.json().await.map_err(|e| {
            error!(error = %e, username, "Failed to decode X API response");
            PredictError::fetch_failed(username)
        })?;

        if let Some(problems) = lookup.errors {
            warn!(?problems, username, "X API reported errors for user lookup");
            return Err(PredictError::user_not_found(username));
        }

        match lookup.data {
            Some(user) => Ok(user.into()),
            None => {
                warn!(username, "X API response has no user data");
                Err(PredictError::user_not_found(username))
            }
        }
    }
}

#[async_trait]
impl ProfileSource for XClient {
    async fn fetch_profile(&self, username: &str) -> Result<RawProfile, PredictError> {
        self.lookup_user(username).await
    }

    fn name(&self) -> &str {
        "XClient"
    }
}
