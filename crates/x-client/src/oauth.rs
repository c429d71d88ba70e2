//! OAuth 1.0a request signing (HMAC-SHA1).
//!
//! Implements the signature flow from RFC 5849 §3.4 as used by the X API:
//! every key and value is percent-encoded per RFC 3986, pairs are sorted by
//! encoded key then encoded value, and the resulting base string is signed
//! with `enc(consumer_secret)&enc(token_secret)`.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use hmac::{Hmac, Mac};
use rand::distributions::Alphanumeric;
use rand::Rng;
use sha1::Sha1;
use url::{Position, Url};

use crate::error::OAuthError;

type HmacSha1 = Hmac<Sha1>;

/// Value of `oauth_signature_method`.
pub const SIGNATURE_METHOD: &str = "HMAC-SHA1";

/// Value of `oauth_version`.
pub const OAUTH_VERSION: &str = "1.0";

const NONCE_LEN: usize = 32;

/// Consumer and access-token credentials for user-context requests.
#[derive(Clone, PartialEq, Eq)]
pub struct OAuthCredentials {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub access_token: String,
    pub access_token_secret: String,
}

impl OAuthCredentials {
    /// Create a credential set.
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        access_token: impl Into<String>,
        access_token_secret: impl Into<String>,
    ) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            access_token: access_token.into(),
            access_token_secret: access_token_secret.into(),
        }
    }
}

impl fmt::Debug for OAuthCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuthCredentials")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"<redacted>")
            .field("access_token", &self.access_token)
            .field("access_token_secret", &"<redacted>")
            .finish()
    }
}

/// Builds `Authorization` headers for signed requests.
#[derive(Debug, Clone)]
pub struct OAuthSigner {
    credentials: OAuthCredentials,
}

impl OAuthSigner {
    /// Create a signer for the given credentials.
    pub fn new(credentials: OAuthCredentials) -> Self {
        Self { credentials }
    }

    /// Build the header for `method` and `url` with a fresh nonce and the current time.
    ///
    /// Query parameters in `url` are included in the signature.
    pub fn authorization_header(&self, method: &str, url: &str) -> Result<String, OAuthError> {
        self.authorization_header_at(method, url, &generate_nonce(), unix_timestamp())
    }

    /// Build the header with an explicit nonce and timestamp.
    pub fn authorization_header_at(
        &self,
        method: &str,
        url: &str,
        nonce: &str,
        timestamp: u64,
    ) -> Result<String, OAuthError> {
        let parsed = Url::parse(url)?;
        let base_url = &parsed[..Position::AfterPath];

        let mut oauth_params = self.protocol_params(nonce, timestamp);

        let mut all_params = oauth_params.clone();
        all_params.extend(
            parsed
                .query_pairs()
                .map(|(key, value)| (key.into_owned(), value.into_owned())),
        );

        let base_string = signature_base_string(method, base_url, &all_params);
        let signature = sign(
            &base_string,
            &self.credentials.consumer_secret,
            &self.credentials.access_token_secret,
        )?;

        oauth_params.push(("oauth_signature".to_string(), signature));
        Ok(render_header(oauth_params))
    }

    fn protocol_params(&self, nonce: &str, timestamp: u64) -> Vec<(String, String)> {
        vec![
            (
                "oauth_consumer_key".to_string(),
                self.credentials.consumer_key.clone(),
            ),
            ("oauth_nonce".to_string(), nonce.to_string()),
            (
                "oauth_signature_method".to_string(),
                SIGNATURE_METHOD.to_string(),
            ),
            ("oauth_timestamp".to_string(), timestamp.to_string()),
            ("oauth_token".to_string(), self.credentials.access_token.clone()),
            ("oauth_version".to_string(), OAUTH_VERSION.to_string()),
        ]
    }
}

/// RFC 3986 percent-encoding: only `A-Z a-z 0-9 - . _ ~` pass through.
pub fn percent_encode(input: &str) -> String {
    urlencoding::encode(input).into_owned()
}

/// Build the signature base string.
///
/// `base_url` must not contain a query string; `params` holds the decoded
/// protocol and query parameters.
pub fn signature_base_string(method: &str, base_url: &str, params: &[(String, String)]) -> String {
    let mut encoded: Vec<(String, String)> = params
        .iter()
        .map(|(key, value)| (percent_encode(key), percent_encode(value)))
        .collect();
    encoded.sort();

    let param_string = encoded
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&");

    format!(
        "{}&{}&{}",
        method.to_ascii_uppercase(),
        percent_encode(base_url),
        percent_encode(&param_string)
    )
}

/// HMAC-SHA1 the base string and return the base64 signature.
pub fn sign(
    base_string: &str,
    consumer_secret: &str,
    token_secret: &str,
) -> Result<String, OAuthError> {
    let signing_key = format!(
        "{}&{}",
        percent_encode(consumer_secret),
        percent_encode(token_secret)
    );

    let mut mac =
        HmacSha1::new_from_slice(signing_key.as_bytes()).map_err(|_| OAuthError::InvalidKey)?;
    mac.update(base_string.as_bytes());

    Ok(BASE64.encode(mac.finalize().into_bytes()))
}

fn render_header(mut params: Vec<(String, String)>) -> String {
    params.sort_by(|a, b| a.0.cmp(&b.0));

    let rendered = params
        .iter()
        .map(|(key, value)| format!("{}=\"{}\"", percent_encode(key), percent_encode(value)))
        .collect::<Vec<_>>()
        .join(", ");

    format!("OAuth {}", rendered)
}

fn generate_nonce() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(NONCE_LEN)
        .map(char::from)
        .collect()
}

fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
