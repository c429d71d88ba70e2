//! X (Twitter) API client library.
//!
//! This crate provides a small client for the X API v2 user lookup
//! endpoint. It supports:
//!
//! - OAuth 1.0a HMAC-SHA1 request signing ([`OAuthSigner`])
//! - Fetching a profile by handle ([`XClient`])
//! - Configuration from environment variables ([`XConfig::from_env`])
//!
//! # Example
//!
//! ```no_run
//! use x_client::XClient;
//!
//! # async fn example() -> Result<(), predict_core::PredictError> {
//! let client = XClient::from_env()?;
//! let profile = client.lookup_user("jack").await?;
//! println!("{} has bio {:?}", profile.display_name, profile.bio);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod oauth;
pub mod types;

pub use client::XClient;
pub use config::XConfig;
pub use error::OAuthError;
pub use oauth::{OAuthCredentials, OAuthSigner};
