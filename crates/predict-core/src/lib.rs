//! Core types and traits for the baldness oracle.
//!
//! This crate holds everything that does not talk to the network:
//!
//! - [`RawProfile`] / [`PredictionDraft`] / [`PredictionResult`] - The data model
//! - [`PredictError`] - The error taxonomy shared by every stage
//! - [`normalize`] / [`finalize`] - Defensive parsing of model output
//! - [`ProfileSource`] / [`PredictionSource`] - Seams for the upstream clients
//! - [`Predictor`] - Runs fetch, generate and normalize in sequence
//!
//! # Example
//!
//! ```rust
//! use predict_core::{async_trait, PredictError, PredictionSource, RawProfile};
//!
//! struct CannedModel;
//!
//! #[async_trait]
//! impl PredictionSource for CannedModel {
//!     async fn generate_prediction(&self, _profile: &RawProfile) -> Result<String, PredictError> {
//!         Ok(r#"{"currentStatus":"unclear","futureChance":42}"#.to_string())
//!     }
//!
//!     fn name(&self) -> &str {
//!         "CannedModel"
//!     }
//! }
//! ```

mod error;
mod model;
mod normalize;
mod pipeline;
mod source;
mod username;

pub use error::PredictError;
pub use model::{
    high_res_image_url, CurrentStatus, PredictionDraft, PredictionResult, RawProfile,
    DEFAULT_FUTURE_CHANCE, DEFAULT_TIMEFRAME,
};
pub use normalize::{finalize, normalize, strip_code_fence};
pub use pipeline::Predictor;
pub use source::{PredictionSource, ProfileSource};
pub use username::{clean_username, MAX_USERNAME_LENGTH};

// Re-export async_trait for convenience
pub use async_trait::async_trait;
