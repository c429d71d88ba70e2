//! Traits for the upstream services a [`Predictor`](crate::Predictor) depends on.

use async_trait::async_trait;

use crate::error::PredictError;
use crate::model::RawProfile;

/// Looks up a social profile by handle.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    /// Fetch the profile for an already-cleaned username.
    async fn fetch_profile(&self, username: &str) -> Result<RawProfile, PredictError>;

    /// Name of this source, for logs.
    fn name(&self) -> &str;
}

/// Produces raw prediction text for a profile.
#[async_trait]
pub trait PredictionSource: Send + Sync {
    /// Ask the model for a prediction and return its text unparsed.
    async fn generate_prediction(&self, profile: &RawProfile) -> Result<String, PredictError>;

    /// Name of this source, for logs.
    fn name(&self) -> &str;
}
