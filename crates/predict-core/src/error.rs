//! Error types for prediction requests.

use thiserror::Error;

/// Errors that can occur while producing a prediction.
///
/// The `Display` text of every variant is safe to show to end users.
/// Diagnostic detail (status codes, raw bodies) is logged where the error
/// is raised and never stored here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredictError {
    /// Credentials or API keys are missing.
    #[error("{0}")]
    Configuration(String),

    /// The request did not carry a usable username.
    #[error("{0}")]
    InvalidInput(String),

    /// The profile could not be fetched, or does not exist.
    #[error("{0}")]
    UpstreamUser(String),

    /// The AI service rejected the call with HTTP 429.
    #[error("Rate limit exceeded. Please try again in a moment.")]
    RateLimited,

    /// The AI service rejected the call with HTTP 402.
    #[error("AI credits depleted. Please try again later.")]
    QuotaExhausted,

    /// Any other AI service failure.
    #[error("AI analysis failed. Please try again.")]
    Generation,

    /// The AI service answered without any content.
    #[error("No AI response received.")]
    EmptyResponse,

    /// The model output was not a JSON object.
    #[error("Could not parse AI prediction. Please try again.")]
    MalformedPrediction,
}

impl PredictError {
    /// Error for a request without a valid username.
    pub fn invalid_username() -> Self {
        PredictError::InvalidInput("Please provide a valid username.".to_string())
    }

    /// Error for a profile lookup that failed at the transport or HTTP level.
    pub fn fetch_failed(username: &str) -> Self {
        PredictError::UpstreamUser(format!(
            "Could not fetch user @{}. They may not exist or have a private account.",
            username
        ))
    }

    /// Error for a lookup that succeeded but returned no user.
    pub fn user_not_found(username: &str) -> Self {
        PredictError::UpstreamUser(format!("User @{} not found.", username))
    }

    /// Short machine-readable name of the variant, for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            PredictError::Configuration(_) => "configuration",
            PredictError::InvalidInput(_) => "invalid_input",
            PredictError::UpstreamUser(_) => "upstream_user",
            PredictError::RateLimited => "rate_limited",
            PredictError::QuotaExhausted => "quota_exhausted",
            PredictError::Generation => "generation",
            PredictError::EmptyResponse => "empty_response",
            PredictError::MalformedPrediction => "malformed_prediction",
        }
    }
}
