//! Error envelope for the HTTP boundary.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use predict_core::PredictError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A prediction failure on its way out of a handler.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] PredictError);

/// JSON body of every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ApiError {
    /// HTTP status for the error.
    ///
    /// Every failure, including upstream and configuration problems, is
    /// reported to the caller as a client error.
    pub fn status_code(&self) -> StatusCode {
        match self.0 {
            PredictError::Configuration(_)
            | PredictError::InvalidInput(_)
            | PredictError::UpstreamUser(_)
            | PredictError::RateLimited
            | PredictError::QuotaExhausted
            | PredictError::Generation
            | PredictError::EmptyResponse
            | PredictError::MalformedPrediction => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(kind = self.0.kind(), "Error in analyze-baldness: {}", self.0);

        let body = ErrorBody {
            error: self.0.to_string(),
        };

        (self.status_code(), Json(body)).into_response()
    }
}

/// Result type for handlers.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_error_is_bad_request() {
        let errors = [
            PredictError::Configuration("AI API key not configured.".to_string()),
            PredictError::invalid_username(),
            PredictError::fetch_failed("alice"),
            PredictError::RateLimited,
            PredictError::QuotaExhausted,
            PredictError::Generation,
            PredictError::EmptyResponse,
            PredictError::MalformedPrediction,
        ];

        for err in errors {
            assert_eq!(ApiError::from(err).status_code(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_response_status() {
        let response = ApiError::from(PredictError::RateLimited).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
