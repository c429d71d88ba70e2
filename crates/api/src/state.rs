//! Application state shared across handlers.

use std::sync::Arc;

use gateway_brain::PredictionBrain;
use predict_core::{PredictError, Predictor};
use x_client::XClient;

/// Shared application state.
///
/// A server whose credentials are missing still starts: preflight and
/// health requests are answered, and every analysis request fails with
/// the configuration error.
#[derive(Clone)]
pub struct AppState {
    backend: Arc<Backend>,
}

enum Backend {
    Ready(Predictor),
    Unconfigured(PredictError),
}

impl AppState {
    /// Create state around a ready predictor.
    pub fn new(predictor: Predictor) -> Self {
        Self {
            backend: Arc::new(Backend::Ready(predictor)),
        }
    }

    /// Create state for a server whose configuration failed to load.
    pub fn unconfigured(error: PredictError) -> Self {
        Self {
            backend: Arc::new(Backend::Unconfigured(error)),
        }
    }

    /// Build the X client and prediction brain from environment variables.
    pub fn from_env() -> Self {
        match load_predictor() {
            Ok(predictor) => Self::new(predictor),
            Err(err) => {
                tracing::warn!("Starting without upstream credentials: {}", err);
                Self::unconfigured(err)
            }
        }
    }

    /// Get the predictor, or the configuration error that prevented it.
    pub fn predictor(&self) -> Result<&Predictor, PredictError> {
        match self.backend.as_ref() {
            Backend::Ready(predictor) => Ok(predictor),
            Backend::Unconfigured(err) => Err(err.clone()),
        }
    }

    /// Whether upstream credentials were loaded.
    pub fn is_configured(&self) -> bool {
        matches!(self.backend.as_ref(), Backend::Ready(_))
    }
}

fn load_predictor() -> Result<Predictor, PredictError> {
    let profiles = XClient::from_env()?;
    let predictions = PredictionBrain::from_env()?;
    Ok(Predictor::new(Arc::new(profiles), Arc::new(predictions)))
}
