//! The fetch → generate → normalize sequence.

use std::sync::Arc;

use tracing::{debug, info};

use crate::error::PredictError;
use crate::model::PredictionResult;
use crate::normalize::{finalize, normalize};
use crate::source::{PredictionSource, ProfileSource};
use crate::username::clean_username;

/// Runs one prediction request end to end.
///
/// Holds no per-request state, so a single `Predictor` can serve any number
/// of concurrent requests.
#[derive(Clone)]
pub struct Predictor {
    profiles: Arc<dyn ProfileSource>,
    predictions: Arc<dyn PredictionSource>,
}

impl Predictor {
    /// Create a predictor from its two upstream sources.
    pub fn new(profiles: Arc<dyn ProfileSource>, predictions: Arc<dyn PredictionSource>) -> Self {
        info!(
            "Predictor initialized with profiles: {}, predictions: {}",
            profiles.name(),
            predictions.name()
        );
        Self {
            profiles,
            predictions,
        }
    }

    /// Predict for a raw, user-supplied username.
    ///
    /// The username is cleaned first; see [`clean_username`].
    pub async fn predict(&self, raw_username: &str) -> Result<PredictionResult, PredictError> {
        let username = clean_username(raw_username)?;
        info!("Analyzing user: @{}", username);

        let profile = self.profiles.fetch_profile(&username).await?;
        info!("Fetched user: {}", profile.display_name);

        let raw = self.predictions.generate_prediction(&profile).await?;
        debug!("AI prediction: {}", raw);

        let draft = normalize(&raw)?;
        Ok(finalize(&profile, draft))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CurrentStatus, RawProfile};
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingProfiles {
        seen: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl ProfileSource for RecordingProfiles {
        async fn fetch_profile(&self, username: &str) -> Result<RawProfile, PredictError> {
            self.seen.lock().unwrap().push(username.to_string());
            Ok(RawProfile::new(username, "Test User"))
        }

        fn name(&self) -> &str {
            "RecordingProfiles"
        }
    }

    struct MissingProfiles;

    #[async_trait]
    impl ProfileSource for MissingProfiles {
        async fn fetch_profile(&self, username: &str) -> Result<RawProfile, PredictError> {
            Err(PredictError::fetch_failed(username))
        }

        fn name(&self) -> &str {
            "MissingProfiles"
        }
    }

    struct CannedModel(Result<String, PredictError>);

    #[async_trait]
    impl PredictionSource for CannedModel {
        async fn generate_prediction(&self, _profile: &RawProfile) -> Result<String, PredictError> {
            self.0.clone()
        }

        fn name(&self) -> &str {
            "CannedModel"
        }
    }

    fn canned(text: &str) -> Arc<CannedModel> {
        Arc::new(CannedModel(Ok(text.to_string())))
    }

    #[tokio::test]
    async fn test_predict_cleans_username() {
        let profiles = Arc::new(RecordingProfiles::default());
        let predictor = Predictor::new(
            profiles.clone(),
            canned(r#"{"currentStatus":"bald","futureChance":10}"#),
        );

        let result = predictor.predict(" @alice ").await.unwrap();
        assert_eq!(result.username, "alice");
        assert_eq!(result.current_status, CurrentStatus::Bald);
        assert_eq!(*profiles.seen.lock().unwrap(), vec!["alice".to_string()]);
    }

    #[tokio::test]
    async fn test_predict_invalid_username_skips_fetch() {
        let profiles = Arc::new(RecordingProfiles::default());
        let predictor = Predictor::new(profiles.clone(), canned("{}"));

        let err = predictor.predict("@").await.unwrap_err();
        assert!(matches!(err, PredictError::InvalidInput(_)));
        assert!(profiles.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_predict_fetch_error_short_circuits() {
        let predictor = Predictor::new(
            Arc::new(MissingProfiles),
            Arc::new(CannedModel(Err(PredictError::Generation))),
        );

        let err = predictor.predict("ghost").await.unwrap_err();
        assert_eq!(err, PredictError::fetch_failed("ghost"));
    }

    #[tokio::test]
    async fn test_predict_generation_error() {
        let predictor = Predictor::new(
            Arc::new(RecordingProfiles::default()),
            Arc::new(CannedModel(Err(PredictError::RateLimited))),
        );

        assert_eq!(
            predictor.predict("alice").await.unwrap_err(),
            PredictError::RateLimited
        );
    }

    #[tokio::test]
    async fn test_predict_malformed_output() {
        let predictor = Predictor::new(
            Arc::new(RecordingProfiles::default()),
            canned("not json at all"),
        );

        assert_eq!(
            predictor.predict("alice").await.unwrap_err(),
            PredictError::MalformedPrediction
        );
    }

    #[tokio::test]
    async fn test_predict_clamps_and_defaults() {
        let predictor = Predictor::new(
            Arc::new(RecordingProfiles::default()),
            canned("```json\n{\"currentStatus\":\"unclear\",\"futureChance\":150}\n```"),
        );

        let result = predictor.predict("alice").await.unwrap();
        assert_eq!(result.future_chance, 100);
        assert_eq!(result.timeframe, "next 5-7 years");
    }
}
