//! PredictionBrain implementation using an OpenAI-compatible gateway.

use predict_core::{async_trait, PredictError, PredictionSource, RawProfile};
use reqwest::{Client, StatusCode};
use tracing::{debug, error, info};

use crate::api_types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use crate::config::GatewayBrainConfig;
use crate::prompt::build_prediction_prompt;

/// Generates raw prediction text by sending the prompt to a chat-completion API.
///
/// Stateless: each call sends a single user message and keeps no history.
#[derive(Debug, Clone)]
pub struct PredictionBrain {
    client: Client,
    config: GatewayBrainConfig,
}

impl PredictionBrain {
    /// Create a new PredictionBrain with the given configuration.
    pub fn new(config: GatewayBrainConfig) -> Result<Self, PredictError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                PredictError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        info!("PredictionBrain initialized with model: {}", config.model);

        Ok(Self { client, config })
    }

    /// Create a PredictionBrain from environment variables.
    ///
    /// See [`GatewayBrainConfig::from_env`] for required environment variables.
    pub fn from_env() -> Result<Self, PredictError> {
        Self::new(GatewayBrainConfig::from_env()?)
    }

    /// Get the configuration.
    pub fn config(&self) -> &GatewayBrainConfig {
        &self.config
    }

    /// Make a chat completion request and return the first choice's text.
    async fn complete(&self, prompt: String) -> Result<String, PredictError> {
        let url = self.config.completions_url();

        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage::user(prompt)],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        debug!("Sending request to AI gateway: {:?}", request);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to send request to AI gateway");
                PredictError::Generation
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), body = %error_text, "AI Gateway error");
            return Err(map_status(status));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            error!(error = %e, "Failed to parse AI gateway response");
            PredictError::Generation
        })?;

        debug!("Received response from AI gateway: {:?}", completion);

        if let Some(usage) = &completion.usage {
            debug!(
                finish_reason = completion.finish_reason().unwrap_or("unknown"),
                "Token usage - prompt: {}, completion: {}, total: {}",
                usage.prompt_tokens,
                usage.completion_tokens,
                usage.total_tokens
            );
        }

        completion
            .first_content()
            .map(str::to_string)
            .ok_or(PredictError::EmptyResponse)
    }
}

/// Map a non-success gateway status to the error shown to users.
fn map_status(status: StatusCode) -> PredictError {
    match status {
        StatusCode::TOO_MANY_REQUESTS => PredictError::RateLimited,
        StatusCode::PAYMENT_REQUIRED => PredictError::QuotaExhausted,
        _ => PredictError::Generation,
    }
}

#[async_trait]
impl PredictionSource for PredictionBrain {
    async fn generate_prediction(&self, profile: &RawProfile) -> Result<String, PredictError> {
        let prompt = build_prediction_prompt(profile);
        self.complete(prompt).await
    }

    fn name(&self) -> &str {
        "PredictionBrain"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_status() {
        assert_eq!(map_status(StatusCode::TOO_MANY_REQUESTS), PredictError::RateLimited);
        assert_eq!(map_status(StatusCode::PAYMENT_REQUIRED), PredictError::QuotaExhausted);
        assert_eq!(map_status(StatusCode::INTERNAL_SERVER_ERROR), PredictError::Generation);
        assert_eq!(map_status(StatusCode::UNAUTHORIZED), PredictError::Generation);
    }

    #[test]
    fn test_brain_name() {
        let config = GatewayBrainConfig::builder().api_key("test-key").build();

        let brain = PredictionBrain::new(config).unwrap();
        assert_eq!(brain.name(), "PredictionBrain");
        assert_eq!(brain.config().model, "google/gemini-2.5-flash");
    }
}
