//! Configuration for PredictionBrain.

use std::env;
use std::fmt;
use std::time::Duration;

use predict_core::PredictError;

/// Default AI gateway URL.
pub const DEFAULT_API_URL: &str = "https://ai.gateway.lovable.dev";

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "google/gemini-2.5-flash";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for PredictionBrain.
#[derive(Clone)]
pub struct GatewayBrainConfig {
    /// Gateway base URL (`/v1/chat/completions` is appended).
    pub api_url: String,

    /// API key for authentication.
    pub api_key: String,

    /// Model name to use.
    pub model: String,

    /// Maximum tokens for response. Not sent when `None`.
    pub max_tokens: Option<u32>,

    /// Temperature for generation (0.0 - 2.0). Not sent when `None`.
    pub temperature: Option<f32>,

    /// Timeout applied to each request.
    pub timeout: Duration,
}

impl Default for GatewayBrainConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: None,
            temperature: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl fmt::Debug for GatewayBrainConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayBrainConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl GatewayBrainConfig {
    /// Create configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `LOVABLE_API_KEY` - API key for authentication
    ///
    /// Optional environment variables:
    /// - `AI_GATEWAY_URL` - Gateway URL (default: https://ai.gateway.lovable.dev)
    /// - `AI_GATEWAY_MODEL` - Model name (default: google/gemini-2.5-flash)
    /// - `AI_GATEWAY_MAX_TOKENS` - Max tokens (default: unset)
    /// - `AI_GATEWAY_TEMPERATURE` - Temperature (default: unset)
    /// - `AI_GATEWAY_TIMEOUT_SECS` - Request timeout (default: 30)
    pub fn from_env() -> Result<Self, PredictError> {
        let api_key = env::var("LOVABLE_API_KEY")
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| PredictError::Configuration("AI API key not configured.".to_string()))?;

        let api_url = env::var("AI_GATEWAY_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let model = env::var("AI_GATEWAY_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let max_tokens = env::var("AI_GATEWAY_MAX_TOKENS")
            .ok()
            .and_then(|v| v.parse().ok());

        let temperature = env::var("AI_GATEWAY_TEMPERATURE")
            .ok()
            .and_then(|v| v.parse().ok());

        let timeout = env::var("AI_GATEWAY_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key,
            model,
            max_tokens,
            temperature,
            timeout: Duration::from_secs(timeout),
        })
    }

    /// Create a new config builder.
    pub fn builder() -> GatewayBrainConfigBuilder {
        GatewayBrainConfigBuilder::default()
    }

    /// Chat completions endpoint.
    pub fn completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.api_url)
    }
}

/// Builder for GatewayBrainConfig.
#[derive(Debug, Default)]
pub struct GatewayBrainConfigBuilder {
    config: GatewayBrainConfig,
}

impl GatewayBrainConfigBuilder {
    /// Set the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = key.into();
        self
    }

    /// Set the API URL.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the model name.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    /// Set the max tokens.
    pub fn max_tokens(mut self, tokens: u32) -> Self {
        self.config.max_tokens = Some(tokens);
        self
    }

    /// Set the temperature.
    pub fn temperature(mut self, temp: f32) -> Self {
        self.config.temperature = Some(temp);
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> GatewayBrainConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GatewayBrainConfig::default();

        assert_eq!(config.api_url, "https://ai.gateway.lovable.dev");
        assert!(config.api_key.is_empty());
        assert_eq!(config.model, "google/gemini-2.5-flash");
        assert!(config.max_tokens.is_none());
        assert!(config.temperature.is_none());
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(
            config.completions_url(),
            "https://ai.gateway.lovable.dev/v1/chat/completions"
        );
    }

    #[test]
    fn test_builder_all_options() {
        let config = GatewayBrainConfig::builder()
            .api_key("my-key")
            .api_url("http://localhost:9999/")
            .model("google/gemini-2.5-pro")
            .max_tokens(512)
            .temperature(0.9)
            .timeout(Duration::from_secs(3))
            .build();

        assert_eq!(config.api_key, "my-key");
        assert_eq!(config.api_url, "http://localhost:9999");
        assert_eq!(config.model, "google/gemini-2.5-pro");
        assert_eq!(config.max_tokens, Some(512));
        assert_eq!(config.temperature, Some(0.9));
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(
            config.completions_url(),
            "http://localhost:9999/v1/chat/completions"
        );
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = GatewayBrainConfig::builder().api_key("sk-very-secret").build();
        assert!(!format!("{:?}", config).contains("sk-very-secret"));
    }

    // Environment-based tests are combined into a single test to avoid
    // race conditions when tests run in parallel (env vars are process-global).
    #[test]
    fn test_from_env_scenarios() {
        fn clear_all_gateway_vars() {
            for name in [
                "LOVABLE_API_KEY",
                "AI_GATEWAY_URL",
                "AI_GATEWAY_MODEL",
                "AI_GATEWAY_MAX_TOKENS",
                "AI_GATEWAY_TEMPERATURE",
                "AI_GATEWAY_TIMEOUT_SECS",
            ] {
                std::env::remove_var(name);
            }
        }

        // Scenario 1: Missing API key should error
        clear_all_gateway_vars();
        match GatewayBrainConfig::from_env() {
            Err(PredictError::Configuration(msg)) => {
                assert_eq!(msg, "AI API key not configured.");
            }
            other => panic!("Expected Configuration error, got {:?}", other),
        }

        // Scenario 2: Only API key set, defaults used
        clear_all_gateway_vars();
        std::env::set_var("LOVABLE_API_KEY", "test-env-key");

        let config = GatewayBrainConfig::from_env().unwrap();
        assert_eq!(config.api_key, "test-env-key");
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert!(config.max_tokens.is_none());
        assert!(config.temperature.is_none());

        // Scenario 3: All vars set
        clear_all_gateway_vars();
        std::env::set_var("LOVABLE_API_KEY", "full-test-key");
        std::env::set_var("AI_GATEWAY_URL", "https://test.gateway.dev/");
        std::env::set_var("AI_GATEWAY_MODEL", "openai/gpt-5-mini");
        std::env::set_var("AI_GATEWAY_MAX_TOKENS", "2048");
        std::env::set_var("AI_GATEWAY_TEMPERATURE", "0.4");
        std::env::set_var("AI_GATEWAY_TIMEOUT_SECS", "12");

        let config = GatewayBrainConfig::from_env().unwrap();
        assert_eq!(config.api_key, "full-test-key");
        assert_eq!(config.api_url, "https://test.gateway.dev");
        assert_eq!(config.model, "openai/gpt-5-mini");
        assert_eq!(config.max_tokens, Some(2048));
        assert_eq!(config.temperature, Some(0.4));
        assert_eq!(config.timeout, Duration::from_secs(12));

        // Cleanup
        clear_all_gateway_vars();
    }
}
