//! Chat-completion backed prediction generator.
//!
//! This crate turns a [`RawProfile`] into raw prediction text by sending a
//! fixed comedic prompt to an OpenAI-compatible chat-completion gateway.
//!
//! # Features
//!
//! - Single-message, stateless requests
//! - Upstream failures mapped to user-facing [`PredictError`] variants
//!   (429 rate limit, 402 exhausted credits, everything else generic)
//! - Configurable via environment variables or a builder
//!
//! # Usage
//!
//! ```rust,no_run
//! use gateway_brain::{PredictionBrain, PredictionSource, RawProfile};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let brain = PredictionBrain::from_env()?;
//!     let profile = RawProfile::new("jack", "jack").with_bio("no state is the best state");
//!     let text = brain.generate_prediction(&profile).await?;
//!     println!("{}", text);
//!     Ok(())
//! }
//! ```

mod api_types;
mod brain;
mod config;
mod prompt;

pub use brain::PredictionBrain;
pub use config::{GatewayBrainConfig, GatewayBrainConfigBuilder};
pub use prompt::build_prediction_prompt;

// Re-export predict-core types for convenience
pub use predict_core::{PredictError, PredictionSource, RawProfile};
