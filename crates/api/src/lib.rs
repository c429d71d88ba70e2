//! HTTP entry point for the baldness oracle.
//!
//! Exposes `POST /analyze-baldness`, which takes `{"username": "..."}` and
//! answers with a `PredictionResult` or `{"error": "..."}` (status 400).
//! All responses carry permissive CORS headers.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use routes::app;
pub use state::AppState;
