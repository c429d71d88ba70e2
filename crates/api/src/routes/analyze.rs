//! Prediction endpoint.

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use predict_core::{PredictError, PredictionResult};
use serde_json::Value;

use crate::error::Result;
use crate::state::AppState;

/// `POST /analyze-baldness` with body `{"username": "..."}`.
///
/// The body is parsed by hand so that malformed JSON yields the same
/// `{"error": ...}` envelope as every other failure.
pub async fn analyze(State(state): State<AppState>, body: Bytes) -> Result<Json<PredictionResult>> {
    let predictor = state.predictor()?;
    let username = extract_username(&body)?;
    let result = predictor.predict(&username).await?;
    Ok(Json(result))
}

fn extract_username(body: &[u8]) -> std::result::Result<String, PredictError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|_| PredictError::invalid_username())?;

    value
        .get("username")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(PredictError::invalid_username)
}
