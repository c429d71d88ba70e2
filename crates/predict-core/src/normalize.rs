//! Parsing and validation of model output.

use serde_json::{Map, Value};
use tracing::{debug, error, warn};

use crate::error::PredictError;
use crate::model::{
    CurrentStatus, PredictionDraft, PredictionResult, RawProfile, DEFAULT_FUTURE_CHANCE,
    DEFAULT_TIMEFRAME,
};

const FENCE: &str = "```";

/// Remove a markdown code fence wrapped around the text, if present.
///
/// Handles an optional language tag on the opening fence (`` ```json ``)
/// and a missing closing fence. Unfenced text is only trimmed.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix(FENCE) else {
        return trimmed;
    };

    let body = match rest.find('\n') {
        Some(idx) if is_language_tag(&rest[..idx]) => &rest[idx + 1..],
        Some(_) => rest,
        None => rest.trim_start_matches(|c: char| c.is_ascii_alphabetic()),
    };

    let body = body.trim_end();
    body.strip_suffix(FENCE).unwrap_or(body).trim()
}

fn is_language_tag(line: &str) -> bool {
    line.trim()
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Parse raw model text into a [`PredictionDraft`].
///
/// The text must be a JSON object, optionally fenced. Individual fields are
/// coerced rather than rejected: an unknown status becomes `unclear`,
/// non-string reasons become empty, and a chance that is not a number is
/// dropped so [`finalize`] can substitute its default.
pub fn normalize(raw: &str) -> Result<PredictionDraft, PredictError> {
    let json_text = strip_code_fence(raw);

    let value: Value = serde_json::from_str(json_text).map_err(|e| {
        error!(error = %e, raw = %raw, "Failed to parse AI response");
        PredictError::MalformedPrediction
    })?;

    let Value::Object(fields) = value else {
        error!(raw = %raw, "AI response is not a JSON object");
        return Err(PredictError::MalformedPrediction);
    };

    let draft = PredictionDraft {
        current_status: read_status(&fields),
        current_status_reason: read_text(&fields, "currentStatusReason"),
        future_chance: read_chance(&fields),
        future_reason: read_text(&fields, "futureReason"),
        timeframe: read_optional_text(&fields, "timeframe"),
    };

    debug!(?draft, "Normalized AI prediction");
    Ok(draft)
}

fn read_status(fields: &Map<String, Value>) -> CurrentStatus {
    match fields.get("currentStatus") {
        Some(Value::String(label)) => CurrentStatus::parse(label).unwrap_or_else(|| {
            warn!(status = %label, "Unknown currentStatus, using unclear");
            CurrentStatus::Unclear
        }),
        Some(other) => {
            warn!(status = %other, "Non-string currentStatus, using unclear");
            CurrentStatus::Unclear
        }
        None => CurrentStatus::Unclear,
    }
}

fn read_text(fields: &Map<String, Value>, key: &str) -> String {
    match fields.get(key) {
        Some(Value::String(text)) => text.clone(),
        Some(other) => {
            warn!(field = key, value = %other, "Non-string field, using empty text");
            String::new()
        }
        None => String::new(),
    }
}

fn read_optional_text(fields: &Map<String, Value>, key: &str) -> Option<String> {
    match fields.get(key) {
        Some(Value::String(text)) if !text.trim().is_empty() => Some(text.trim().to_string()),
        _ => None,
    }
}

fn read_chance(fields: &Map<String, Value>) -> Option<f64> {
    match fields.get("futureChance")? {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => {
            let parsed = text.trim().trim_end_matches('%').trim().parse::<f64>().ok();
            if parsed.is_none() {
                warn!(value = %text, "Non-numeric futureChance");
            }
            parsed
        }
        other => {
            warn!(value = %other, "Non-numeric futureChance");
            None
        }
    }
}

/// Combine a profile and a validated draft into the public result.
pub fn finalize(profile: &RawProfile, draft: PredictionDraft) -> PredictionResult {
    PredictionResult {
        username: profile.username.clone(),
        display_name: profile.display_name.clone(),
        profile_image: profile.high_res_image().unwrap_or_default(),
        current_status: draft.current_status,
        current_status_reason: draft.current_status_reason,
        future_chance: clamp_chance(draft.future_chance),
        future_reason: draft.future_reason,
        timeframe: draft
            .timeframe
            .filter(|timeframe| !timeframe.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_TIMEFRAME.to_string()),
    }
}

fn clamp_chance(chance: Option<f64>) -> u8 {
    match chance {
        Some(value) if !value.is_nan() => value.clamp(0.0, 100.0).round() as u8,
        _ => DEFAULT_FUTURE_CHANCE,
    }
}
