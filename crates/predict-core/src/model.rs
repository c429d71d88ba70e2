//! Profile and prediction types.

use serde::{Deserialize, Serialize};

/// Timeframe used when the model does not provide one.
pub const DEFAULT_TIMEFRAME: &str = "next 5-7 years";

/// Future chance used when the model output has no usable number.
pub const DEFAULT_FUTURE_CHANCE: u8 = 50;

/// Profile fields fetched from the social API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawProfile {
    /// Handle without the leading `@`.
    pub username: String,
    /// Display name.
    pub display_name: String,
    /// Profile description, if any.
    pub bio: Option<String>,
    /// Avatar URL as returned by the API (usually the low-res variant).
    pub profile_image_url: Option<String>,
}

impl RawProfile {
    /// Create a profile with only a username and display name.
    pub fn new(username: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            display_name: display_name.into(),
            bio: None,
            profile_image_url: None,
        }
    }

    /// Set the bio.
    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    /// Set the profile image URL.
    pub fn with_profile_image_url(mut self, url: impl Into<String>) -> Self {
        self.profile_image_url = Some(url.into());
        self
    }

    /// Bio with surrounding whitespace removed, or `None` if it is blank.
    pub fn bio_text(&self) -> Option<&str> {
        self.bio
            .as_deref()
            .map(str::trim)
            .filter(|bio| !bio.is_empty())
    }

    /// High-resolution avatar URL, if the profile has an avatar.
    pub fn high_res_image(&self) -> Option<String> {
        self.profile_image_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .map(high_res_image_url)
    }
}

/// Rewrite a low-res avatar URL (`_normal`) to its 400x400 variant.
///
/// URLs without the `_normal` marker are returned unchanged.
pub fn high_res_image_url(url: &str) -> String {
    url.replacen("_normal", "_400x400", 1)
}

/// Present-day verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurrentStatus {
    Bald,
    NotBald,
    #[default]
    Unclear,
}

impl CurrentStatus {
    /// Parse a status label leniently.
    ///
    /// Case is ignored and spaces or hyphens count as underscores, so
    /// `"Not Bald"` and `"not-bald"` both map to [`CurrentStatus::NotBald`].
    pub fn parse(label: &str) -> Option<Self> {
        let label = label.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        match label.as_str() {
            "bald" => Some(CurrentStatus::Bald),
            "not_bald" => Some(CurrentStatus::NotBald),
            "unclear" => Some(CurrentStatus::Unclear),
            _ => None,
        }
    }
}

/// Model output after schema validation, before clamping and defaults.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PredictionDraft {
    pub current_status: CurrentStatus,
    pub current_status_reason: String,
    /// Raw chance as given by the model; `None` when it was missing or not a number.
    pub future_chance: Option<f64>,
    pub future_reason: String,
    /// `None` when missing or blank.
    pub timeframe: Option<String>,
}

/// The response returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub username: String,
    pub display_name: String,
    pub profile_image: String,
    pub current_status: CurrentStatus,
    pub current_status_reason: String,
    /// Always within 0..=100.
    pub future_chance: u8,
    pub future_reason: String,
    /// Never empty.
    pub timeframe: String,
}
