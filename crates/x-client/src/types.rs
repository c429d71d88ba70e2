//! X API v2 response types.

use predict_core::RawProfile;
use serde::Deserialize;

/// Response from `GET /users/by/username/:username`.
#[derive(Debug, Clone, Deserialize)]
pub struct UserLookupResponse {
    /// The user, when found.
    pub data: Option<XUser>,
    /// Problems reported alongside a 200 status (e.g. unknown user).
    pub errors: Option<Vec<ApiProblem>>,
}

/// A user object with the requested fields.
#[derive(Debug, Clone, Deserialize)]
pub struct XUser {
    pub id: Option<String>,
    pub username: String,
    pub name: String,
    pub description: Option<String>,
    pub profile_image_url: Option<String>,
}

/// A problem entry in an X API error payload.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiProblem {
    pub title: Option<String>,
    pub detail: Option<String>,
    #[serde(rename = "type")]
    pub problem_type: Option<String>,
}

impl From<XUser> for RawProfile {
    fn from(user: XUser) -> Self {
        RawProfile {
            username: user.username,
            display_name: user.name,
            bio: user.description,
            profile_image_url: user.profile_image_url,
        }
    }
}
