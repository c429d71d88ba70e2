//! Prompt template for baldness predictions.
//!
//! The JSON shape requested here is what `predict_core::normalize` reads;
//! keep the two in sync.

use predict_core::RawProfile;

const NO_BIO: &str = "No bio";
const NO_IMAGE: &str = "No image";

/// Build the single user message sent to the model.
pub fn build_prediction_prompt(profile: &RawProfile) -> String {
    let bio = profile.bio_text().unwrap_or(NO_BIO);
    let image = profile
        .high_res_image()
        .unwrap_or_else(|| NO_IMAGE.to_string());

    format!(
        r#"You are a fun, comedic AI that makes humorous "baldness predictions" based on X (Twitter) profiles. This is purely for entertainment.

Analyze this X profile and make a funny, lighthearted prediction:

**Name:** {name}
**Username:** @{username}
**Bio:** {bio}
**Profile Image URL:** {image}

Based on the bio content, look for humorous "baldness indicators" like:
- Hustle culture / grindset mentions (stress = hair loss joke)
- Coffee addiction references
- Gym/fitness obsession
- Crypto/Web3 involvement
- Startup founder vibes
- Sleep deprivation mentions
- Age hints
- Stress-related content

Respond with ONLY a valid JSON object (no markdown, no code blocks):
{{
  "currentStatus": "bald" | "not_bald" | "unclear",
  "currentStatusReason": "A funny 1-2 sentence explanation based on profile analysis",
  "futureChance": <number between 0-100>,
  "futureReason": "A humorous 1-2 sentence prediction based on lifestyle hints in bio",
  "timeframe": "next 5-7 years" or similar fun timeframe
}}

Be playful and funny! This is entertainment only. Reference specific things from their bio if possible."#,
        name = profile.display_name,
        username = profile.username,
        bio = bio,
        image = image,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_profile() {
        let profile = RawProfile::new("alice", "Alice Liddell")
            .with_bio("Founder @ wonderland.xyz. 4 espressos a day.")
            .with_profile_image_url("https://pbs.twimg.com/profile_images/1/alice_normal.jpg");

        let prompt = build_prediction_prompt(&profile);

        assert!(prompt.contains("**Name:** Alice Liddell"));
        assert!(prompt.contains("**Username:** @alice"));
        assert!(prompt.contains("**Bio:** Founder @ wonderland.xyz. 4 espressos a day."));
        assert!(prompt.contains(
            "**Profile Image URL:** https://pbs.twimg.com/profile_images/1/alice_400x400.jpg"
        ));
    }

    #[test]
    fn test_prompt_placeholders() {
        let profile = RawProfile::new("bob", "Bob").with_bio("  ");
        let prompt = build_prediction_prompt(&profile);

        assert!(prompt.contains("**Bio:** No bio"));
        assert!(prompt.contains("**Profile Image URL:** No image"));
    }

    #[test]
    fn test_prompt_requests_json_shape() {
        let prompt = build_prediction_prompt(&RawProfile::new("bob", "Bob"));

        for field in [
            "\"currentStatus\"",
            "\"currentStatusReason\"",
            "\"futureChance\"",
            "\"futureReason\"",
            "\"timeframe\"",
        ] {
            assert!(prompt.contains(field), "missing {}", field);
        }
        assert!(prompt.contains("Respond with ONLY a valid JSON object"));
        assert!(prompt.contains("\n{\n  \"currentStatus\""));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let profile = RawProfile::new("bob", "Bob").with_bio("gm");
        assert_eq!(
            build_prediction_prompt(&profile),
            build_prediction_prompt(&profile)
        );
    }
}
