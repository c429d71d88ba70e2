//! Username validation.

use crate::error::PredictError;

/// Longest handle the social API accepts.
pub const MAX_USERNAME_LENGTH: usize = 15;

/// Clean a user-supplied handle.
///
/// Strips surrounding whitespace and one leading `@`, then checks the
/// result is 1 to 15 characters of ASCII letters, digits or underscores.
pub fn clean_username(input: &str) -> Result<String, PredictError> {
    let trimmed = input.trim();
    let username = trimmed.strip_prefix('@').unwrap_or(trimmed).trim();

    if username.is_empty() || username.len() > MAX_USERNAME_LENGTH {
        return Err(PredictError::invalid_username());
    }

    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(PredictError::invalid_username());
    }

    Ok(username.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_at_and_whitespace() {
        assert_eq!(clean_username("@alice").unwrap(), "alice");
        assert_eq!(clean_username("  @alice  ").unwrap(), "alice");
        assert_eq!(clean_username("alice_99").unwrap(), "alice_99");
        assert_eq!(clean_username("@ alice").unwrap(), "alice");
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(
            clean_username(""),
            Err(PredictError::InvalidInput(_))
        ));
        assert!(matches!(
            clean_username("  @ "),
            Err(PredictError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_rejects_bad_characters() {
        assert!(clean_username("alice/../admin").is_err());
        assert!(clean_username("al ice").is_err());
        assert!(clean_username("@@alice").is_err());
        assert!(clean_username("ålice").is_err());
    }

    #[test]
    fn test_length_limit() {
        assert!(clean_username("a23456789012345").is_ok());
        assert!(clean_username("a234567890123456").is_err());
    }

    #[test]
    fn test_error_message() {
        let err = clean_username("").unwrap_err();
        assert_eq!(err.to_string(), "Please provide a valid username.");
    }
}
