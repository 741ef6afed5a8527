//! Validation helpers for DTOs.

use validator::ValidationError;

/// Validates a session id: 4 to 32 characters, alphanumeric plus `-`/`_`.
///
/// Ids are opaque random tokens baked into the QR link, so the only checks
/// are shape checks that keep junk out of the document.
pub fn validate_session_id(id: &str) -> Result<(), ValidationError> {
    if id.len() < 4 || id.len() > 32 {
        let mut err = ValidationError::new("session_id_length");
        err.message =
            Some(format!("session id must be 4-32 characters (got {})", id.len()).into());
        return Err(err);
    }

    if !id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        let mut err = ValidationError::new("session_id_format");
        err.message =
            Some("session id must contain only letters, digits, `-` or `_`".into());
        return Err(err);
    }

    Ok(())
}

/// Validates a claimant device key: 4 to 64 characters, same alphabet as
/// session ids. Devices mint these themselves, so again only shape checks.
pub fn validate_device_key(key: &str) -> Result<(), ValidationError> {
    if key.len() < 4 || key.len() > 64 {
        let mut err = ValidationError::new("device_key_length");
        err.message =
            Some(format!("device key must be 4-64 characters (got {})", key.len()).into());
        return Err(err);
    }

    if !key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        let mut err = ValidationError::new("device_key_format");
        err.message =
            Some("device key must contain only letters, digits, `-` or `_`".into());
        return Err(err);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_opaque_tokens() {
        assert!(validate_session_id("a1b2c3d4e5").is_ok());
        assert!(validate_session_id("sess_01-X").is_ok());
        assert!(validate_session_id("abcd").is_ok());
    }

    #[test]
    fn rejects_bad_lengths() {
        assert!(validate_session_id("").is_err());
        assert!(validate_session_id("abc").is_err());
        assert!(validate_session_id(&"x".repeat(33)).is_err());
    }

    #[test]
    fn rejects_unexpected_characters() {
        assert!(validate_session_id("has space").is_err());
        assert!(validate_session_id("slash/id").is_err());
        assert!(validate_session_id("quote\"id").is_err());
    }

    #[test]
    fn device_keys_allow_longer_tokens() {
        assert!(validate_device_key(&"k".repeat(64)).is_ok());
        assert!(validate_device_key(&"k".repeat(65)).is_err());
        assert!(validate_device_key("dev").is_err());
        assert!(validate_device_key("dev key").is_err());
    }
}
