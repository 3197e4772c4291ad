//! # Typed profile-update request and validation
//!
//! The settings cards each own one profile field, so the update request is a struct
//! of optional fields rather than a generic bag of form values: a card sends only
//! the field it is responsible for and the server leaves the rest untouched.
//!
//! Validation is a pure function so it can run (and be tested) without a database
//! or a session. Failures are plain strings surfaced verbatim to the user through
//! [`UpdateOutcome::failure`].

use serde::{Deserialize, Serialize};

/// Profile fields to update. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    /// Compressed avatar as a base64 data URL, as produced by the `imaging` crate.
    pub avatar: Option<String>,
}

/// Result of a profile update: either success or a user-facing error message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateOutcome {
    pub success: bool,
    pub error: Option<String>,
}

impl UpdateOutcome {
    pub fn success() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
        }
    }
}

/// Validate a profile update, returning a user-facing message on failure.
pub fn validate_profile_update(update: &ProfileUpdate) -> Result<(), String> {
    if update.name.is_none() && update.email.is_none() && update.avatar.is_none() {
        return Err("No fields to update".to_string());
    }

    if let Some(ref name) = update.name {
        if name.trim().is_empty() {
            return Err("Name is required".to_string());
        }
    }

    if let Some(ref email) = update.email {
        let email = email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err("Invalid email address".to_string());
        }
    }

    if let Some(ref avatar) = update.avatar {
        let Some((mime, bytes)) = imaging::parse_data_url(avatar) else {
            return Err("Avatar must be a base64 image data URL".to_string());
        };
        if !imaging::is_allowed_type(&mime) {
            return Err("Avatar must be a png, jpeg, jpg, or webp image".to_string());
        }
        if bytes.len() > imaging::MAX_ENCODED_BYTES {
            return Err("Avatar image exceeds the 100 KB limit".to_string());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn avatar_update(avatar: &str) -> ProfileUpdate {
        ProfileUpdate {
            avatar: Some(avatar.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_update_is_rejected() {
        let err = validate_profile_update(&ProfileUpdate::default()).unwrap_err();
        assert_eq!(err, "No fields to update");
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let update = ProfileUpdate {
            name: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(validate_profile_update(&update).unwrap_err(), "Name is required");
    }

    #[test]
    fn test_bad_email_is_rejected() {
        let update = ProfileUpdate {
            email: Some("not-an-email".to_string()),
            ..Default::default()
        };
        assert_eq!(
            validate_profile_update(&update).unwrap_err(),
            "Invalid email address"
        );
    }

    #[test]
    fn test_avatar_must_be_data_url() {
        let err = validate_profile_update(&avatar_update("https://cdn/x.png")).unwrap_err();
        assert_eq!(err, "Avatar must be a base64 image data URL");
    }

    #[test]
    fn test_avatar_rejects_disallowed_mime() {
        let url = imaging::encode_data_url("image/gif", b"gif bytes");
        let err = validate_profile_update(&avatar_update(&url)).unwrap_err();
        assert_eq!(err, "Avatar must be a png, jpeg, jpg, or webp image");
    }

    #[test]
    fn test_avatar_rejects_oversized_payload() {
        let big = vec![0u8; imaging::MAX_ENCODED_BYTES + 1];
        let url = imaging::encode_data_url("image/jpeg", &big);
        let err = validate_profile_update(&avatar_update(&url)).unwrap_err();
        assert_eq!(err, "Avatar image exceeds the 100 KB limit");
    }

    #[test]
    fn test_valid_update_passes() {
        let url = imaging::encode_data_url("image/jpeg", b"small jpeg");
        let update = ProfileUpdate {
            name: Some("Ada".to_string()),
            email: Some("ada@example.com".to_string()),
            avatar: Some(url),
        };
        assert!(validate_profile_update(&update).is_ok());
    }
}
