//! # User model
//!
//! Defines the two representations of a Linkpage user:
//!
//! ## [`User`] (server only)
//!
//! The complete database row from the `users` table. It derives [`sqlx::FromRow`] so it
//! can be loaded directly from queries and contains every column:
//!
//! - `id` — primary key (`UUID v4`).
//! - `email`, `name` — profile fields edited through the account settings cards.
//! - `avatar` — the compressed profile picture as a base64 data URL, or `NULL` when
//!   the user has never uploaded one.
//! - `created_at` / `updated_at` — audit timestamps.
//!
//! The [`User::to_info`] method projects this into a [`UserInfo`].
//!
//! ## [`UserInfo`]
//!
//! A client-safe subset that is `Serialize + Deserialize + PartialEq` and can cross the
//! server/client boundary via Dioxus server functions. It omits the timestamps and
//! converts the `Uuid` to a `String` so it works in WASM. The helper
//! [`UserInfo::display_name`] returns the user's name or falls back to their email
//! address.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full user record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl User {
    /// Convert to UserInfo for client consumption.
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id.to_string(),
            email: self.email.clone(),
            name: self.name.clone(),
            avatar: self.avatar.clone(),
        }
    }
}

/// User information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub avatar: Option<String>,
}

impl UserInfo {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_falls_back_to_email() {
        let mut info = UserInfo {
            id: "1".to_string(),
            email: "ada@example.com".to_string(),
            name: None,
            avatar: None,
        };
        assert_eq!(info.display_name(), "ada@example.com");

        info.name = Some("Ada".to_string());
        assert_eq!(info.display_name(), "Ada");
    }
}
