//! # Shared page and link models
//!
//! A `Page` is a user's public "link in bio" page, addressed by a unique slug.
//! Its `page_links` rows carry the individual links, ordered by `position`.
//!
//! Server rows ([`Page`], [`PageLink`]) derive [`sqlx::FromRow`]; their client-safe
//! projections ([`PageInfo`], [`PageLinkInfo`]) stringify the UUIDs and drop the
//! audit columns so they serialize cleanly across the server/client boundary.
//! [`SharedPage`] bundles everything the public share view needs in one response.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full page record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct Page {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub slug: String,
    pub public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl Page {
    /// Convert to PageInfo for client consumption.
    pub fn to_info(&self) -> PageInfo {
        PageInfo {
            id: self.id.to_string(),
            name: self.name.clone(),
            description: self.description.clone(),
            slug: self.slug.clone(),
            public: self.public,
        }
    }
}

/// Full page-link record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct PageLink {
    pub id: Uuid,
    pub page_id: Uuid,
    pub title: String,
    pub url: String,
    pub position: i32,
}

#[cfg(feature = "server")]
impl PageLink {
    /// Convert to PageLinkInfo for client consumption.
    pub fn to_info(&self) -> PageLinkInfo {
        PageLinkInfo {
            id: self.id.to_string(),
            title: self.title.clone(),
            url: self.url.clone(),
        }
    }
}

/// Page information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageInfo {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub slug: String,
    pub public: bool,
}

impl PageInfo {
    /// Marker for a page the anonymous viewer may not see. Carries only the
    /// slug the caller already knows and `public == false`; the page's id,
    /// name, and description never leave the server.
    pub fn not_public(slug: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            description: None,
            slug: slug.into(),
            public: false,
        }
    }
}

/// A single link on a shared page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageLinkInfo {
    pub id: String,
    pub title: String,
    pub url: String,
}

/// Everything the public share view needs: the page, its links, and the owner's
/// display name and avatar data URL.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SharedPage {
    pub page: PageInfo,
    pub links: Vec<PageLinkInfo>,
    pub owner_name: String,
    pub owner_avatar: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_public_marker_carries_no_page_content() {
        let info = PageInfo::not_public("my-links");
        assert!(!info.public);
        assert_eq!(info.slug, "my-links");
        assert!(info.id.is_empty());
        assert!(info.name.is_empty());
        assert!(info.description.is_none());
    }
}
