//! Shared types used across both pipeline stages.
//!
//! These are the display-ready records produced by scan and consumed by
//! generate. They are serialized to `manifest.json` between stages and must
//! round-trip unchanged.

use crate::roles::RoleTier;
use serde::{Deserialize, Serialize};

/// `href` emitted for a link that has no target.
pub const PLACEHOLDER_HREF: &str = "#";

/// An outbound link, or the null-link sentinel.
///
/// Serialized as the URL string, or `null` for a placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Link {
    Url(String),
    Placeholder,
}

impl Link {
    /// Build from an optional URL. Empty strings count as missing.
    pub fn from_option(url: Option<&str>) -> Self {
        match url.filter(|u| !u.is_empty()) {
            Some(u) => Link::Url(u.to_string()),
            None => Link::Placeholder,
        }
    }

    pub fn href(&self) -> &str {
        match self {
            Link::Url(url) => url,
            Link::Placeholder => PLACEHOLDER_HREF,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Link::Placeholder)
    }
}

/// A team member ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonRecord {
    /// Raw asset token (image filename).
    pub file: String,
    /// Metadata lookup key derived from `file`.
    pub key: String,
    pub display_name: String,
    /// Role text, or the placeholder when metadata has none.
    pub role: String,
    /// Tier computed from the metadata role before placeholder substitution.
    pub tier: RoleTier,
    /// Primary link (X profile).
    pub x: Link,
    /// Secondary link (LinkedIn profile).
    pub linkedin: Link,
    /// Whether a metadata entry was found for `key`.
    pub has_metadata: bool,
}

/// An event photo with its caption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub file: String,
    pub key: String,
    pub title: String,
    pub description: String,
    pub has_metadata: bool,
}

/// A partner organization logo with its blurb.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartnerRecord {
    pub file: String,
    pub key: String,
    pub display_name: String,
    pub description: String,
    pub x: Link,
    pub has_metadata: bool,
}

/// Event photos split into the featured (ongoing) image and the past gallery.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventGallery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<EventRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub past: Vec<EventRecord>,
}

impl EventGallery {
    /// The first record is featured; up to `past_limit` following records
    /// form the gallery. Anything beyond is dropped from the page.
    pub fn split(records: Vec<EventRecord>, past_limit: usize) -> Self {
        let mut iter = records.into_iter();
        let featured = iter.next();
        let past = iter.take(past_limit).collect();
        Self { featured, past }
    }

    pub fn len(&self) -> usize {
        self.featured.iter().count() + self.past.len()
    }

    pub fn is_empty(&self) -> bool {
        self.featured.is_none() && self.past.is_empty()
    }
}
