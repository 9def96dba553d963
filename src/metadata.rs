//! Metadata tables and the join from asset token to display record.
//!
//! Each asset section of `content.toml` carries a side table keyed by the
//! normalized token key (see [`crate::naming`]):
//!
//! ```toml
//! [team.meta.barnabas_omoniwa]
//! role = "Manager"
//! x = "https://x.com/sirbarna"
//! linkedin = "https://www.linkedin.com/in/barnabasomoniwa"
//! ```
//!
//! ## Resolution
//!
//! Lookup is an exact key match. A miss is not an error: the join substitutes
//! documented placeholders and carries on, so every token always yields a
//! record.
//!
//! | Section | Field | Placeholder |
//! |---------|-------|-------------|
//! | team | role | `"Role - TBD"` |
//! | team | x, linkedin | [`Link::Placeholder`] (`href="#"`) |
//! | events | title | token display name |
//! | events | description | `"Event"` |
//! | partners | description | `"Partner"` |
//! | partners | x | [`Link::Placeholder`] (icon omitted) |
//!
//! Fields are resolved independently: an entry with a role but no LinkedIn
//! still gets the placeholder link.
//!
//! Values are used verbatim in every section. Only an absent or empty string
//! takes the placeholder; whitespace is kept as written, so a role of `" "`
//! stays tier 4 and a description of `" "` renders as a blank line.

use crate::naming::AssetName;
use crate::roles;
use crate::types::{EventRecord, Link, PartnerRecord, PersonRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const ROLE_PLACEHOLDER: &str = "Role - TBD";
pub const EVENT_DESCRIPTION_PLACEHOLDER: &str = "Event";
pub const PARTNER_DESCRIPTION_PLACEHOLDER: &str = "Partner";

/// Side table keyed by normalized asset key.
pub type MetaTable<T> = BTreeMap<String, T>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PersonMeta {
    pub role: Option<String>,
    pub x: Option<String>,
    pub linkedin: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EventMeta {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PartnerMeta {
    pub description: Option<String>,
    pub x: Option<String>,
}

/// Look up the metadata entry for an asset. `None` is the placeholder branch.
pub fn lookup<'a, T>(table: &'a MetaTable<T>, name: &AssetName) -> Option<&'a T> {
    table.get(&name.key)
}

/// Return the first non-empty value, unmodified.
///
/// ```text
/// event title: resolve(&[meta_title, display_name])
/// ```
pub fn resolve(sources: &[Option<&str>]) -> Option<String> {
    sources
        .iter()
        .filter_map(|opt| opt.filter(|s| !s.is_empty()).map(String::from))
        .next()
}

pub fn join_person(token: &str, table: &MetaTable<PersonMeta>) -> PersonRecord {
    let name = AssetName::parse(token);
    let (role, x, linkedin, has_metadata) = match lookup(table, &name) {
        Some(meta) => (
            meta.role.as_deref(),
            meta.x.as_deref(),
            meta.linkedin.as_deref(),
            true,
        ),
        None => {
            tracing::debug!(file = token, key = %name.key, "no team metadata, using placeholders");
            (None, None, None, false)
        }
    };

    PersonRecord {
        tier: roles::classify(role),
        role: role
            .filter(|r| !r.is_empty())
            .unwrap_or(ROLE_PLACEHOLDER)
            .to_string(),
        x: Link::from_option(x),
        linkedin: Link::from_option(linkedin),
        has_metadata,
        file: name.file,
        key: name.key,
        display_name: name.display_name,
    }
}

pub fn join_event(token: &str, table: &MetaTable<EventMeta>) -> EventRecord {
    let name = AssetName::parse(token);
    let meta = lookup(table, &name);
    if meta.is_none() {
        tracing::debug!(file = token, key = %name.key, "no event metadata, using placeholders");
    }
    let title = meta.map(|m| m.title.as_str());
    let description = meta.map(|m| m.description.as_str());

    EventRecord {
        title: resolve(&[title, Some(name.display_name.as_str())]).unwrap_or_default(),
        description: resolve(&[description])
            .unwrap_or_else(|| EVENT_DESCRIPTION_PLACEHOLDER.to_string()),
        has_metadata: meta.is_some(),
        file: name.file,
        key: name.key,
    }
}

pub fn join_partner(token: &str, table: &MetaTable<PartnerMeta>) -> PartnerRecord {
    let name = AssetName::parse(token);
    let meta = lookup(table, &name);
    if meta.is_none() {
        tracing::debug!(file = token, key = %name.key, "no partner metadata, using placeholders");
    }
    let description = meta.and_then(|m| m.description.as_deref());

    PartnerRecord {
        description: resolve(&[description])
            .unwrap_or_else(|| PARTNER_DESCRIPTION_PLACEHOLDER.to_string()),
        x: Link::from_option(meta.and_then(|m| m.x.as_deref())),
        has_metadata: meta.is_some(),
        file: name.file,
        key: name.key,
        display_name: name.display_name,
    }
}

/// Join every token in source order.
pub fn join_events(tokens: &[String], table: &MetaTable<EventMeta>) -> Vec<EventRecord> {
    tokens.iter().map(|t| join_event(t, table)).collect()
}

/// Join every token in source order.
pub fn join_partners(tokens: &[String], table: &MetaTable<PartnerMeta>) -> Vec<PartnerRecord> {
    tokens.iter().map(|t| join_partner(t, table)).collect()
}
