//! Centralized filename parsing for asset tokens.
//!
//! Every depicted subject on the page (team member, event photo, partner logo)
//! is identified by the filename of its image. Two values are derived from
//! that token:
//!
//! - **Key**: extension stripped, lower-cased. Used to look up the subject in
//!   the metadata tables of `content.toml`.
//! - **Display name**: extension stripped, underscores become spaces, every
//!   space-delimited word gets an upper-case first letter.
//!
//! ```text
//! david_amodu.jpeg   → key "david_amodu",   display "David Amodu"
//! Draxx.jpeg         → key "draxx",         display "Draxx"
//! web3_precious.jpeg → key "web3_precious", display "Web3 Precious"
//! ```
//!
//! Both derivations are total: any string is accepted, and a token without an
//! extension passes through the strip step unchanged.

use serde::{Deserialize, Serialize};

/// A parsed asset token with both derived forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetName {
    /// The raw token as listed in content (e.g. `"ann_imoagene.png"`).
    pub file: String,
    /// Metadata lookup key (e.g. `"ann_imoagene"`).
    pub key: String,
    /// Human-readable name (e.g. `"Ann Imoagene"`).
    pub display_name: String,
}

impl AssetName {
    pub fn parse(token: &str) -> Self {
        Self {
            file: token.to_string(),
            key: derive_key(token),
            display_name: derive_display_name(token),
        }
    }
}

/// Strip a trailing extension: a dot followed by one or more characters that
/// are neither `.` nor `/`, anchored at the end of the token.
///
/// - `"photo.jpeg"` → `"photo"`
/// - `"archive.tar.gz"` → `"archive.tar"`
/// - `"dir.d/file"` → `"dir.d/file"` (the dot belongs to a directory)
/// - `"trailing."` → `"trailing."` (nothing after the dot)
pub fn strip_extension(token: &str) -> &str {
    match token.rfind('.') {
        Some(dot) => {
            let ext = &token[dot + 1..];
            if ext.is_empty() || ext.contains('/') {
                token
            } else {
                &token[..dot]
            }
        }
        None => token,
    }
}

/// Lookup key: extension stripped, lower-cased.
pub fn derive_key(token: &str) -> String {
    strip_extension(token).to_lowercase()
}

/// Display name: extension stripped, `_` → space, first letter of each
/// space-delimited word upper-cased. The rest of each word is left as-is, so
/// `"iOS_dev"` becomes `"IOS Dev"` and `"McDonald"` stays `"McDonald"`.
pub fn derive_display_name(token: &str) -> String {
    strip_extension(token)
        .replace('_', " ")
        .split(' ')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
