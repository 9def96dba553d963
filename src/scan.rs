//! Content scanning and manifest generation.
//!
//! Stage 1 of the Simple Landing build pipeline. Reads the content directory,
//! resolves the image tokens of each asset section, joins them with their
//! metadata, and produces a [`Manifest`] that the generate stage renders.
//!
//! ## Directory Structure
//!
//! ```text
//! content/                     # Content root
//! ├── config.toml              # Colors, theme, header (optional)
//! ├── content.toml             # Page copy and metadata tables (optional)
//! ├── assets/                  # Copied to the output root (logo, backgrounds)
//! ├── team/                    # One portrait per person
//! │   ├── david_amodu.jpeg
//! │   └── Draxx.jpeg
//! ├── events/                  # First image is the featured event
//! │   └── cohort.jpeg
//! └── partners/                # One logo per partner
//!     └── syncthesis.png
//! ```
//!
//! ## Token Resolution
//!
//! A section with a `files` list uses exactly that list, in that order. A
//! section without one lists its directory for images and sorts by filename.
//!
//! ## Warnings
//!
//! Nothing found here stops the build. Inconsistencies between the token
//! lists, the directories, and the metadata tables are collected as
//! [`ScanWarning`]s in the manifest and logged:
//!
//! - a listed token whose image file does not exist
//! - a metadata key that no token maps to
//! - two tokens that normalize to the same key

use crate::config::{self, SiteConfig};
use crate::content::{self, AssetSection, SiteContent};
use crate::metadata;
use crate::naming::derive_key;
use crate::roster;
use crate::types::{EventGallery, PartnerRecord, PersonRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Content error: {0}")]
    Content(#[from] content::ContentError),
}

/// Manifest output from the scan stage
#[derive(Debug, Serialize, Deserialize)]
pub struct Manifest {
    pub content: SiteContent,
    pub config: SiteConfig,
    /// Ordered roster.
    pub team: Vec<PersonRecord>,
    pub events: EventGallery,
    /// Source order.
    pub partners: Vec<PartnerRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<ScanWarning>,
}

/// A content inconsistency found while scanning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScanWarning {
    /// Token listed in `files` but no such image on disk.
    MissingFile { section: String, file: String },
    /// Section directory does not exist.
    MissingDir { section: String, dir: String },
    /// Metadata entry that no token maps to.
    OrphanMeta { section: String, key: String },
    /// Two or more tokens share one key.
    DuplicateKey {
        section: String,
        key: String,
        files: Vec<String>,
    },
}

impl fmt::Display for ScanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanWarning::MissingFile { section, file } => {
                write!(f, "{section}: listed file '{file}' not found")
            }
            ScanWarning::MissingDir { section, dir } => {
                write!(f, "{section}: directory '{dir}' not found")
            }
            ScanWarning::OrphanMeta { section, key } => {
                write!(f, "{section}: metadata '{key}' matches no image")
            }
            ScanWarning::DuplicateKey {
                section,
                key,
                files,
            } => write!(f, "{section}: key '{key}' shared by {}", files.join(", ")),
        }
    }
}

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif", "svg", "avif"];

/// Scan a content root, loading `config.toml` and `content.toml` from it.
pub fn scan(root: &Path) -> Result<Manifest, ScanError> {
    let config = config::load_config(root)?;
    let content = content::load_content(root)?;
    scan_content(root, content, config)
}

/// Scan with already loaded content and config.
pub fn scan_content(
    root: &Path,
    content: SiteContent,
    config: SiteConfig,
) -> Result<Manifest, ScanError> {
    let mut warnings = Vec::new();

    let team_tokens = resolve_tokens(root, &content.team, &mut warnings)?;
    let event_tokens = resolve_tokens(root, &content.events, &mut warnings)?;
    let partner_tokens = resolve_tokens(root, &content.partners, &mut warnings)?;

    let team = roster::sort_roster(&team_tokens, &content.team.meta);
    let events = EventGallery::split(
        metadata::join_events(&event_tokens, &content.events.meta),
        content.events.past_limit,
    );
    let partners = metadata::join_partners(&partner_tokens, &content.partners.meta);

    for warning in &warnings {
        tracing::warn!("{warning}");
    }
    tracing::info!(
        team = team.len(),
        events = events.len(),
        partners = partners.len(),
        "scan complete"
    );

    Ok(Manifest {
        content,
        config,
        team,
        events,
        partners,
        warnings,
    })
}

/// Token list for one section, plus the warnings it raises.
fn resolve_tokens(
    root: &Path,
    section: &dyn AssetSection,
    warnings: &mut Vec<ScanWarning>,
) -> Result<Vec<String>, ScanError> {
    let dir = root.join(section.dir());
    let tokens = match section.files() {
        Some(files) => {
            for file in files {
                if !dir.join(file).is_file() {
                    warnings.push(ScanWarning::MissingFile {
                        section: section.name().to_string(),
                        file: file.clone(),
                    });
                }
            }
            files.to_vec()
        }
        None if dir.is_dir() => list_images(&dir)?,
        None => {
            warnings.push(ScanWarning::MissingDir {
                section: section.name().to_string(),
                dir: section.dir().to_string(),
            });
            Vec::new()
        }
    };

    warnings.extend(key_warnings(section, &tokens));
    Ok(tokens)
}

/// Duplicate and orphan key checks.
fn key_warnings(section: &dyn AssetSection, tokens: &[String]) -> Vec<ScanWarning> {
    let mut by_key: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for token in tokens {
        by_key.entry(derive_key(token)).or_default().push(token.clone());
    }

    let mut warnings: Vec<ScanWarning> = by_key
        .iter()
        .filter(|(_, files)| files.len() > 1)
        .map(|(key, files)| ScanWarning::DuplicateKey {
            section: section.name().to_string(),
            key: key.clone(),
            files: files.clone(),
        })
        .collect();

    warnings.extend(
        section
            .meta_keys()
            .into_iter()
            .filter(|key| !by_key.contains_key(*key))
            .map(|key| ScanWarning::OrphanMeta {
                section: section.name().to_string(),
                key: key.to_string(),
            }),
    );
    warnings
}

/// Image filenames in `dir`, sorted.
fn list_images(dir: &Path) -> Result<Vec<String>, ScanError> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| is_image(p))
        .collect();
    paths.sort();

    Ok(paths
        .iter()
        .filter_map(|p| p.file_name())
        .map(|name| name.to_string_lossy().to_string())
        .filter(|name| !name.starts_with('.'))
        .collect())
}

fn is_image(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    IMAGE_EXTENSIONS.contains(&ext.as_str())
}
