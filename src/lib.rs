//! # Simple Landing
//!
//! A static site generator for single-page organization landing sites: a
//! hero, an about blurb, a team roster, an events gallery, partner logos and
//! a contact footer. Page copy lives in one TOML data file; every depicted
//! subject is identified by the filename of its image.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! ```text
//! 1. Scan      content/  →  manifest.json    (files + metadata → display records)
//! 2. Generate  manifest  →  dist/            (final HTML page + images)
//! ```
//!
//! The manifest is human-readable JSON, so the result of every join and sort
//! can be inspected before any HTML exists.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`naming`] | Filename token → lookup key and display name |
//! | [`roles`] | Free-text role → priority tier |
//! | [`metadata`] | Token + side table → display record, with placeholders on a miss |
//! | [`roster`] | Team ordering: tier, then locale-independent name collation |
//! | [`types`] | Display records shared between stages (`PersonRecord`, `EventGallery`, `Link`) |
//! | [`content`] | `content.toml` schema, stock content, the init-once content value |
//! | [`config`] | `config.toml` loading, validation, merging, and CSS generation |
//! | [`scan`] | Stage 1: resolves tokens, joins, sorts, collects warnings |
//! | [`generate`] | Stage 2: renders the page with Maud and copies assets |
//! | [`output`] | CLI output formatting for both stages |
//!
//! # Design Decisions
//!
//! ## Missing Metadata Never Fails
//!
//! A portrait without a metadata entry still appears on the page: the name
//! comes from the filename, the role reads "Role - TBD", and the social links
//! point at `#`. Scan reports the gap as a warning instead of stopping the
//! build, so adding a new photo is a one-file change.
//!
//! ## Content Separate From Code
//!
//! All copy, links, and metadata tables live in `content.toml`. It is loaded
//! once per run into an immutable value; nothing mutates it afterwards.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time HTML
//! macro system. Malformed markup is a build error, and all interpolation is
//! auto-escaped, which matters here because every name on the page comes from
//! a filename or a data file.

pub mod config;
pub mod content;
pub mod generate;
pub mod metadata;
pub mod naming;
pub mod output;
pub mod roles;
pub mod roster;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
