//! CLI output formatting for both pipeline stages.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. The primary display
//! for every entity (team member, event, partner) is its display name and
//! positional index, with the source image shown as secondary context on an
//! indented `Source:` line. The scan output reads as a content inventory in
//! page order.
//!
//! # Output Format
//!
//! ## Scan
//!
//! ```text
//! Team
//! 001 David Amodu (tier 0)
//!     Role: Founder & Manager
//!     Source: team/david_amodu.jpeg
//! 002 Zed Quiet (tier 5)
//!     Role: Role - TBD (no metadata)
//!     Source: team/zed_quiet.png
//!
//! Events
//! Featured Cohort Kickoff
//!     Source: events/cohort.jpeg
//! 001 Hack Night
//!     Late-night build session
//!     Source: events/hack_night.jpeg
//!
//! Partners
//! 001 Syncthesis
//!     Source: partners/syncthesis.png
//!
//! Warnings
//!     team: metadata 'former_member' matches no image
//!
//! Config
//!     config.toml
//!     content.toml
//!     assets/
//! ```
//!
//! ## Generate
//!
//! ```text
//! Home → index.html
//!     Team: 8 members
//!     Events: 1 featured, 6 past
//!     Partners: 3
//! Copied 19 files
//! Generated site at dist
//! ```
//!
//! # Architecture
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for testability
//! and a `print_*` wrapper that writes to stdout. Format functions are pure:
//! no I/O, no side effects. Diagnostics go through `tracing` to stderr instead.

use crate::generate::GenerateReport;
use crate::scan::{Manifest, ScanWarning};
use crate::types::{EventRecord, PersonRecord};
use std::path::Path;

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format an entity header: positional index + name, with optional detail.
///
/// ```text
/// 001 David Amodu (tier 0)
/// 001 Syncthesis
/// ```
fn entity_header(index: usize, name: &str, detail: Option<&str>) -> String {
    match detail {
        Some(d) => format!("{} {} ({})", format_index(index), name, d),
        None => format!("{} {}", format_index(index), name),
    }
}

fn source_line(dir: &str, file: &str) -> String {
    format!("{}Source: {}/{}", indent(1), dir, file)
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{}...", cut)
    }
}

fn person_lines(index: usize, person: &PersonRecord, dir: &str) -> Vec<String> {
    let tier = format!("tier {}", person.tier);
    let role = if person.has_metadata {
        person.role.clone()
    } else {
        format!("{} (no metadata)", person.role)
    };
    vec![
        entity_header(index, &person.display_name, Some(&tier)),
        format!("{}Role: {}", indent(1), role),
        source_line(dir, &person.file),
    ]
}

fn event_lines(header: String, event: &EventRecord, dir: &str) -> Vec<String> {
    vec![
        header,
        format!("{}{}", indent(1), truncate_desc(&event.description, 60)),
        source_line(dir, &event.file),
    ]
}

// ============================================================================
// Stage 1: Scan output
// ============================================================================

/// Format scan stage output showing the resolved page content.
pub fn format_scan_output(manifest: &Manifest, source_root: &Path) -> Vec<String> {
    let content = &manifest.content;
    let mut lines = Vec::new();

    lines.push("Team".to_string());
    for (i, person) in manifest.team.iter().enumerate() {
        lines.extend(person_lines(i + 1, person, &content.team.dir));
    }

    lines.push(String::new());
    lines.push("Events".to_string());
    if let Some(featured) = &manifest.events.featured {
        lines.extend(event_lines(
            format!("Featured {}", featured.title),
            featured,
            &content.events.dir,
        ));
    }
    for (i, event) in manifest.events.past.iter().enumerate() {
        lines.extend(event_lines(
            entity_header(i + 1, &event.title, None),
            event,
            &content.events.dir,
        ));
    }

    lines.push(String::new());
    lines.push("Partners".to_string());
    for (i, partner) in manifest.partners.iter().enumerate() {
        lines.push(entity_header(i + 1, &partner.display_name, None));
        lines.push(source_line(&content.partners.dir, &partner.file));
    }

    if !manifest.warnings.is_empty() {
        lines.push(String::new());
        lines.extend(format_warnings(&manifest.warnings));
    }

    // Config section
    lines.push(String::new());
    lines.push("Config".to_string());
    if source_root.join("config.toml").exists() {
        lines.push(format!("{}config.toml", indent(1)));
    }
    if source_root.join("content.toml").exists() {
        lines.push(format!("{}content.toml", indent(1)));
    } else {
        lines.push(format!("{}content.toml (stock)", indent(1)));
    }
    if source_root.join(&manifest.config.assets_dir).is_dir() {
        lines.push(format!("{}{}/", indent(1), manifest.config.assets_dir));
    }

    lines
}

/// Format the warnings block.
pub fn format_warnings(warnings: &[ScanWarning]) -> Vec<String> {
    let mut lines = vec!["Warnings".to_string()];
    lines.extend(warnings.iter().map(|w| format!("{}{}", indent(1), w)));
    lines
}

/// Print scan output to stdout.
pub fn print_scan_output(manifest: &Manifest, source_root: &Path) {
    for line in format_scan_output(manifest, source_root) {
        println!("{}", line);
    }
}

// ============================================================================
// Stage 2: Generate output
// ============================================================================

/// Format generate stage output.
pub fn format_generate_output(
    manifest: &Manifest,
    report: &GenerateReport,
    output_dir: &Path,
) -> Vec<String> {
    let featured = usize::from(manifest.events.featured.is_some());
    vec![
        "Home \u{2192} index.html".to_string(),
        format!("{}Team: {} members", indent(1), manifest.team.len()),
        format!(
            "{}Events: {} featured, {} past",
            indent(1),
            featured,
            manifest.events.past.len()
        ),
        format!("{}Partners: {}", indent(1), manifest.partners.len()),
        format!("Copied {} files", report.copied.len()),
        format!("Generated site at {}", output_dir.display()),
    ]
}

/// Print generate output to stdout.
pub fn print_generate_output(manifest: &Manifest, report: &GenerateReport, output_dir: &Path) {
    for line in format_generate_output(manifest, report, output_dir) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
