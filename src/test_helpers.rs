//! Shared test utilities for the simple-landing test suite.
//!
//! Provides fixture setup and lookup helpers that work with scan-phase data
//! structures (`Manifest`, `PersonRecord`, `EventRecord`).
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let manifest = scan(tmp.path()).unwrap();
//!
//! let ada = find_person(&manifest, "Ada Lovelace");
//! assert_eq!(ada.role, "Founder");
//!
//! assert_eq!(team_names(&manifest)[0], "Ada Lovelace");
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::scan::Manifest;
use crate::types::PersonRecord;

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// =========================================================================
// Manifest lookups: panics with a clear message on miss
// =========================================================================

/// Find a team member by display name. Panics if not found.
pub fn find_person<'a>(manifest: &'a Manifest, name: &str) -> &'a PersonRecord {
    manifest
        .team
        .iter()
        .find(|p| p.display_name == name)
        .unwrap_or_else(|| panic!("person '{name}' not found. Available: {:?}", team_names(manifest)))
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// Display names of the roster, in page order.
pub fn team_names(manifest: &Manifest) -> Vec<&str> {
    manifest
        .team
        .iter()
        .map(|p| p.display_name.as_str())
        .collect()
}

/// Titles of the past-events gallery, in page order.
pub fn event_titles(manifest: &Manifest) -> Vec<&str> {
    manifest
        .events
        .past
        .iter()
        .map(|e| e.title.as_str())
        .collect()
}
