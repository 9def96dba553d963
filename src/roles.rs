//! Role classification for team roster ordering.
//!
//! A free-text role such as `"Tutor & Developer"` is bucketed into a tier by
//! case-insensitive substring match. The vocabulary is checked in a fixed
//! order and the first hit wins, so `"Founder & Manager"` is a founder.
//!
//! | Tier | Matches |
//! |------|---------|
//! | 0 | contains `founder` |
//! | 1 | contains `manager` |
//! | 2 | contains `tutor` or `instructor` |
//! | 3 | contains `contributor` |
//! | 4 | any other non-empty role |
//! | 5 | no role at all |
//!
//! Unrecognised roles (tier 4) sort before people with no role (tier 5).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Priority bucket for a role. Lower sorts earlier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleTier {
    Founder = 0,
    Manager = 1,
    Instructor = 2,
    Contributor = 3,
    Other = 4,
    Unassigned = 5,
}

impl RoleTier {
    /// Numeric tier in `0..=5`.
    pub fn rank(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for RoleTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rank())
    }
}

/// Ordered vocabulary: first matching row wins.
const VOCABULARY: &[(&[&str], RoleTier)] = &[
    (&["founder"], RoleTier::Founder),
    (&["manager"], RoleTier::Manager),
    (&["tutor", "instructor"], RoleTier::Instructor),
    (&["contributor"], RoleTier::Contributor),
];

/// Classify an optional role string.
pub fn classify(role: Option<&str>) -> RoleTier {
    let Some(role) = role.filter(|r| !r.is_empty()) else {
        return RoleTier::Unassigned;
    };
    let normalized = role.to_lowercase();
    VOCABULARY
        .iter()
        .find(|(needles, _)| needles.iter().any(|n| normalized.contains(n)))
        .map(|&(_, tier)| tier)
        .unwrap_or(RoleTier::Other)
}
