//! Team roster ordering.
//!
//! The roster is sorted by role tier, then by display name. The name
//! comparison is [`collate`], a fixed root collation: accented letters sort
//! with their base letter, and nothing depends on the host locale, so two
//! builds of the same content always produce the same page.
//!
//! Ties on tier are broken by name, never by position in `content.toml`.
//! Reordering the `files` list does not change the output.

use crate::metadata::{self, MetaTable, PersonMeta};
use crate::types::PersonRecord;
use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Join each token with its metadata and return the ordered roster.
///
/// Output length always equals input length.
pub fn sort_roster(tokens: &[String], table: &MetaTable<PersonMeta>) -> Vec<PersonRecord> {
    let mut records: Vec<PersonRecord> = tokens
        .iter()
        .map(|token| metadata::join_person(token, table))
        .collect();
    records.sort_by(compare_people);
    records
}

/// Tier ascending, then display name under [`collate`].
pub fn compare_people(a: &PersonRecord, b: &PersonRecord) -> Ordering {
    a.tier
        .cmp(&b.tier)
        .then_with(|| collate(&a.display_name, &b.display_name))
}

/// Compare two display names.
///
/// 1. Base letters: decomposed, accents dropped, case-folded
///    (`"Émile"` and `"emile"` are equal at this level).
/// 2. Accents: unaccented before accented.
/// 3. First case difference: lower-case before upper-case.
/// 4. Raw strings, so only identical names compare equal.
///
/// ```text
/// "ann" < "Ann" < "bob" < "Émile" < "Eve" < "Éve" < "Zed"
/// ```
pub fn collate(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| folded(a).cmp(folded(b)))
        .then_with(|| case_order(a, b))
        .then_with(|| a.cmp(b))
}

/// Canonical decomposition, lower-cased. Accents remain as combining marks.
fn folded(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    folded(s).filter(|c| !is_combining_mark(*c))
}

fn case_order(a: &str, b: &str) -> Ordering {
    a.chars()
        .zip(b.chars())
        .find(|(ca, cb)| ca != cb)
        .map(|(ca, cb)| match (ca.is_lowercase(), cb.is_lowercase()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => Ordering::Equal,
        })
        .unwrap_or(Ordering::Equal)
}
