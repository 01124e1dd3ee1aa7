//! Category Deriver
//!
//! Produces the deduplicated category list, sorted ignoring case and
//! accents, either from an explicit source or from the loaded cards.

use std::cmp::Ordering;
use std::collections::HashSet;

use serde_json::Value;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::card::Card;
use crate::error::{CatalogError, CatalogResult};

/// Display label for cards whose trimmed category is empty.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Map a trimmed category value to the label shown to the user.
pub fn display_label(trimmed: &str) -> &str {
    if trimmed.is_empty() {
        UNCATEGORIZED
    } else {
        trimmed
    }
}

/// Base-letter key: NFD, combining marks dropped, lowercased.
///
/// `"Éclair"` and `"eclair"` share the key `"eclair"`.
pub fn sort_key(label: &str) -> String {
    label
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Ordering that ignores case and accents, with a raw-string tiebreak so
/// that equal keys ("A" vs "a", "é" vs "e") still sort deterministically.
pub fn compare_labels(a: &str, b: &str) -> Ordering {
    sort_key(a).cmp(&sort_key(b)).then_with(|| a.cmp(b))
}

/// Trim, dedupe by exact trimmed value, then sort ignoring case and accents.
pub fn dedupe_sort<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut categories: Vec<String> = raw
        .into_iter()
        .map(|s| s.as_ref().trim().to_string())
        .filter(|s| seen.insert(s.clone()))
        .collect();

    categories.sort_by(|a, b| compare_labels(a, b));
    categories
}

/// Distinct trimmed categories across all cards.
///
/// The empty category is kept; it renders as [`UNCATEGORIZED`].
pub fn derive_from_cards(cards: &[Card]) -> Vec<String> {
    dedupe_sort(cards.iter().map(|card| card.trimmed_category()))
}

/// Parse a `/api/categories` payload.
///
/// The payload must be an array; non-string entries are skipped.
pub fn categories_from_json(payload: &Value) -> CatalogResult<Vec<String>> {
    let items = payload.as_array().ok_or_else(|| {
        CatalogError::InvalidShape("categories payload is not an array".to_string())
    })?;

    Ok(dedupe_sort(items.iter().filter_map(Value::as_str)))
}
