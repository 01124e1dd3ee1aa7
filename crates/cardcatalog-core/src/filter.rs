//! Filter Engine
//!
//! Pure predicate over the full card set. Each call filters from scratch, so
//! repeated calls with the same arguments are idempotent.

use crate::card::Card;

/// Normalize what the user typed into the stored search term.
pub fn normalize_search(raw: &str) -> String {
    raw.to_lowercase().trim().to_string()
}

/// Whether a single card passes the category and search predicates.
///
/// `search_term` is expected to be normalized already (see [`normalize_search`]).
pub fn matches(card: &Card, active_category: Option<&str>, search_term: &str) -> bool {
    if let Some(active) = active_category {
        if card.trimmed_category() != active {
            return false;
        }
    }

    if search_term.is_empty() {
        return true;
    }

    let haystack = format!("{} {} {}", card.question, card.answer, card.category).to_lowercase();
    haystack.contains(search_term)
}

/// Compute the visible subset of `cards`, preserving load order.
pub fn filter_cards(cards: &[Card], active_category: Option<&str>, search_term: &str) -> Vec<Card> {
    cards
        .iter()
        .filter(|card| matches(card, active_category, search_term))
        .cloned()
        .collect()
}
