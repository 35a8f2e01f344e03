//! Card search: case-insensitive substring match.
//!
//! Independent of keyword extraction, so it keeps working when the
//! annotator is down.

use super::types::{Card, SearchHit};

/// Cards whose text contains `query`, ignoring case, in input order.
/// An empty query matches nothing.
#[must_use]
pub fn search(query: &str, cards: &[Card]) -> Vec<SearchHit> {
    if query.is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    cards
        .iter()
        .filter(|card| card.text.to_lowercase().contains(&needle))
        .map(SearchHit::from)
        .collect()
}
