//! Topic clustering: group cards by dominant topic.
//!
//! DESIGN
//! ======
//! Each card's label is its first topic, else its first noun, else `Other`.
//! Clusters appear in the order their label is first seen. Cards are assigned
//! by position, so every input card lands in exactly one cluster even when
//! two cards share the same text.
//!
//! If any extraction fails the whole board collapses into one `All Items`
//! cluster; the panel always gets something to render.

use std::collections::HashMap;

use tracing::warn;

use super::annotator::TextAnnotator;
use super::error::AnalysisError;
use super::extract::extract;
use super::types::{Card, Cluster};

pub const OTHER_LABEL: &str = "Other";
pub const FALLBACK_LABEL: &str = "All Items";

/// Cluster `cards` by dominant topic, falling back to a single cluster.
#[must_use]
pub fn cluster(annotator: &dyn TextAnnotator, cards: &[Card]) -> Vec<Cluster> {
    try_cluster(annotator, cards).unwrap_or_else(|e| {
        warn!(error = %e, cards = cards.len(), "cluster: extraction failed, using fallback");
        fallback_clusters(cards)
    })
}

/// Single cluster holding every card.
#[must_use]
pub fn fallback_clusters(cards: &[Card]) -> Vec<Cluster> {
    vec![Cluster { label: FALLBACK_LABEL.into(), ids: cards.iter().map(|c| c.id.clone()).collect() }]
}

fn try_cluster(annotator: &dyn TextAnnotator, cards: &[Card]) -> Result<Vec<Cluster>, AnalysisError> {
    let mut clusters: Vec<Cluster> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();

    for card in cards {
        let keywords = extract(annotator, &card.text)?;
        let label = keywords.dominant_topic().unwrap_or(OTHER_LABEL);

        match slots.get(label) {
            Some(&slot) => clusters[slot].ids.push(card.id.clone()),
            None => {
                slots.insert(label.to_owned(), clusters.len());
                clusters.push(Cluster { label: label.to_owned(), ids: vec![card.id.clone()] });
            }
        }
    }

    Ok(clusters)
}

#[cfg(test)]
#[path = "cluster_test.rs"]
mod tests;
