//! Idea analysis engine: suggestions, clusters, summaries, search.
//!
//! DESIGN
//! ======
//! Every operation is a synchronous, pure computation over the snapshot the
//! caller passes in. Tagging is delegated to a `TextAnnotator`; the keyword
//! extractor normalises its output and the consumers (cluster, summary,
//! suggest) only ever see `Keywords`. Search and mood do not touch the
//! annotator at all.
//!
//! ERROR HANDLING
//! ==============
//! Public entry points never fail. Internal computations return
//! `Result<_, AnalysisError>`; the wrappers log the failure and substitute a
//! named fallback constant of the right shape.

pub mod annotator;
pub mod cluster;
pub mod error;
pub mod extract;
pub mod lexicon;
pub mod mood;
pub mod ordered;
pub mod search;
pub mod suggest;
pub mod summary;
pub mod types;

use std::sync::Arc;

use rand::Rng;

pub use annotator::{Annotation, AnnotatorError, LexiconAnnotator, TextAnnotator};
pub use error::AnalysisError;
pub use types::{Board, Card, Cluster, Column, Keywords, Mood, SearchHit, Summary};

// =============================================================================
// ENGINE
// =============================================================================

/// Entry point shared by HTTP handlers. Cheap to clone.
#[derive(Clone)]
pub struct Engine {
    annotator: Arc<dyn TextAnnotator>,
}

impl Engine {
    #[must_use]
    pub fn new(annotator: Arc<dyn TextAnnotator>) -> Self {
        Self { annotator }
    }

    /// Engine backed by the built-in lexicon annotator.
    #[must_use]
    pub fn lexicon() -> Self {
        Self::new(Arc::new(LexiconAnnotator::new()))
    }

    /// Raw keyword extraction.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::Unavailable` if the annotator fails.
    pub fn extract(&self, text: &str) -> Result<Keywords, AnalysisError> {
        extract::extract(self.annotator.as_ref(), text)
    }

    /// Up to three improvement suggestions, sampled with the thread RNG.
    #[must_use]
    pub fn suggest(&self, text: &str) -> Vec<String> {
        self.suggest_with_rng(text, &mut rand::rng())
    }

    pub fn suggest_with_rng<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> Vec<String> {
        suggest::suggest(self.annotator.as_ref(), text, rng)
    }

    #[must_use]
    pub fn cluster(&self, cards: &[Card]) -> Vec<Cluster> {
        cluster::cluster(self.annotator.as_ref(), cards)
    }

    #[must_use]
    pub fn summarize(&self, board: &Board) -> Summary {
        summary::summarize(self.annotator.as_ref(), board)
    }

    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn search(&self, query: &str, cards: &[Card]) -> Vec<SearchHit> {
        search::search(query, cards)
    }

    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn mood(&self, text: &str) -> Mood {
        mood::mood(text)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::lexicon()
    }
}

/// Upper-case the first character only; the rest is left as written.
pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
