//! Suggestion generation: keyword-seeded templates, randomly sampled.
//!
//! DESIGN
//! ======
//! A candidate pool is built from the text's keywords (falling back to
//! stock actions and concepts), de-duplicated, shuffled, and cut to three.
//! Output varies between calls on purpose; only membership in the pool,
//! uniqueness and size are stable. The random source is a parameter so
//! tests can seed it.

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use tracing::{debug, warn};

use super::annotator::TextAnnotator;
use super::capitalize;
use super::error::AnalysisError;
use super::extract::extract;
use super::ordered::dedup;
use super::types::Keywords;

pub const MAX_SUGGESTIONS: usize = 3;

pub const EMPTY_INPUT_GUIDANCE: &str = "Please enter some text first to get suggestions.";

/// Returned when the candidate pool comes out empty.
pub const GENERIC_SUGGESTIONS: [&str; 3] = [
    "Consider implementing automated testing procedures",
    "Research industry best practices and standards",
    "Develop a comprehensive evaluation strategy",
];

/// Returned when extraction fails.
pub const FALLBACK_SUGGESTIONS: [&str; 3] =
    ["Consider different approaches", "Analyze potential improvements", "Research similar solutions"];

pub const DEFAULT_ACTIONS: [&str; 5] = ["improve", "optimize", "enhance", "streamline", "automate"];
pub const DEFAULT_CONCEPTS: [&str; 4] = ["process", "system", "workflow", "implementation"];

/// Up to three suggestions for `text`. Never fails.
pub fn suggest<R: Rng + ?Sized>(annotator: &dyn TextAnnotator, text: &str, rng: &mut R) -> Vec<String> {
    match try_suggest(annotator, text, rng) {
        Ok(suggestions) => suggestions,
        Err(AnalysisError::EmptyInput) => vec![EMPTY_INPUT_GUIDANCE.to_owned()],
        Err(e) => {
            warn!(error = %e, "suggest: extraction failed, using fallback");
            owned(&FALLBACK_SUGGESTIONS)
        }
    }
}

fn try_suggest<R: Rng + ?Sized>(
    annotator: &dyn TextAnnotator,
    text: &str,
    rng: &mut R,
) -> Result<Vec<String>, AnalysisError> {
    if text.trim().is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let keywords = extract(annotator, text)?;
    let mut pool = dedup(candidate_pool(&keywords, rng));
    if pool.is_empty() {
        return Ok(owned(&GENERIC_SUGGESTIONS));
    }
    debug!(candidates = pool.len(), "suggest: pool built");

    pool.shuffle(rng);
    Ok(pool
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty())
        .collect())
}

/// Every phrase the generator could return for `keywords`, before
/// de-duplication. Action phrases pair each action with a random concept.
pub fn candidate_pool<R: Rng + ?Sized>(keywords: &Keywords, rng: &mut R) -> Vec<String> {
    let mut pool = Vec::new();

    if let Some(topic) = keywords.dominant_topic() {
        pool.push(format!("Consider implementing automated {topic} testing"));
        pool.push(format!("Research industry best practices for {topic}"));
    }

    let actions = if keywords.verbs.is_empty() { owned(&DEFAULT_ACTIONS) } else { keywords.verbs.clone() };
    let concepts = {
        let found = dedup(keywords.topics.iter().chain(&keywords.nouns).cloned());
        if found.is_empty() { owned(&DEFAULT_CONCEPTS) } else { found }
    };

    for action in &actions {
        if let Some(concept) = concepts.choose(rng) {
            pool.push(format!("{} {concept} through systematic evaluation", capitalize(action)));
        }
    }

    for concept in &concepts {
        pool.push(format!("Develop a comprehensive strategy for {concept} management"));
        pool.push(format!("Establish metrics to measure {concept} performance"));
    }

    pool
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

#[cfg(test)]
#[path = "suggest_test.rs"]
mod tests;
