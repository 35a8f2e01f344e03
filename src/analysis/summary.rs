//! Board summary: themes, ranked top ideas, next steps.
//!
//! DESIGN
//! ======
//! 1. Flatten card texts column-major.
//! 2. Extract keywords once per text (blank texts give empty keywords).
//! 3. Themes: topics and nouns pooled into one insertion-ordered counter,
//!    ranked by frequency with first-seen tie-break, top 4. All topics of
//!    the board are counted before any noun.
//! 4. Top ideas: non-blank texts scored `2*topics + nouns + 1.5*verbs`,
//!    stable descending sort, top 4 raw texts.
//! 5. Next steps: four fixed-shape lines, the first two seeded by the top
//!    theme and the most frequent verb.
//!
//! ERROR HANDLING
//! ==============
//! Any extraction failure replaces the whole summary with
//! `fallback_summary`, which ignores scoring but keeps the shape.

use tracing::{debug, warn};

use super::annotator::TextAnnotator;
use super::capitalize;
use super::error::AnalysisError;
use super::extract::extract;
use super::ordered::OrderedCounter;
use super::types::{Board, Keywords, Summary};

pub const MAX_THEMES: usize = 4;
pub const MAX_TOP_IDEAS: usize = 4;

const TOPIC_WEIGHT: f64 = 2.0;
const NOUN_WEIGHT: f64 = 1.0;
const VERB_WEIGHT: f64 = 1.5;

const DEFAULT_THEME: &str = "key themes";
const DEFAULT_PRIORITY_STEP: &str = "Prioritize top ideas";
pub const PLAN_STEP: &str = "Create detailed action plans for implementation";
pub const REVIEW_STEP: &str = "Schedule follow-up reviews and track progress";

pub const FALLBACK_THEMES: [&str; 3] = ["Innovation", "Efficiency", "Quality"];
pub const FALLBACK_NEXT_STEPS: [&str; 3] = ["Review and analyze", "Create action plan", "Schedule follow-up"];
pub const FALLBACK_TOP_IDEAS: usize = 5;

/// Summarize `board`, falling back to a generic summary on failure.
#[must_use]
pub fn summarize(annotator: &dyn TextAnnotator, board: &Board) -> Summary {
    try_summarize(annotator, board).unwrap_or_else(|e| {
        warn!(error = %e, "summarize: extraction failed, using fallback");
        fallback_summary(board)
    })
}

/// Generic summary: placeholder themes, the first cards unscored.
#[must_use]
pub fn fallback_summary(board: &Board) -> Summary {
    Summary {
        themes: FALLBACK_THEMES.iter().map(ToString::to_string).collect(),
        top_ideas: board.cards().take(FALLBACK_TOP_IDEAS).map(|c| c.text.clone()).collect(),
        next_steps: FALLBACK_NEXT_STEPS.iter().map(ToString::to_string).collect(),
    }
}

fn try_summarize(annotator: &dyn TextAnnotator, board: &Board) -> Result<Summary, AnalysisError> {
    let texts: Vec<&str> = board.cards().map(|c| c.text.as_str()).collect();
    let keywords = texts
        .iter()
        .map(|text| extract(annotator, text))
        .collect::<Result<Vec<_>, _>>()?;

    // Every topic on the board is seen before any noun, so equal counts
    // rank topics first.
    let mut terms = OrderedCounter::new();
    terms.extend(keywords.iter().flat_map(|kw| &kw.topics).map(String::as_str));
    terms.extend(keywords.iter().flat_map(|kw| &kw.nouns).map(String::as_str));
    let mut verbs = OrderedCounter::new();
    verbs.extend(keywords.iter().flat_map(|kw| &kw.verbs).map(String::as_str));

    let themes: Vec<String> = terms
        .ranked()
        .into_iter()
        .take(MAX_THEMES)
        .map(|term| (*term).to_owned())
        .collect();

    let mut scored: Vec<(&str, f64)> = texts
        .iter()
        .zip(&keywords)
        .filter(|(text, _)| !text.trim().is_empty())
        .map(|(text, kw)| (*text, score(kw)))
        .collect();
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    let top_ideas: Vec<String> = scored
        .into_iter()
        .take(MAX_TOP_IDEAS)
        .map(|(text, _)| text.to_owned())
        .collect();

    let next_steps = vec![
        format!("Analyze and expand on {}", themes.first().map_or(DEFAULT_THEME, String::as_str)),
        verbs.most_common().map_or_else(
            || DEFAULT_PRIORITY_STEP.to_owned(),
            |verb| format!("{} the prioritized ideas", capitalize(verb)),
        ),
        PLAN_STEP.to_owned(),
        REVIEW_STEP.to_owned(),
    ];

    debug!(cards = texts.len(), themes = themes.len(), ideas = top_ideas.len(), "summarize: done");
    Ok(Summary { themes, top_ideas, next_steps })
}

/// Keyword richness of one text.
#[allow(clippy::cast_precision_loss)]
fn score(kw: &Keywords) -> f64 {
    TOPIC_WEIGHT * kw.topics.len() as f64 + NOUN_WEIGHT * kw.nouns.len() as f64 + VERB_WEIGHT * kw.verbs.len() as f64
}

#[cfg(test)]
#[path = "summary_test.rs"]
mod tests;
