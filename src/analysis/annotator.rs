//! Text annotator: topic/noun/verb tagging behind a trait.
//!
//! DESIGN
//! ======
//! The engine never tags text itself. It asks a `TextAnnotator` for the
//! topics, nouns and verbs of a string and builds everything else on top.
//! `LexiconAnnotator` is the in-process default: a word-list tagger that is
//! deterministic and never fails. Swapping in another backend (a remote NLP
//! service, a model) changes keyword quality, never the engine's contracts.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use super::lexicon::{BASE_VERBS, STOPWORDS};

static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z][A-Za-z0-9]*(?:['’-][A-Za-z0-9]+)*").expect("token pattern compiles"));

// =============================================================================
// TYPES
// =============================================================================

/// Raw annotator output for one text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotation {
    pub topics: Vec<String>,
    pub nouns: Vec<String>,
    pub verbs: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum AnnotatorError {
    #[error("annotator backend failed: {0}")]
    Backend(String),
    #[error("annotator timed out")]
    Timeout,
}

/// Linguistic backend consumed by the analysis engine.
///
/// Implementations must accept empty, short and malformed text; an empty
/// `Annotation` is a valid answer, not an error.
pub trait TextAnnotator: Send + Sync {
    /// Tag one text.
    ///
    /// # Errors
    ///
    /// Returns an error only when the backend itself is unavailable.
    fn annotate(&self, text: &str) -> Result<Annotation, AnnotatorError>;
}

// =============================================================================
// LEXICON ANNOTATOR
// =============================================================================

/// Word-list tagger.
///
/// - verbs: tokens whose base form is in the verb lexicon (`fixes`,
///   `automated`, `planning` all resolve)
/// - topics: acronyms, hyphenated compounds, and capitalised words that do
///   not open a sentence
/// - nouns: every topic plus remaining content words of three letters or more
///
/// Stopwords are never tagged. Output follows token order and keeps repeats.
pub struct LexiconAnnotator {
    stopwords: HashSet<&'static str>,
    verbs: HashSet<&'static str>,
}

impl LexiconAnnotator {
    #[must_use]
    pub fn new() -> Self {
        Self { stopwords: STOPWORDS.iter().copied().collect(), verbs: BASE_VERBS.iter().copied().collect() }
    }

    fn is_verb(&self, lower: &str) -> bool {
        self.verbs.contains(lower) || base_forms(lower).iter().any(|base| self.verbs.contains(base.as_str()))
    }
}

impl Default for LexiconAnnotator {
    fn default() -> Self {
        Self::new()
    }
}

impl TextAnnotator for LexiconAnnotator {
    fn annotate(&self, text: &str) -> Result<Annotation, AnnotatorError> {
        let mut out = Annotation::default();
        let mut prev_end = 0;

        for (index, m) in TOKEN.find_iter(text).enumerate() {
            let sentence_start = index == 0 || text[prev_end..m.start()].contains(['.', '!', '?', '\n']);
            prev_end = m.end();

            let word = strip_possessive(m.as_str());
            let lower = word.to_lowercase().replace('’', "'");
            if self.stopwords.contains(lower.as_str()) {
                continue;
            }
            if self.is_verb(&lower) {
                out.verbs.push(lower);
                continue;
            }
            if is_acronym(word) || word.contains('-') || (is_capitalised(word) && !sentence_start) {
                out.topics.push(word.to_owned());
                out.nouns.push(word.to_owned());
                continue;
            }
            if lower.chars().count() >= 3 {
                out.nouns.push(lower);
            }
        }

        Ok(out)
    }
}

fn strip_possessive(word: &str) -> &str {
    word.strip_suffix("'s").or_else(|| word.strip_suffix("’s")).unwrap_or(word)
}

fn is_capitalised(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase) && word.chars().any(char::is_lowercase)
}

fn is_acronym(word: &str) -> bool {
    let letters: Vec<char> = word.chars().filter(|c| c.is_alphabetic()).collect();
    letters.len() >= 2 && letters.iter().all(|c| c.is_uppercase())
}

/// Candidate base forms for an inflected, lowercased word.
fn base_forms(lower: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut push = |stem: &str| {
        if stem.len() >= 2 {
            out.push(stem.to_owned());
        }
    };

    if let Some(stem) = lower.strip_suffix("ies").or_else(|| lower.strip_suffix("ied")) {
        push(&format!("{stem}y"));
    }
    for suffix in ["ing", "ed"] {
        if let Some(stem) = lower.strip_suffix(suffix) {
            push(stem);
            push(&format!("{stem}e"));
            if let Some(undoubled) = undouble(stem) {
                push(undoubled);
            }
        }
    }
    if let Some(stem) = lower.strip_suffix("es") {
        push(stem);
    }
    if let Some(stem) = lower.strip_suffix('s') {
        push(stem);
    }
    out
}

/// `plann` -> `plan`, `shipp` -> `ship`.
fn undouble(stem: &str) -> Option<&str> {
    let mut chars = stem.chars().rev();
    let (last, prev) = (chars.next()?, chars.next()?);
    (last == prev && !"aeiou".contains(last)).then(|| &stem[..stem.len() - last.len_utf8()])
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "annotator_test.rs"]
mod tests;
