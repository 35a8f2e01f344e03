//! Analysis error taxonomy.
//!
//! These never reach engine callers: every public entry point swaps a failure
//! for a documented fallback value. They exist so the internal computations
//! can use `?` and so fallbacks can be logged with a reason.

use super::annotator::AnnotatorError;

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("analysis unavailable: {0}")]
    Unavailable(#[from] AnnotatorError),
    #[error("empty input")]
    EmptyInput,
}
