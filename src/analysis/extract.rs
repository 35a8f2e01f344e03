//! Keyword extraction: annotator output normalised to `Keywords`.

use super::annotator::TextAnnotator;
use super::error::AnalysisError;
use super::types::Keywords;

/// Extract topics, nouns and verbs from `text`.
///
/// Blank text short-circuits to empty keywords without consulting the
/// annotator. Entries are trimmed; entries that trim to nothing are not
/// keywords.
///
/// # Errors
///
/// Returns `AnalysisError::Unavailable` if the annotator fails.
pub fn extract(annotator: &dyn TextAnnotator, text: &str) -> Result<Keywords, AnalysisError> {
    if text.trim().is_empty() {
        return Ok(Keywords::default());
    }

    let annotation = annotator.annotate(text)?;
    Ok(Keywords {
        topics: normalize(annotation.topics),
        nouns: normalize(annotation.nouns),
        verbs: normalize(annotation.verbs),
    })
}

fn normalize(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|item| item.trim().to_owned())
        .filter(|item| !item.is_empty())
        .collect()
}
