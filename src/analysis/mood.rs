//! Mood: coarse sentiment from cue words.
//!
//! Cues match as substrings of the lowercased text, so `improvements` counts
//! as positive. Positive cues win over negative ones.

use std::sync::LazyLock;

use regex::Regex;

use super::types::Mood;

static POSITIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("good|great|love|happy|excited|improve|enhance|success").expect("positive cue pattern compiles")
});
static NEGATIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("bad|angry|hate|sad|problem|fail|error|issue").expect("negative cue pattern compiles")
});

#[must_use]
pub fn mood(text: &str) -> Mood {
    let lower = text.to_lowercase();
    if POSITIVE.is_match(&lower) {
        Mood::Positive
    } else if NEGATIVE.is_match(&lower) {
        Mood::Negative
    } else {
        Mood::Neutral
    }
}
