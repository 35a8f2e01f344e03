use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;
use crate::analysis::annotator::LexiconAnnotator;
use crate::analysis::annotator::test_helpers::{FailingAnnotator, ScriptedAnnotator};

fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Every phrase reachable for the given actions and concepts, whichever
/// concept the random pick lands on.
fn reachable(topic: Option<&str>, actions: &[&str], concepts: &[&str]) -> HashSet<String> {
    let mut out = HashSet::new();
    if let Some(topic) = topic {
        out.insert(format!("Consider implementing automated {topic} testing"));
        out.insert(format!("Research industry best practices for {topic}"));
    }
    for action in actions {
        for concept in concepts {
            out.insert(format!("{} {concept} through systematic evaluation", capitalize(action)));
        }
    }
    for concept in concepts {
        out.insert(format!("Develop a comprehensive strategy for {concept} management"));
        out.insert(format!("Establish metrics to measure {concept} performance"));
    }
    out
}

fn assert_valid(suggestions: &[String]) {
    assert!((1..=MAX_SUGGESTIONS).contains(&suggestions.len()), "got {suggestions:?}");
    let unique: HashSet<&String> = suggestions.iter().collect();
    assert_eq!(unique.len(), suggestions.len());
    assert!(suggestions.iter().all(|s| !s.trim().is_empty() && s.trim() == s));
}

// =========================================================================
// guidance and fallback
// =========================================================================

#[test]
fn blank_text_returns_guidance() {
    let annotator = LexiconAnnotator::new();
    assert_eq!(suggest(&annotator, "", &mut seeded(1)), [EMPTY_INPUT_GUIDANCE]);
    assert_eq!(suggest(&annotator, " \t\n", &mut seeded(1)), [EMPTY_INPUT_GUIDANCE]);
}

#[test]
fn blank_text_does_not_reach_a_broken_annotator() {
    assert_eq!(suggest(&FailingAnnotator::always(), "", &mut seeded(1)), [EMPTY_INPUT_GUIDANCE]);
}

#[test]
fn annotator_failure_returns_fallback_set() {
    let suggestions = suggest(&FailingAnnotator::always(), "speed up deploys", &mut seeded(7));
    assert_eq!(suggestions, FALLBACK_SUGGESTIONS);
}

// =========================================================================
// sampling
// =========================================================================

#[test]
fn suggestions_come_from_the_keyword_seeded_pool() {
    let annotator =
        ScriptedAnnotator::new().with("speed up CI builds", &["CI"], &["CI", "builds"], &["speed"]);
    let expected = reachable(Some("CI"), &["speed"], &["CI", "builds"]);

    for seed in 0..50 {
        let suggestions = suggest(&annotator, "speed up CI builds", &mut seeded(seed));
        assert_eq!(suggestions.len(), MAX_SUGGESTIONS);
        assert_valid(&suggestions);
        for s in &suggestions {
            assert!(expected.contains(s), "unexpected suggestion {s:?}");
        }
    }
}

#[test]
fn keyword_free_text_uses_stock_actions_and_concepts() {
    let annotator = ScriptedAnnotator::new();
    let expected = reachable(None, &DEFAULT_ACTIONS, &DEFAULT_CONCEPTS);

    for seed in 0..50 {
        let suggestions = suggest(&annotator, "hmm", &mut seeded(seed));
        assert_valid(&suggestions);
        assert!(suggestions.iter().all(|s| expected.contains(s)));
    }
}

#[test]
fn same_seed_same_output() {
    let annotator = LexiconAnnotator::new();
    let text = "Automate the Jenkins release checklist";
    assert_eq!(suggest(&annotator, text, &mut seeded(42)), suggest(&annotator, text, &mut seeded(42)));
}

#[test]
fn lexicon_backed_output_is_always_valid() {
    let annotator = LexiconAnnotator::new();
    for (seed, text) in ["x", "Fix login", "ok so", "We should migrate billing to Stripe next quarter."]
        .into_iter()
        .enumerate()
    {
        assert_valid(&suggest(&annotator, text, &mut seeded(seed as u64)));
    }
}

#[test]
fn thread_rng_is_accepted() {
    let suggestions = suggest(&LexiconAnnotator::new(), "Improve onboarding docs", &mut rand::rng());
    assert_valid(&suggestions);
}

// =========================================================================
// candidate_pool
// =========================================================================

#[test]
fn pool_leads_with_topic_templates() {
    let kw = Keywords { topics: vec!["Kafka".into()], nouns: vec!["Kafka".into()], verbs: vec![] };
    let pool = candidate_pool(&kw, &mut seeded(3));
    assert_eq!(pool[0], "Consider implementing automated Kafka testing");
    assert_eq!(pool[1], "Research industry best practices for Kafka");
    // topic, 5 stock actions, one de-duplicated concept with two phrases
    assert_eq!(pool.len(), 2 + DEFAULT_ACTIONS.len() + 2);
}

#[test]
fn pool_without_topic_skips_topic_templates() {
    let kw = Keywords { topics: vec![], nouns: vec![], verbs: vec!["ship".into()] };
    let pool = candidate_pool(&kw, &mut seeded(3));
    assert!(pool.iter().all(|p| !p.starts_with("Consider implementing automated")));
    assert!(pool[0].starts_with("Ship ") && pool[0].ends_with(" through systematic evaluation"));
    assert_eq!(pool.len(), 1 + DEFAULT_CONCEPTS.len() * 2);
}
