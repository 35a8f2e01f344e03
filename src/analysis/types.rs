//! Board snapshot and derived analysis types.
//!
//! Boards arrive from the client as loosely shaped JSON: cards may omit
//! `text` or send `null`, columns may omit `cards`. Deserialization fills
//! those gaps with empty values so the engine never has to.

use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// BOARD SNAPSHOT
// =============================================================================

/// A single idea on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub text: String,
}

impl Card {
    #[must_use]
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self { id: id.into(), text: text.into() }
    }
}

/// An ordered lane of cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default)]
    pub cards: Vec<Card>,
}

/// Full board layout. Card ids are unique across all columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    #[serde(default)]
    pub columns: Vec<Column>,
}

impl Board {
    /// Board handed to users that have never saved one.
    #[must_use]
    pub fn starter() -> Self {
        let column = |id: &str, title: &str| Column { id: id.into(), title: title.into(), cards: Vec::new() };
        Self { columns: vec![column("col-1", "To Do"), column("col-2", "In Progress"), column("col-3", "Done")] }
    }

    /// Cards in column-major, then card order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.columns.iter().flat_map(|c| c.cards.iter())
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// =============================================================================
// DERIVED VIEWS
// =============================================================================

/// Keywords extracted from one text. Order follows the text; duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Keywords {
    pub topics: Vec<String>,
    pub nouns: Vec<String>,
    pub verbs: Vec<String>,
}

impl Keywords {
    /// First topic, or failing that the first noun.
    #[must_use]
    pub fn dominant_topic(&self) -> Option<&str> {
        self.topics.first().or_else(|| self.nouns.first()).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty() && self.nouns.is_empty() && self.verbs.is_empty()
    }
}

/// Cards grouped under one dominant topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cluster {
    pub label: String,
    pub ids: Vec<String>,
}

/// Board-wide overview.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub themes: Vec<String>,
    pub top_ideas: Vec<String>,
    pub next_steps: Vec<String>,
}

/// A card matched by search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub id: String,
    pub text: String,
}

impl From<&Card> for SearchHit {
    fn from(card: &Card) -> Self {
        Self { id: card.id.clone(), text: card.text.clone() }
    }
}

/// Coarse sentiment of a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Positive,
    Negative,
    Neutral,
}

impl Mood {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
