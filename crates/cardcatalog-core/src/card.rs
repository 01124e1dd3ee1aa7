//! Card Normalizer
//!
//! Converts loosely-typed JSON records into the canonical [`Card`] shape.
//! Normalization never fails: missing or malformed fields degrade to empty
//! values.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Keys tried, in order, for the question text.
const QUESTION_KEYS: &[&str] = &["question", "q", "front"];

/// Keys tried, in order, for the answer text.
const ANSWER_KEYS: &[&str] = &["answer", "a", "back"];

/// A single question/answer entry in the catalog.
///
/// Cards are immutable once normalized; the catalog keeps them in load order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub question: String,
    pub answer: String,
    /// Raw category as delivered by the source (may carry whitespace).
    pub category: String,
    pub tags: Vec<String>,
}

impl Card {
    /// Create a card from already-clean values.
    pub fn new(question: impl Into<String>, answer: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            category: category.into(),
            tags: Vec::new(),
        }
    }

    /// Builder-style tag assignment.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// The category value used for filtering.
    pub fn trimmed_category(&self) -> &str {
        self.category.trim()
    }

    /// Normalize one raw record.
    ///
    /// Non-object records produce an all-empty card.
    pub fn from_raw(raw: &Value) -> Self {
        let Some(obj) = raw.as_object() else {
            return Self::default();
        };

        Self {
            question: first_present(obj, QUESTION_KEYS).map(text_of).unwrap_or_default(),
            answer: first_present(obj, ANSWER_KEYS).map(text_of).unwrap_or_default(),
            category: first_present(obj, &["category"]).map(text_of).unwrap_or_default(),
            tags: first_present(obj, &["tags"]).map(tags_of).unwrap_or_default(),
        }
    }
}

/// Normalize a raw payload into cards.
///
/// Accepts an array of records, a single record, or `null`.
pub fn normalize_cards(raw: &Value) -> Vec<Card> {
    match raw {
        Value::Null => Vec::new(),
        Value::Array(records) => records.iter().map(Card::from_raw).collect(),
        single => vec![Card::from_raw(single)],
    }
}

/// First key whose value is present. An empty string counts as present.
fn first_present<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .find_map(|key| obj.get(*key).filter(|value| !value.is_null()))
}

fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

fn tags_of(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter(|item| !item.is_null())
            .map(text_of)
            .collect(),
        Value::String(s) if !s.is_empty() => vec![s.clone()],
        _ => Vec::new(),
    }
}
