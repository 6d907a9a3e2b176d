/*!
 * Database entity models and DTOs.
 *
 * These structures map directly to database tables and provide
 * type-safe access to persisted data.
 */

use serde::{Deserialize, Serialize};

/// Ordering for vocabulary listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordOrder {
    /// Insertion order (ascending row id) - used for chat and session views
    Insertion,
    /// Lexicographic by target word - used for quiz generation
    Alphabetical,
}

impl WordOrder {
    /// The ORDER BY clause implementing this ordering
    pub fn order_by_clause(&self) -> &'static str {
        match self {
            WordOrder::Insertion => "ORDER BY id ASC",
            WordOrder::Alphabetical => "ORDER BY target_word ASC",
        }
    }
}

/// Learner session record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Opaque, client-supplied session identifier
    pub id: String,
    /// Creation timestamp (ISO 8601)
    pub created_at: String,
    /// Last update timestamp (ISO 8601), touched on every reference
    pub updated_at: String,
}

impl SessionRecord {
    /// Create a new session record stamped with the current time
    pub fn new(id: String) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

/// A vocabulary word with its learning state, as persisted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabItemRecord {
    /// Database ID (carries insertion order)
    pub id: i64,
    /// Session this word belongs to
    pub session_id: String,
    /// The word being learned
    pub target_word: String,
    /// Its translation, fixed at first insert
    pub translation: String,
    /// Number of times the word has appeared in practice output
    pub exposure_count: i64,
    /// Whether the learner has answered this word correctly in a quiz.
    /// Once true it never reverts.
    pub unlocked: bool,
}

/// Input for a bulk vocabulary insert
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabEntry {
    /// The word to learn
    pub target_word: String,
    /// Its translation
    pub translation: String,
}

impl VocabEntry {
    pub fn new<S: Into<String>>(target_word: S, translation: S) -> Self {
        Self {
            target_word: target_word.into(),
            translation: translation.into(),
        }
    }
}
