/*!
 * Practice engine ("chat").
 *
 * Each practice round walks the session's vocabulary in insertion order and
 * decides, per word, whether to show it in full or cloze-mask it. The first
 * exposure is always shown; from the second exposure onward the word is
 * masked unless the learner has already unlocked it via a correct quiz
 * answer. Every round increments every word's exposure count, including
 * words that are already unlocked.
 */

use log::debug;
use serde::{Deserialize, Serialize};

use crate::database::models::{VocabItemRecord, WordOrder};
use crate::database::repository::Repository;
use crate::errors::ApiError;

/// Placeholder substituted for a masked word
pub const CLOZE_MASK: &str = "[____]";

/// One word's appearance in a practice round
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordExposure {
    /// The word being practiced
    pub target_word: String,
    /// The word as shown to the learner (the word itself or the cloze mask)
    pub rendered_word: String,
    /// Exposure count after this round
    pub exposure_count: i64,
    /// Whether the word was masked this round
    pub lock: bool,
    /// Unlocked state before this round; practice never changes it
    pub unlocked: bool,
}

/// The assembled output of one practice round
#[derive(Debug, Clone)]
pub struct PracticeRound {
    /// Human-readable practice line, e.g. `Practice: hola (hello), [____] (goodbye)`
    pub reply: String,
    /// Per-word exposure records, in insertion order
    pub exposures: Vec<WordExposure>,
}

/// Engine computing practice rounds and persisting exposure counts
#[derive(Clone)]
pub struct PracticeEngine {
    /// Repository for database operations
    repo: Repository,
}

impl PracticeEngine {
    /// Create a new practice engine with the given repository
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    /// Run one practice round for a session.
    ///
    /// Fails with not-found when the session has no vocabulary; an empty
    /// reply is never produced. The incremented exposure counts are
    /// persisted as a single batch after rendering.
    pub async fn run_round(&self, session_id: &str) -> Result<PracticeRound, ApiError> {
        let items = self
            .repo
            .list_vocab_items(session_id, WordOrder::Insertion)
            .await?;

        if items.is_empty() {
            return Err(ApiError::not_found("No vocab found for session"));
        }

        let round = render_round(&items);
        debug!(
            "Practice round for session {}: {} words, {} masked",
            session_id,
            round.exposures.len(),
            round.exposures.iter().filter(|e| e.lock).count()
        );

        let updates: Vec<(String, i64)> = round
            .exposures
            .iter()
            .map(|e| (e.target_word.clone(), e.exposure_count))
            .collect();
        self.repo.set_exposure_counts(session_id, updates).await?;

        Ok(round)
    }
}

/// Render one practice round from the current word records.
///
/// Pure function: computes next exposure counts and cloze decisions without
/// touching the store. A word is masked when its next exposure is at least
/// the second one and it has not been unlocked.
pub fn render_round(items: &[VocabItemRecord]) -> PracticeRound {
    let mut exposures = Vec::with_capacity(items.len());
    let mut reply_parts = Vec::with_capacity(items.len());

    for item in items {
        let next_exposure = item.exposure_count + 1;
        let lock = next_exposure >= 2 && !item.unlocked;
        let rendered = if lock {
            CLOZE_MASK.to_string()
        } else {
            item.target_word.clone()
        };

        reply_parts.push(format!("{} ({})", rendered, item.translation));
        exposures.push(WordExposure {
            target_word: item.target_word.clone(),
            rendered_word: rendered,
            exposure_count: next_exposure,
            lock,
            unlocked: item.unlocked,
        });
    }

    PracticeRound {
        reply: format!("Practice: {}", reply_parts.join(", ")),
        exposures,
    }
}
