/*!
 * Quiz engine: multiple-choice generation and grading.
 *
 * Questions are generated deterministically from the session's vocabulary
 * ordered by target word: each word's distractors are the translations of
 * its two alphabetical neighbours (wrapping around). Choices are not
 * shuffled. Grading compares the selected translation for exact equality
 * and flips the word's unlocked flag on the first correct answer.
 */

use log::debug;
use serde::{Deserialize, Serialize};

use crate::database::models::{VocabItemRecord, WordOrder};
use crate::database::repository::Repository;
use crate::errors::ApiError;

/// A generated multiple-choice question
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    /// The word being tested
    pub target_word: String,
    /// Prompt shown to the learner
    pub prompt: String,
    /// Candidate translations; the correct one comes first
    pub choices: Vec<String>,
}

/// A learner's answer to one question
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizAnswer {
    /// The word being answered
    pub target_word: String,
    /// The translation the learner picked
    pub selected_translation: String,
}

/// Grading outcome for one answer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizResult {
    /// The word that was answered
    pub target_word: String,
    /// Whether the selected translation matched exactly
    pub correct: bool,
    /// Unlocked state after this answer was applied
    pub unlocked: bool,
}

/// Engine generating quiz questions and grading submissions
#[derive(Clone)]
pub struct QuizEngine {
    /// Repository for database operations
    repo: Repository,
}

impl QuizEngine {
    /// Create a new quiz engine with the given repository
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    /// Generate one question per vocabulary word, ordered by target word.
    ///
    /// Fails with not-found when the session has no vocabulary.
    pub async fn generate(&self, session_id: &str) -> Result<Vec<QuizQuestion>, ApiError> {
        let items = self
            .repo
            .list_vocab_items(session_id, WordOrder::Alphabetical)
            .await?;

        if items.is_empty() {
            return Err(ApiError::not_found("No vocab found for session"));
        }

        debug!(
            "Generating {} quiz questions for session {}",
            items.len(),
            session_id
        );
        Ok(build_questions(&items))
    }

    /// Grade a list of answers in input order.
    ///
    /// An answer for a word absent from the session aborts the submission
    /// with not-found naming the word. Unlock flips are persisted per answer
    /// as the loop advances, so answers graded before a failing one keep
    /// their effect. Repeated words are graded repeatedly; the second
    /// occurrence sees the unlocked state left by the first.
    pub async fn submit(
        &self,
        session_id: &str,
        answers: &[QuizAnswer],
    ) -> Result<Vec<QuizResult>, ApiError> {
        let mut results = Vec::with_capacity(answers.len());

        for answer in answers {
            let item = self
                .repo
                .get_vocab_item(session_id, &answer.target_word)
                .await?
                .ok_or_else(|| {
                    ApiError::not_found(format!(
                        "Word not found in session: {}",
                        answer.target_word
                    ))
                })?;

            let correct = answer.selected_translation == item.translation;
            let unlocked = item.unlocked || correct;

            if unlocked && !item.unlocked {
                self.repo
                    .mark_unlocked(session_id, &answer.target_word)
                    .await?;
            }

            results.push(QuizResult {
                target_word: answer.target_word.clone(),
                correct,
                unlocked,
            });
        }

        Ok(results)
    }
}

/// Build the question list for the given words (already ordered by target word)
pub fn build_questions(items: &[VocabItemRecord]) -> Vec<QuizQuestion> {
    let translations: Vec<&str> = items.iter().map(|i| i.translation.as_str()).collect();

    items
        .iter()
        .enumerate()
        .map(|(index, item)| QuizQuestion {
            target_word: item.target_word.clone(),
            prompt: format!("Select translation for '{}'", item.target_word),
            choices: build_choices(index, &translations),
        })
        .collect()
}

/// Assemble the choice list for the word at `index`.
///
/// With a single word there is nothing to distract with and the question
/// degenerates to one choice. Otherwise the next two translations (wrapping)
/// serve as distractors; the second is dropped when it would duplicate an
/// existing choice, which covers both two-word wrap-around and duplicate
/// translations.
fn build_choices(index: usize, translations: &[&str]) -> Vec<String> {
    let correct = translations[index];
    if translations.len() == 1 {
        return vec![correct.to_string()];
    }

    let n = translations.len();
    let distractor_one = translations[(index + 1) % n];
    let distractor_two = translations[(index + 2) % n];

    let mut choices = vec![correct.to_string(), distractor_one.to_string()];
    if !choices.iter().any(|c| c == distractor_two) {
        choices.push(distractor_two.to_string());
    }

    choices
}
