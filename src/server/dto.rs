/*!
 * Request and response DTOs for the HTTP API.
 *
 * These structures define the wire contract. Engine output types that
 * already serialize to the right shape (exposures, questions, results) are
 * embedded directly rather than duplicated.
 */

use serde::{Deserialize, Serialize};

use crate::database::models::{VocabEntry, VocabItemRecord};
use crate::practice::WordExposure;
use crate::quiz::{QuizAnswer, QuizQuestion, QuizResult};

/// Body of `POST /v1/vocab/bulk`
#[derive(Debug, Deserialize)]
pub struct VocabBulkRequest {
    pub session_id: String,
    pub words: Vec<VocabEntry>,
}

/// Response of `POST /v1/vocab/bulk`
#[derive(Debug, Serialize)]
pub struct VocabBulkResponse {
    pub session_id: String,
    pub inserted_count: usize,
}

/// Body of `POST /v1/chat`
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub session_id: String,
    pub message: String,
    /// Accepted and passed through; never validated
    #[serde(default)]
    pub api_key: Option<String>,
}

/// Response of `POST /v1/chat`
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub session_id: String,
    pub reply: String,
    pub exposures: Vec<WordExposure>,
}

/// Body of `POST /v1/quiz/generate`
#[derive(Debug, Deserialize)]
pub struct QuizGenerateRequest {
    pub session_id: String,
    #[serde(default)]
    pub api_key: Option<String>,
}

/// Response of `POST /v1/quiz/generate`
#[derive(Debug, Serialize)]
pub struct QuizGenerateResponse {
    pub session_id: String,
    pub questions: Vec<QuizQuestion>,
}

/// Body of `POST /v1/quiz/submit`
#[derive(Debug, Deserialize)]
pub struct QuizSubmitRequest {
    pub session_id: String,
    pub answers: Vec<QuizAnswer>,
    #[serde(default)]
    pub api_key: Option<String>,
}

/// Response of `POST /v1/quiz/submit`
#[derive(Debug, Serialize)]
pub struct QuizSubmitResponse {
    pub session_id: String,
    pub results: Vec<QuizResult>,
}

/// One word in a session view
#[derive(Debug, Serialize)]
pub struct SessionWord {
    pub target_word: String,
    pub translation: String,
    pub exposure_count: i64,
    pub unlocked: bool,
}

impl From<VocabItemRecord> for SessionWord {
    fn from(item: VocabItemRecord) -> Self {
        Self {
            target_word: item.target_word,
            translation: item.translation,
            exposure_count: item.exposure_count,
            unlocked: item.unlocked,
        }
    }
}

/// Response of `GET /v1/session/{id}`
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session_id: String,
    pub words: Vec<SessionWord>,
}

/// Response of `GET /health`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub service: &'static str,
    pub version: &'static str,
}

/// Error body returned for every failed request
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
