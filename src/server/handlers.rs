/*!
 * HTTP handlers binding requests to the engines.
 *
 * Each POST handler validates its payload before any store access, then
 * ensures the session exists (creating it on first reference) and delegates
 * to the matching engine. The session GET is read-only and neither creates
 * nor touches the session.
 */

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use log::debug;

use crate::errors::ApiError;

use super::dto::{
    ChatRequest, ChatResponse, HealthResponse, QuizGenerateRequest, QuizGenerateResponse,
    QuizSubmitRequest, QuizSubmitResponse, SessionResponse, SessionWord, VocabBulkRequest,
    VocabBulkResponse,
};
use super::AppState;

/// Header carrying the pass-through API key
const API_KEY_HEADER: &str = "x-api-key";

/// Resolve the effective API key: the payload value wins over the header.
///
/// The key is an opaque pass-through with no authentication semantics; it is
/// resolved only so the precedence rule stays observable.
fn resolve_api_key(payload_key: Option<String>, headers: &HeaderMap) -> Option<String> {
    payload_key.or_else(|| {
        headers
            .get(API_KEY_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string())
    })
}

/// Reject a field that is empty after trimming
fn require_non_empty(value: &str, field: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::validation(format!("{} must not be empty", field)));
    }
    Ok(())
}

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// `POST /v1/vocab/bulk`
pub async fn bulk_vocab(
    State(state): State<AppState>,
    Json(request): Json<VocabBulkRequest>,
) -> Result<Json<VocabBulkResponse>, ApiError> {
    require_non_empty(&request.session_id, "session_id")?;
    for entry in &request.words {
        require_non_empty(&entry.target_word, "target_word")?;
        require_non_empty(&entry.translation, "translation")?;
    }

    state.registry.touch(&request.session_id).await?;
    let inserted_count = state
        .repo
        .insert_vocab_items(&request.session_id, request.words)
        .await?;

    Ok(Json(VocabBulkResponse {
        session_id: request.session_id,
        inserted_count,
    }))
}

/// `POST /v1/chat`
pub async fn chat(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    require_non_empty(&request.session_id, "session_id")?;
    require_non_empty(&request.message, "message")?;

    let api_key = resolve_api_key(request.api_key, &headers);
    debug!("Chat request (api key supplied: {})", api_key.is_some());

    state.registry.touch(&request.session_id).await?;
    let round = state.practice.run_round(&request.session_id).await?;

    Ok(Json(ChatResponse {
        session_id: request.session_id,
        reply: round.reply,
        exposures: round.exposures,
    }))
}

/// `POST /v1/quiz/generate`
pub async fn quiz_generate(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<QuizGenerateRequest>,
) -> Result<Json<QuizGenerateResponse>, ApiError> {
    require_non_empty(&request.session_id, "session_id")?;

    let api_key = resolve_api_key(request.api_key, &headers);
    debug!("Quiz generation (api key supplied: {})", api_key.is_some());

    state.registry.touch(&request.session_id).await?;
    let questions = state.quiz.generate(&request.session_id).await?;

    Ok(Json(QuizGenerateResponse {
        session_id: request.session_id,
        questions,
    }))
}

/// `POST /v1/quiz/submit`
pub async fn quiz_submit(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<QuizSubmitRequest>,
) -> Result<Json<QuizSubmitResponse>, ApiError> {
    require_non_empty(&request.session_id, "session_id")?;

    let api_key = resolve_api_key(request.api_key, &headers);
    debug!("Quiz submission (api key supplied: {})", api_key.is_some());

    state.registry.touch(&request.session_id).await?;
    let results = state
        .quiz
        .submit(&request.session_id, &request.answers)
        .await?;

    Ok(Json(QuizSubmitResponse {
        session_id: request.session_id,
        results,
    }))
}

/// `GET /v1/session/{id}`
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionResponse>, ApiError> {
    let words = state.registry.words(&id).await?;

    Ok(Json(SessionResponse {
        session_id: id,
        words: words.into_iter().map(SessionWord::from).collect(),
    }))
}
