/*!
 * HTTP transport layer.
 *
 * Binds the practice and quiz engines to an axum router. The storage handle
 * is constructed once at startup and cloned into the shared state; handlers
 * receive it through axum's state extractor, so there is no ambient global
 * connection.
 */

use anyhow::{Context, Result};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use log::{error, info};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use crate::app_config::Config;
use crate::database::repository::Repository;
use crate::errors::ApiError;
use crate::practice::PracticeEngine;
use crate::quiz::QuizEngine;
use crate::session::SessionRegistry;

pub mod dto;
pub mod handlers;

use dto::ErrorResponse;

/// Shared state cloned into every handler
#[derive(Clone)]
pub struct AppState {
    /// Storage handle, injected once at startup
    pub repo: Repository,
    /// Session create/touch/query service
    pub registry: SessionRegistry,
    /// Practice ("chat") engine
    pub practice: PracticeEngine,
    /// Quiz generation and grading engine
    pub quiz: QuizEngine,
}

impl AppState {
    /// Build the full engine stack over one storage handle
    pub fn new(repo: Repository) -> Self {
        Self {
            registry: SessionRegistry::new(repo.clone()),
            practice: PracticeEngine::new(repo.clone()),
            quiz: QuizEngine::new(repo.clone()),
            repo,
        }
    }
}

/// Assemble the API router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/v1/vocab/bulk", post(handlers::bulk_vocab))
        .route("/v1/chat", post(handlers::chat))
        .route("/v1/quiz/generate", post(handlers::quiz_generate))
        .route("/v1/quiz/submit", post(handlers::quiz_submit))
        .route("/v1/session/{id}", get(handlers::get_session))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve until a shutdown signal arrives
pub async fn serve(config: &Config, repo: Repository) -> Result<()> {
    let app = router(AppState::new(repo));

    let address = config.server.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    let local_addr = listener.local_addr()?;

    info!("Listening on http://{}", local_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

/// Resolve when the process receives ctrl-c
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(source) => {
                error!("Internal error: {:#}", source);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}
