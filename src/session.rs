/*!
 * Session registry for learner session lifecycle.
 *
 * Sessions are identified by opaque, client-supplied strings. The registry
 * creates a session record the first time an id is referenced and refreshes
 * its timestamp on every subsequent reference. Sessions are never deleted.
 */

use log::debug;

use crate::database::models::{SessionRecord, VocabItemRecord, WordOrder};
use crate::database::repository::Repository;
use crate::errors::ApiError;

/// Registry handling session creation, touching, and lookup
#[derive(Clone)]
pub struct SessionRegistry {
    /// Repository for database operations
    repo: Repository,
}

impl SessionRegistry {
    /// Create a new session registry with the given repository
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    /// Idempotently create the session and touch its updated_at timestamp.
    /// Always succeeds for a well-formed id.
    pub async fn touch(&self, session_id: &str) -> Result<(), ApiError> {
        debug!("Touching session {}", session_id);
        self.repo.ensure_session(session_id).await?;
        Ok(())
    }

    /// Look up a session record without creating or touching it
    pub async fn find(&self, session_id: &str) -> Result<Option<SessionRecord>, ApiError> {
        Ok(self.repo.get_session(session_id).await?)
    }

    /// Fetch the full word list for an existing session, in insertion order.
    ///
    /// Fails with not-found when the session was never created; a session
    /// that exists with zero words yields an empty list.
    pub async fn words(&self, session_id: &str) -> Result<Vec<VocabItemRecord>, ApiError> {
        if self.repo.get_session(session_id).await?.is_none() {
            return Err(ApiError::not_found("Session not found"));
        }

        Ok(self
            .repo
            .list_vocab_items(session_id, WordOrder::Insertion)
            .await?)
    }
}
