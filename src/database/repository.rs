/*!
 * Repository layer for database operations.
 *
 * This module provides a high-level API for all database operations,
 * abstracting away the SQL details and providing type-safe access.
 */

use anyhow::Result;
use log::debug;
use rusqlite::{params, OptionalExtension, Row};

use super::connection::DatabaseConnection;
use super::models::{SessionRecord, VocabEntry, VocabItemRecord, WordOrder};

/// Repository for database operations
#[derive(Clone)]
pub struct Repository {
    /// Database connection
    db: DatabaseConnection,
}

impl Repository {
    /// Create a new repository with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a repository with the default database location
    pub fn new_default() -> Result<Self> {
        let db = DatabaseConnection::new_default()?;
        Ok(Self::new(db))
    }

    /// Create a repository with an in-memory database (for testing)
    pub fn new_in_memory() -> Result<Self> {
        let db = DatabaseConnection::new_in_memory()?;
        Ok(Self::new(db))
    }

    // =========================================================================
    // Session Operations
    // =========================================================================

    /// Idempotently create a session and touch its updated_at timestamp.
    ///
    /// The insert is ignored when the session already exists; the timestamp
    /// update applies unconditionally, so every reference to a session id
    /// refreshes it. Never fails for an existing session.
    pub async fn ensure_session(&self, session_id: &str) -> Result<()> {
        let record = SessionRecord::new(session_id.to_string());

        self.db
            .transaction_async(move |tx| {
                tx.execute(
                    "INSERT OR IGNORE INTO sessions (id, created_at, updated_at) VALUES (?1, ?2, ?3)",
                    params![record.id, record.created_at, record.updated_at],
                )?;
                tx.execute(
                    "UPDATE sessions SET updated_at = ?1 WHERE id = ?2",
                    params![record.updated_at, record.id],
                )?;
                Ok(())
            })
            .await
    }

    /// Get a session by ID
    pub async fn get_session(&self, session_id: &str) -> Result<Option<SessionRecord>> {
        let session_id = session_id.to_string();

        self.db
            .execute_async(move |conn| {
                let result = conn
                    .query_row(
                        "SELECT id, created_at, updated_at FROM sessions WHERE id = ?1",
                        [&session_id],
                        |row| {
                            Ok(SessionRecord {
                                id: row.get(0)?,
                                created_at: row.get(1)?,
                                updated_at: row.get(2)?,
                            })
                        },
                    )
                    .optional()?;

                Ok(result)
            })
            .await
    }

    // =========================================================================
    // Vocabulary Operations
    // =========================================================================

    /// Insert vocabulary entries for a session, skipping existing words.
    ///
    /// Words and translations are whitespace-trimmed before storage. A word
    /// already present for the session keeps its original translation (first
    /// insert wins). Returns the number of rows actually inserted; skipped
    /// duplicates do not count.
    pub async fn insert_vocab_items(
        &self,
        session_id: &str,
        entries: Vec<VocabEntry>,
    ) -> Result<usize> {
        let session_id = session_id.to_string();

        self.db
            .transaction_async(move |tx| {
                let mut inserted = 0;
                for entry in &entries {
                    let changed = tx.execute(
                        "INSERT OR IGNORE INTO vocab_items (session_id, target_word, translation)
                         VALUES (?1, ?2, ?3)",
                        params![
                            session_id,
                            entry.target_word.trim(),
                            entry.translation.trim()
                        ],
                    )?;
                    inserted += changed;
                }
                debug!(
                    "Inserted {}/{} vocab items for session {}",
                    inserted,
                    entries.len(),
                    session_id
                );
                Ok(inserted)
            })
            .await
    }

    /// List all vocabulary items for a session in the requested order.
    ///
    /// Returns an empty vector when the session has no items; callers decide
    /// whether that is a not-found condition.
    pub async fn list_vocab_items(
        &self,
        session_id: &str,
        order: WordOrder,
    ) -> Result<Vec<VocabItemRecord>> {
        let session_id = session_id.to_string();

        self.db
            .execute_async(move |conn| {
                let sql = format!(
                    "SELECT id, session_id, target_word, translation, exposure_count, unlocked
                     FROM vocab_items
                     WHERE session_id = ?1
                     {}",
                    order.order_by_clause()
                );
                let mut stmt = conn.prepare(&sql)?;

                let rows = stmt.query_map([&session_id], parse_vocab_row)?;
                let items: Vec<VocabItemRecord> = rows.filter_map(|r| r.ok()).collect();
                Ok(items)
            })
            .await
    }

    /// Get a single vocabulary item by its composite key
    pub async fn get_vocab_item(
        &self,
        session_id: &str,
        target_word: &str,
    ) -> Result<Option<VocabItemRecord>> {
        let session_id = session_id.to_string();
        let target_word = target_word.to_string();

        self.db
            .execute_async(move |conn| {
                let result = conn
                    .query_row(
                        "SELECT id, session_id, target_word, translation, exposure_count, unlocked
                         FROM vocab_items
                         WHERE session_id = ?1 AND target_word = ?2",
                        params![session_id, target_word],
                        parse_vocab_row,
                    )
                    .optional()?;

                Ok(result)
            })
            .await
    }

    /// Apply a batch of exposure-count updates in one transaction.
    ///
    /// The caller computes the new counts (old + 1); this just persists them.
    pub async fn set_exposure_counts(
        &self,
        session_id: &str,
        updates: Vec<(String, i64)>,
    ) -> Result<()> {
        let session_id = session_id.to_string();

        self.db
            .transaction_async(move |tx| {
                for (target_word, new_count) in &updates {
                    tx.execute(
                        "UPDATE vocab_items
                         SET exposure_count = ?1
                         WHERE session_id = ?2 AND target_word = ?3",
                        params![new_count, session_id, target_word],
                    )?;
                }
                Ok(())
            })
            .await
    }

    /// Mark a word as unlocked. Idempotent: a word already unlocked stays so.
    pub async fn mark_unlocked(&self, session_id: &str, target_word: &str) -> Result<()> {
        let session_id = session_id.to_string();
        let target_word = target_word.to_string();

        self.db
            .execute_async(move |conn| {
                conn.execute(
                    "UPDATE vocab_items
                     SET unlocked = 1
                     WHERE session_id = ?1 AND target_word = ?2 AND unlocked = 0",
                    params![session_id, target_word],
                )?;
                Ok(())
            })
            .await
    }
}

/// Map a vocab_items row to its record
fn parse_vocab_row(row: &Row) -> rusqlite::Result<VocabItemRecord> {
    Ok(VocabItemRecord {
        id: row.get(0)?,
        session_id: row.get(1)?,
        target_word: row.get(2)?,
        translation: row.get(3)?,
        exposure_count: row.get(4)?,
        unlocked: row.get::<_, i64>(5)? != 0,
    })
}
