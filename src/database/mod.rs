/*!
 * Database layer for vocabulary and session persistence.
 *
 * This module provides SQLite-based storage with:
 * - Connection management with async-safe access patterns
 * - Versioned schema initialization and migration
 * - Entity models for sessions and vocabulary items
 * - Repository pattern for type-safe data access
 */

pub mod connection;
pub mod models;
pub mod repository;
pub mod schema;

pub use connection::{DatabaseConnection, DatabaseStats};
pub use models::{SessionRecord, VocabEntry, VocabItemRecord, WordOrder};
pub use repository::Repository;
