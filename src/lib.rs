/*!
 * # clozecoach
 *
 * A small language-learning backend. It stores vocabulary words per learner
 * session, simulates chat practice that progressively cloze-masks words the
 * learner has seen before, generates multiple-choice quizzes from stored
 * vocabulary, and tracks per-word unlocked state once a learner answers
 * correctly.
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `database`: SQLite persistence layer:
 *   - `database::connection`: Connection management and async access
 *   - `database::schema`: Versioned schema initialization
 *   - `database::repository`: Type-safe store operations
 * - `session`: Session registry (create-if-absent, touch, query)
 * - `practice`: Practice engine with exposure-driven cloze masking
 * - `quiz`: Quiz generation and grading
 * - `server`: HTTP transport (axum)
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod database;
pub mod errors;
pub mod practice;
pub mod quiz;
pub mod server;
pub mod session;

// Re-export main types for easier usage
pub use app_config::Config;
pub use database::repository::Repository;
pub use errors::ApiError;
pub use practice::{PracticeEngine, CLOZE_MASK};
pub use quiz::QuizEngine;
pub use session::SessionRegistry;
