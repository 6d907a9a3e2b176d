/*!
 * Tests for on-disk persistence across connection lifecycles.
 */

use clozecoach::database::connection::DatabaseConnection;
use clozecoach::database::models::{VocabEntry, WordOrder};
use clozecoach::Repository;

/// Data written through one connection is visible after reopening the file
#[tokio::test]
async fn test_persistence_acrossReopen_shouldKeepData() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = dir.path().join("vocab.db");

    {
        let repo = Repository::new(DatabaseConnection::new(&db_path).unwrap());
        repo.ensure_session("s1").await.unwrap();
        repo.insert_vocab_items(
            "s1",
            vec![
                VocabEntry::new("hola", "hello"),
                VocabEntry::new("adios", "goodbye"),
            ],
        )
        .await
        .unwrap();
        repo.mark_unlocked("s1", "hola").await.unwrap();
    }

    // Reopen: schema init must be idempotent and the data intact
    let repo = Repository::new(DatabaseConnection::new(&db_path).unwrap());

    let session = repo.get_session("s1").await.unwrap();
    assert!(session.is_some());

    let items = repo
        .list_vocab_items("s1", WordOrder::Insertion)
        .await
        .unwrap();
    assert_eq!(items.len(), 2);
    assert!(items[0].unlocked);
    assert!(!items[1].unlocked);
}

/// Foreign keys are enforced on reopened connections too, not only on the
/// connection that created the schema
#[test]
fn test_foreignKeys_afterReopen_shouldStillBeEnforced() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = dir.path().join("vocab.db");

    {
        DatabaseConnection::new(&db_path).expect("Failed to create database");
    }

    let connection = DatabaseConnection::new(&db_path).expect("Failed to reopen database");
    let result = connection.execute(|conn| {
        conn.execute(
            "INSERT INTO vocab_items (session_id, target_word, translation)
             VALUES ('ghost', 'hola', 'hello')",
            [],
        )?;
        Ok(())
    });

    assert!(result.is_err(), "Orphan vocab insert should be rejected");
}

/// Stats reflect the stored state
#[tokio::test]
async fn test_stats_withStoredWords_shouldCountThem() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = dir.path().join("vocab.db");

    let connection = DatabaseConnection::new(&db_path).unwrap();
    let repo = Repository::new(connection.clone());

    repo.ensure_session("s1").await.unwrap();
    repo.insert_vocab_items(
        "s1",
        vec![
            VocabEntry::new("hola", "hello"),
            VocabEntry::new("adios", "goodbye"),
        ],
    )
    .await
    .unwrap();
    repo.mark_unlocked("s1", "adios").await.unwrap();

    let stats = connection.stats().unwrap();
    assert_eq!(stats.session_count, 1);
    assert_eq!(stats.word_count, 2);
    assert_eq!(stats.unlocked_count, 1);
    assert!(stats.file_size_bytes > 0);
}
