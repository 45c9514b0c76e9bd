//! Unit tests for the Tabshelf database layer (connection + migrations).

use tabshelf::database::migrations::{get_schema_version, run_all, CURRENT_SCHEMA_VERSION};
use tabshelf::database::Database;
use tempfile::TempDir;

#[test]
fn test_open_in_memory_succeeds() {
    let db = Database::open_in_memory();
    assert!(db.is_ok(), "open_in_memory should succeed");
}

#[test]
fn test_migrations_create_all_tables() {
    let db = Database::open_in_memory().expect("open_in_memory failed");
    let conn = db.connection();

    for table in &["bookmarks", "bookmark_folders", "schema_version"] {
        let exists: bool = conn
            .query_row(
                "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type='table' AND name=?1",
                [table],
                |row| row.get(0),
            )
            .unwrap_or(false);
        assert!(exists, "Table '{}' should exist after migrations", table);
    }
}

#[test]
fn test_migrations_create_indexes() {
    let db = Database::open_in_memory().expect("open_in_memory failed");
    let conn = db.connection();

    for index in &[
        "idx_bookmark_folders_name",
        "idx_bookmark_folders_parent",
        "idx_bookmarks_folder",
    ] {
        let exists: bool = conn
            .query_row(
                "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type='index' AND name=?1",
                [index],
                |row| row.get(0),
            )
            .unwrap_or(false);
        assert!(exists, "Index '{}' should exist after migrations", index);
    }
}

#[test]
fn test_schema_version_is_current() {
    let db = Database::open_in_memory().unwrap();
    assert_eq!(get_schema_version(db.connection()).unwrap(), CURRENT_SCHEMA_VERSION);
}

#[test]
fn test_schema_version_without_table_is_an_error() {
    let conn = rusqlite::Connection::open_in_memory().unwrap();
    assert!(get_schema_version(&conn).is_err());
}

/// An unreadable version must stop migrations instead of re-running them from v1.
#[test]
fn test_unreadable_schema_version_aborts_migrations() {
    let conn = rusqlite::Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE schema_version (version TEXT, applied_at INTEGER, description TEXT);
         INSERT INTO schema_version VALUES ('v-one', 0, 'corrupt');",
    )
    .unwrap();

    assert!(get_schema_version(&conn).is_err());
    assert!(run_all(&conn).is_err());
    let folders: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='bookmark_folders'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(folders, 0);
}

/// Reopening an on-disk database keeps its data and does not re-run migrations.
#[test]
fn test_reopen_on_disk_database() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("nested").join("tabshelf.db");

    {
        let db = Database::open(&path).expect("open should create parent dirs");
        db.connection()
            .execute(
                "INSERT INTO bookmark_folders (id, name, parent_id, position) VALUES ('f1', '2024-03-01', NULL, 0)",
                [],
            )
            .unwrap();
    }

    let db = Database::open(&path).unwrap();
    let conn = db.connection();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM bookmark_folders", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
    let versions: i64 = conn
        .query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))
        .unwrap();
    assert_eq!(versions, CURRENT_SCHEMA_VERSION as i64);
}
