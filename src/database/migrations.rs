//! Versioned schema for the bookmark store.
//!
//! Applied steps are recorded in `schema_version`; opening a database only
//! runs the steps above the recorded maximum.

use rusqlite::{params, Connection};

struct Migration {
    version: i32,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        description: "Bookmark folders and bookmarks",
        sql: "
            CREATE TABLE IF NOT EXISTS bookmark_folders (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                parent_id TEXT REFERENCES bookmark_folders(id),
                position INTEGER NOT NULL DEFAULT 0
            );
            CREATE TABLE IF NOT EXISTS bookmarks (
                id TEXT PRIMARY KEY,
                url TEXT NOT NULL,
                title TEXT NOT NULL,
                folder_id TEXT REFERENCES bookmark_folders(id),
                position INTEGER NOT NULL DEFAULT 0,
                created_at INTEGER NOT NULL
            );",
    },
    Migration {
        version: 2,
        description: "Lookup indexes for folder titles and children",
        sql: "
            CREATE INDEX IF NOT EXISTS idx_bookmark_folders_name ON bookmark_folders(name);
            CREATE INDEX IF NOT EXISTS idx_bookmark_folders_parent ON bookmark_folders(parent_id);
            CREATE INDEX IF NOT EXISTS idx_bookmarks_folder ON bookmarks(folder_id);",
    },
];

/// Highest version in [`MIGRATIONS`].
pub const CURRENT_SCHEMA_VERSION: i32 = MIGRATIONS[MIGRATIONS.len() - 1].version;

/// Highest applied version, or 0 when `schema_version` is empty.
///
/// # Errors
/// Fails if the `schema_version` table is missing or cannot be read.
pub fn get_schema_version(conn: &Connection) -> Result<i32, rusqlite::Error> {
    conn.query_row("SELECT COALESCE(MAX(version), 0) FROM schema_version", [], |row| row.get(0))
}

/// Brings the schema up to [`CURRENT_SCHEMA_VERSION`].
///
/// # Errors
/// Returns `rusqlite::Error` if any statement fails; steps applied before the
/// failure stay recorded.
pub fn run_all(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "PRAGMA foreign_keys = ON;
         CREATE TABLE IF NOT EXISTS schema_version (
             version INTEGER PRIMARY KEY,
             applied_at INTEGER NOT NULL,
             description TEXT NOT NULL
         );",
    )?;

    let applied = get_schema_version(conn)?;
    for step in MIGRATIONS.iter().filter(|m| m.version > applied) {
        conn.execute_batch(step.sql)?;
        conn.execute(
            "INSERT OR IGNORE INTO schema_version (version, applied_at, description) VALUES (?1, ?2, ?3)",
            params![step.version, chrono::Utc::now().timestamp(), step.description],
        )?;
        log::debug!("schema migrated to v{}: {}", step.version, step.description);
    }
    Ok(())
}
