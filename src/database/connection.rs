//! Connection handle for the bookmark store.

use std::path::Path;

use rusqlite::Connection;

use super::migrations;

/// A migrated SQLite connection.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Opens or creates the store file at `path`, creating missing parent
    /// directories, and migrates it.
    ///
    /// # Errors
    /// `rusqlite::Error::InvalidPath` when the parent directory cannot be
    /// created; otherwise whatever SQLite reports while opening or migrating.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, rusqlite::Error> {
        let path = path.as_ref();
        match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => std::fs::create_dir_all(dir)
                .map_err(|_| rusqlite::Error::InvalidPath(dir.to_path_buf()))?,
            _ => {}
        }
        Self::migrated(Connection::open(path)?)
    }

    /// In-memory store, gone when dropped.
    pub fn open_in_memory() -> Result<Self, rusqlite::Error> {
        Self::migrated(Connection::open_in_memory()?)
    }

    fn migrated(conn: Connection) -> Result<Self, rusqlite::Error> {
        migrations::run_all(&conn)?;
        Ok(Self { conn })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}
