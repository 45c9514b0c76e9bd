//! Bookmark Manager for Tabshelf.
//!
//! Implements `BookmarkManagerTrait`, the bookmark store the organizer saves
//! into, backed by SQLite via `rusqlite`.

use rusqlite::{params, Connection};
use uuid::Uuid;

use crate::types::bookmark::{Bookmark, BookmarkFolder, BookmarkNode};
use crate::types::errors::BookmarkError;

/// Trait defining the bookmark store capabilities the organizer relies on.
pub trait BookmarkManagerTrait {
    /// Folders whose title equals `title` exactly, in store search order.
    fn search_folders_by_title(&self, title: &str) -> Result<Vec<BookmarkFolder>, BookmarkError>;
    fn create_folder(&mut self, name: &str, parent_id: Option<&str>) -> Result<String, BookmarkError>;
    /// Direct children of a folder: subfolders first, then bookmarks.
    fn list_children(&self, folder_id: &str) -> Result<Vec<BookmarkNode>, BookmarkError>;
    fn create_bookmark(&mut self, parent_id: &str, title: &str, url: &str) -> Result<String, BookmarkError>;

    /// Returns the id of the folder titled `title` under `parent_id`, creating it if absent.
    ///
    /// With no parent, any folder with that title anywhere in the store matches.
    fn find_or_create_folder(&mut self, parent_id: Option<&str>, title: &str) -> Result<String, BookmarkError> {
        let existing = match parent_id {
            Some(pid) => self.list_children(pid)?.into_iter().find_map(|node| match node {
                BookmarkNode::Folder(f) if f.name == title => Some(f.id),
                _ => None,
            }),
            None => self
                .search_folders_by_title(title)?
                .into_iter()
                .next()
                .map(|f| f.id),
        };
        match existing {
            Some(id) => Ok(id),
            None => self.create_folder(title, parent_id),
        }
    }
}

const FOLDER_COLUMNS: &str = "id, name, parent_id, position";
const BOOKMARK_COLUMNS: &str = "id, url, title, folder_id, position, created_at";

/// Bookmark manager backed by a SQLite connection.
pub struct BookmarkManager<'a> {
    conn: &'a Connection,
}

impl<'a> BookmarkManager<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Next free position among the rows of `table` whose `column` is `parent`.
    ///
    /// `IS` instead of `=` so a `NULL` parent matches top-level folders.
    fn next_position(&self, table: &str, column: &str, parent: Option<&str>) -> Result<i32, BookmarkError> {
        let sql = format!("SELECT COALESCE(MAX(position), -1) + 1 FROM {table} WHERE {column} IS ?1");
        Ok(self.conn.query_row(&sql, params![parent], |row| row.get(0))?)
    }

    fn require_folder(&self, folder_id: &str) -> Result<(), BookmarkError> {
        let found: bool = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM bookmark_folders WHERE id = ?1)",
            params![folder_id],
            |row| row.get(0),
        )?;
        if found {
            Ok(())
        } else {
            Err(BookmarkError::FolderNotFound(folder_id.to_string()))
        }
    }

    fn folders_where(&self, filter: &str, value: &str) -> Result<Vec<BookmarkFolder>, BookmarkError> {
        let sql = format!("SELECT {FOLDER_COLUMNS} FROM bookmark_folders WHERE {filter}");
        let mut stmt = self.conn.prepare(&sql)?;
        let folders = stmt
            .query_map(params![value], |row| {
                Ok(BookmarkFolder {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    parent_id: row.get(2)?,
                    position: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(folders)
    }

    /// Bookmarks directly inside a folder, in position order.
    pub fn list_bookmarks(&self, folder_id: &str) -> Result<Vec<Bookmark>, BookmarkError> {
        let sql = format!("SELECT {BOOKMARK_COLUMNS} FROM bookmarks WHERE folder_id = ?1 ORDER BY position");
        let mut stmt = self.conn.prepare(&sql)?;
        let bookmarks = stmt
            .query_map(params![folder_id], |row| {
                Ok(Bookmark {
                    id: row.get(0)?,
                    url: row.get(1)?,
                    title: row.get(2)?,
                    folder_id: row.get(3)?,
                    position: row.get(4)?,
                    created_at: row.get(5)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(bookmarks)
    }
}

impl<'a> BookmarkManagerTrait for BookmarkManager<'a> {
    /// Exact, case-sensitive title match in creation order.
    fn search_folders_by_title(&self, title: &str) -> Result<Vec<BookmarkFolder>, BookmarkError> {
        self.folders_where("name = ?1 ORDER BY rowid", title)
    }

    fn create_folder(&mut self, name: &str, parent_id: Option<&str>) -> Result<String, BookmarkError> {
        if let Some(pid) = parent_id {
            self.require_folder(pid)?;
        }
        let id = Uuid::new_v4().to_string();
        let position = self.next_position("bookmark_folders", "parent_id", parent_id)?;
        self.conn.execute(
            "INSERT INTO bookmark_folders (id, name, parent_id, position) VALUES (?1, ?2, ?3, ?4)",
            params![id, name, parent_id, position],
        )?;
        Ok(id)
    }

    fn list_children(&self, folder_id: &str) -> Result<Vec<BookmarkNode>, BookmarkError> {
        self.require_folder(folder_id)?;
        let folders = self.folders_where("parent_id = ?1 ORDER BY position", folder_id)?;
        let bookmarks = self.list_bookmarks(folder_id)?;
        Ok(folders
            .into_iter()
            .map(BookmarkNode::Folder)
            .chain(bookmarks.into_iter().map(BookmarkNode::Bookmark))
            .collect())
    }

    fn create_bookmark(&mut self, parent_id: &str, title: &str, url: &str) -> Result<String, BookmarkError> {
        self.require_folder(parent_id)?;
        let id = Uuid::new_v4().to_string();
        let position = self.next_position("bookmarks", "folder_id", Some(parent_id))?;
        self.conn.execute(
            "INSERT INTO bookmarks (id, url, title, folder_id, position, created_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![id, url, title, parent_id, position, chrono::Utc::now().timestamp()],
        )?;
        Ok(id)
    }
}
