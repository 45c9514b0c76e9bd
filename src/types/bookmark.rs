use serde::{Deserialize, Serialize};

/// Represents a saved bookmark.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bookmark {
    pub id: String,
    pub url: String,
    pub title: String,
    pub folder_id: Option<String>,
    pub position: i32,
    pub created_at: i64,
}

/// Represents a folder for organizing bookmarks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookmarkFolder {
    pub id: String,
    pub name: String,
    pub parent_id: Option<String>,
    pub position: i32,
}

/// A direct child of a folder: either a nested folder or a bookmark.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BookmarkNode {
    Folder(BookmarkFolder),
    Bookmark(Bookmark),
}

impl BookmarkNode {
    pub fn id(&self) -> &str {
        match self {
            BookmarkNode::Folder(f) => &f.id,
            BookmarkNode::Bookmark(b) => &b.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            BookmarkNode::Folder(f) => &f.name,
            BookmarkNode::Bookmark(b) => &b.title,
        }
    }

    /// The URL of a bookmark node; folders have none.
    pub fn url(&self) -> Option<&str> {
        match self {
            BookmarkNode::Folder(_) => None,
            BookmarkNode::Bookmark(b) => Some(&b.url),
        }
    }
}
