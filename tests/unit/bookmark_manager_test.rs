//! Unit tests for the BookmarkManager public API.
//!
//! These tests exercise folder and bookmark operations through the
//! `BookmarkManagerTrait` interface, using an in-memory SQLite database.

use tabshelf::database::Database;
use tabshelf::managers::bookmark_manager::{BookmarkManager, BookmarkManagerTrait};
use tabshelf::types::bookmark::BookmarkNode;
use tabshelf::types::errors::BookmarkError;

/// Creating a folder and listing bookmarks inside it should work correctly.
#[test]
fn test_create_folder_and_list_children() {
    let db = Database::open_in_memory().expect("Failed to open in-memory database");
    let mut mgr = BookmarkManager::new(db.connection());

    let folder_id = mgr.create_folder("Work", None).unwrap();
    let bm_id = mgr
        .create_bookmark(&folder_id, "Example", "https://example.com")
        .unwrap();
    let sub_id = mgr.create_folder("Nested", Some(&folder_id)).unwrap();

    let children = mgr.list_children(&folder_id).unwrap();
    assert_eq!(children.len(), 2);
    // Folders come before bookmarks
    assert!(matches!(&children[0], BookmarkNode::Folder(f) if f.id == sub_id));
    assert_eq!(children[1].id(), bm_id);
    assert_eq!(children[1].url(), Some("https://example.com"));
    assert_eq!(children[1].title(), "Example");
}

/// Bookmarks keep insertion order within a folder.
#[test]
fn test_bookmark_positions_follow_insertion() {
    let db = Database::open_in_memory().unwrap();
    let mut mgr = BookmarkManager::new(db.connection());
    let folder = mgr.create_folder("Day", None).unwrap();

    for url in ["https://1.com", "https://2.com", "https://3.com"] {
        mgr.create_bookmark(&folder, url, url).unwrap();
    }

    let bookmarks = mgr.list_bookmarks(&folder).unwrap();
    let positions: Vec<i32> = bookmarks.iter().map(|b| b.position).collect();
    assert_eq!(positions, vec![0, 1, 2]);
    assert_eq!(bookmarks[2].url, "https://3.com");
    assert_eq!(bookmarks[0].folder_id.as_deref(), Some(folder.as_str()));
}

/// Title search is exact and case sensitive, in creation order.
#[test]
fn test_search_folders_by_exact_title() {
    let db = Database::open_in_memory().unwrap();
    let mut mgr = BookmarkManager::new(db.connection());

    let first = mgr.create_folder("2024-03-01", None).unwrap();
    mgr.create_folder("2024-03-01 old", None).unwrap();
    let parent = mgr.create_folder("Archive", None).unwrap();
    let second = mgr.create_folder("2024-03-01", Some(&parent)).unwrap();

    let found = mgr.search_folders_by_title("2024-03-01").unwrap();
    let ids: Vec<&str> = found.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, vec![first.as_str(), second.as_str()]);

    assert!(mgr.search_folders_by_title("archive").unwrap().is_empty());
}

/// Bookmarks never appear in folder title search.
#[test]
fn test_search_ignores_bookmarks_with_same_title() {
    let db = Database::open_in_memory().unwrap();
    let mut mgr = BookmarkManager::new(db.connection());
    let folder = mgr.create_folder("Misc", None).unwrap();
    mgr.create_bookmark(&folder, "2024-03-01", "https://a.com").unwrap();

    assert!(mgr.search_folders_by_title("2024-03-01").unwrap().is_empty());
}

#[test]
fn test_create_in_missing_folder_fails() {
    let db = Database::open_in_memory().unwrap();
    let mut mgr = BookmarkManager::new(db.connection());

    let err = mgr.create_bookmark("nope", "A", "https://a.com").unwrap_err();
    assert!(matches!(err, BookmarkError::FolderNotFound(ref id) if id == "nope"));

    let err = mgr.create_folder("Child", Some("nope")).unwrap_err();
    assert!(matches!(err, BookmarkError::FolderNotFound(_)));

    assert!(mgr.list_children("nope").is_err());
}

/// `find_or_create_folder` is idempotent for the same parent and title.
#[test]
fn test_find_or_create_folder() {
    let db = Database::open_in_memory().unwrap();
    let mut mgr = BookmarkManager::new(db.connection());

    let main = mgr.find_or_create_folder(None, "2024-03-01").unwrap();
    let again = mgr.find_or_create_folder(None, "2024-03-01").unwrap();
    assert_eq!(main, again);

    let sub = mgr.find_or_create_folder(Some(&main), "Window 1").unwrap();
    let sub_again = mgr.find_or_create_folder(Some(&main), "Window 1").unwrap();
    assert_eq!(sub, sub_again);

    // Same title under another parent is a different folder
    let other = mgr.create_folder("Other", None).unwrap();
    let elsewhere = mgr.find_or_create_folder(Some(&other), "Window 1").unwrap();
    assert_ne!(sub, elsewhere);

    assert_eq!(mgr.list_children(&main).unwrap().len(), 1);
}
