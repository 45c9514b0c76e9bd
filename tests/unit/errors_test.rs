use std::error::Error;

use tabshelf::types::errors::*;

// === TabError Tests ===

#[test]
fn tab_error_not_found_display() {
    let err = TabError::NotFound(42);
    assert_eq!(err.to_string(), "Tab not found: 42");
}

// === EnumerationError Tests ===

#[test]
fn enumeration_error_display() {
    assert_eq!(
        EnumerationError::NoCurrentWindow.to_string(),
        "Current window is unknown"
    );
}

// === BookmarkError Tests ===

#[test]
fn bookmark_error_display_variants() {
    assert_eq!(
        BookmarkError::FolderNotFound("f-1".to_string()).to_string(),
        "Bookmark folder not found: f-1"
    );
    assert_eq!(
        BookmarkError::UnresolvedFolder(3).to_string(),
        "Planned folder at step 3 was not created"
    );
    assert_eq!(
        BookmarkError::DatabaseError("locked".to_string()).to_string(),
        "Bookmark database error: locked"
    );
}

// === SaveError Tests ===

#[test]
fn save_error_user_messages() {
    assert_eq!(SaveError::EmptySelection.user_message(), "No tabs selected");
    assert_eq!(
        SaveError::from(EnumerationError::NoCurrentWindow).user_message(),
        "Error loading tabs. Please try again."
    );
    assert_eq!(
        SaveError::from(BookmarkError::DatabaseError("x".to_string())).user_message(),
        "Error saving tabs. Please try again."
    );
}

#[test]
fn save_error_display_includes_cause() {
    let err = SaveError::StoreOperationFailure(BookmarkError::FolderNotFound("f-9".to_string()));
    assert_eq!(
        err.to_string(),
        "Failed to save tabs: Bookmark folder not found: f-9"
    );
}

#[test]
fn save_error_exposes_source() {
    assert!(SaveError::EmptySelection.source().is_none());
    let err = SaveError::EnumerationFailure(EnumerationError::NoCurrentWindow);
    assert_eq!(err.source().unwrap().to_string(), "Current window is unknown");
}

// === SettingsError Tests ===

#[test]
fn settings_error_display_variants() {
    assert_eq!(
        SettingsError::IoError("disk".to_string()).to_string(),
        "Settings I/O error: disk"
    );
    assert_eq!(
        SettingsError::SerializationError("bad json".to_string()).to_string(),
        "Settings serialization error: bad json"
    );
    assert_eq!(
        SettingsError::InvalidKey("a.b".to_string()).to_string(),
        "Invalid settings key: a.b"
    );
    assert_eq!(
        SettingsError::InvalidValue("nope".to_string()).to_string(),
        "Invalid settings value: nope"
    );
}
