use std::fmt;

// === TabError ===

/// Errors related to the tab checklist.
#[derive(Debug)]
pub enum TabError {
    /// Tab with the given ID is not in the current listing.
    NotFound(i64),
}

impl fmt::Display for TabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TabError::NotFound(id) => write!(f, "Tab not found: {}", id),
        }
    }
}

impl std::error::Error for TabError {}

// === EnumerationError ===

/// Errors raised while listing windows and tabs from the host browser.
#[derive(Debug)]
pub enum EnumerationError {
    /// The host has not reported which window is current.
    NoCurrentWindow,
}

impl fmt::Display for EnumerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnumerationError::NoCurrentWindow => write!(f, "Current window is unknown"),
        }
    }
}

impl std::error::Error for EnumerationError {}

// === BookmarkError ===

/// Errors related to bookmark store operations.
#[derive(Debug)]
pub enum BookmarkError {
    /// The target folder was not found.
    FolderNotFound(String),
    /// A plan referenced a folder that was never created.
    UnresolvedFolder(usize),
    /// Database operation failed.
    DatabaseError(String),
}

impl fmt::Display for BookmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookmarkError::FolderNotFound(id) => write!(f, "Bookmark folder not found: {}", id),
            BookmarkError::UnresolvedFolder(index) => {
                write!(f, "Planned folder at step {} was not created", index)
            }
            BookmarkError::DatabaseError(msg) => {
                write!(f, "Bookmark database error: {}", msg)
            }
        }
    }
}

impl std::error::Error for BookmarkError {}

impl From<rusqlite::Error> for BookmarkError {
    fn from(e: rusqlite::Error) -> Self {
        BookmarkError::DatabaseError(e.to_string())
    }
}

// === SaveError ===

/// Failures of a save operation, as reported to the user.
#[derive(Debug)]
pub enum SaveError {
    /// No tabs were selected; nothing was sent to the store.
    EmptySelection,
    /// Listing windows failed before any planning.
    EnumerationFailure(EnumerationError),
    /// A folder or bookmark creation failed; earlier operations stay applied.
    StoreOperationFailure(BookmarkError),
}

impl SaveError {
    /// Text shown in the status area.
    pub fn user_message(&self) -> &'static str {
        match self {
            SaveError::EmptySelection => "No tabs selected",
            SaveError::EnumerationFailure(_) => "Error loading tabs. Please try again.",
            SaveError::StoreOperationFailure(_) => "Error saving tabs. Please try again.",
        }
    }
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveError::EmptySelection => write!(f, "No tabs selected"),
            SaveError::EnumerationFailure(e) => write!(f, "Failed to load tabs: {}", e),
            SaveError::StoreOperationFailure(e) => write!(f, "Failed to save tabs: {}", e),
        }
    }
}

impl std::error::Error for SaveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SaveError::EmptySelection => None,
            SaveError::EnumerationFailure(e) => Some(e),
            SaveError::StoreOperationFailure(e) => Some(e),
        }
    }
}

impl From<EnumerationError> for SaveError {
    fn from(e: EnumerationError) -> Self {
        SaveError::EnumerationFailure(e)
    }
}

impl From<BookmarkError> for SaveError {
    fn from(e: BookmarkError) -> Self {
        SaveError::StoreOperationFailure(e)
    }
}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
    /// The provided settings key is invalid.
    InvalidKey(String),
    /// The provided settings value is invalid.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid settings value: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}
