use serde::{Deserialize, Serialize};

/// Browser-assigned tab identifier, unique within a browsing session.
pub type TabId = i64;

/// Browser-assigned window identifier.
pub type WindowId = i64;

/// A tab as reported by the host browser.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BrowserTab {
    pub id: TabId,
    #[serde(default)]
    pub title: String,
    pub url: String,
}

impl BrowserTab {
    /// Text shown next to the checkbox. Falls back to the URL for untitled tabs.
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            &self.url
        } else {
            &self.title
        }
    }
}

/// A browser window and the tabs it holds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BrowserWindow {
    pub id: WindowId,
    #[serde(default)]
    pub incognito: bool,
    #[serde(default)]
    pub tabs: Vec<BrowserTab>,
}

/// A window that survived generic-tab filtering and is offered for selection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CandidateWindow {
    pub window_id: WindowId,
    pub is_private: bool,
    pub is_current_window: bool,
    pub tabs: Vec<BrowserTab>,
}

impl CandidateWindow {
    /// Header label for this window at `position` within the listing.
    pub fn label(&self, position: usize) -> String {
        if self.is_private {
            "Incognito Window".to_string()
        } else if self.is_current_window {
            "Current Window".to_string()
        } else {
            format!("Window {}", position + 1)
        }
    }
}

/// Result of enumerating and filtering every open window.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TabListing {
    pub windows: Vec<CandidateWindow>,
    /// More than one window was open before filtering.
    pub has_multiple_windows: bool,
    /// Whether the host lets us see private windows at all.
    pub private_access_allowed: bool,
}

/// Immutable snapshot of a tab the user chose to save.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectedTab {
    pub id: TabId,
    pub title: String,
    pub url: String,
    pub window_id: WindowId,
    pub is_private: bool,
    pub is_current_window: bool,
}
