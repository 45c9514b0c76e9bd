use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::bookmark::BookmarkFolder;
use super::tab::{SelectedTab, WindowId};

/// Grouping key for selected tabs.
///
/// Normal windows order by id; every private tab shares the single
/// `Private` key, which sorts after all windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GroupKey {
    Window(WindowId),
    Private,
}

/// Selected tabs sharing one window (or the merged private group).
#[derive(Debug, Clone, PartialEq)]
pub struct WindowGroup {
    pub key: GroupKey,
    pub window_id: WindowId,
    pub is_private: bool,
    pub is_current_window: bool,
    pub tabs: Vec<SelectedTab>,
}

/// State of the day's folder tree captured before any creation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExistingTree {
    pub main_folder: Option<BookmarkFolder>,
    /// Direct subfolders of the main folder, in store order.
    pub subfolders: Vec<BookmarkFolder>,
    /// URLs of bookmarks directly under the main folder or one level below.
    pub urls: HashSet<String>,
}

impl ExistingTree {
    /// First direct subfolder with exactly this title.
    pub fn subfolder(&self, title: &str) -> Option<&BookmarkFolder> {
        self.subfolders.iter().find(|f| f.name == title)
    }
}

/// Where a planned operation puts its result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FolderRef {
    /// A folder that already exists in the store.
    Existing(String),
    /// A folder created by the operation at this index of the same plan.
    Planned(usize),
}

/// One store operation in a save plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum SaveOp {
    CreateFolder { title: String },
    CreateSubfolder { parent: FolderRef, title: String },
    CreateBookmark { parent: FolderRef, title: String, url: String },
}

/// Two or more window groups that resolved to the same subfolder title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingCollision {
    pub title: String,
    pub window_ids: Vec<WindowId>,
}

/// Ordered store operations for one save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavePlan {
    pub folder_title: String,
    pub main_folder: FolderRef,
    pub ops: Vec<SaveOp>,
    pub bookmark_count: usize,
    pub skipped_urls: Vec<String>,
    pub naming_collisions: Vec<NamingCollision>,
}

impl SavePlan {
    /// Titles of the subfolders this plan creates, in op order.
    pub fn created_subfolders(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                SaveOp::CreateSubfolder { title, .. } => Some(title.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn creates_main_folder(&self) -> bool {
        self.ops
            .iter()
            .any(|op| matches!(op, SaveOp::CreateFolder { .. }))
    }
}

/// Outcome reported back to the caller once a plan has run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveSummary {
    pub saved: usize,
    pub skipped: usize,
    pub folder_title: String,
    pub folder_id: String,
}

impl SaveSummary {
    pub fn status_message(&self) -> String {
        format!(
            "Successfully saved {} tab(s) to \"{}\"",
            self.saved, self.folder_title
        )
    }
}
