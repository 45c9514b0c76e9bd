use serde::{Deserialize, Serialize};

use super::errors::SettingsError;

/// Top-level organizer settings container.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OrganizerSettings {
    #[serde(default)]
    pub naming: NamingSettings,
    #[serde(default)]
    pub filter: FilterSettings,
    #[serde(default)]
    pub save: SaveSettings,
}

/// Folder naming rules.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NamingSettings {
    pub private_folder_title: String,
    pub window_folder_prefix: String,
    pub date_clock: DateClock,
}

impl Default for NamingSettings {
    fn default() -> Self {
        Self {
            private_folder_title: "$Temp".to_string(),
            window_folder_prefix: "Window".to_string(),
            date_clock: DateClock::Utc,
        }
    }
}

impl NamingSettings {
    /// Title of the subfolder for the window numbered `n` (1-based).
    pub fn window_folder_title(&self, n: usize) -> String {
        format!("{} {}", self.window_folder_prefix, n)
    }

    /// Whether `title` has the `<prefix> <digits>` shape of a window subfolder.
    pub fn is_window_folder_title(&self, title: &str) -> bool {
        title
            .strip_prefix(self.window_folder_prefix.as_str())
            .and_then(|rest| rest.strip_prefix(' '))
            .map_or(false, |n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
    }

    /// Rejects names that would let private tabs share a folder with a window.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.private_folder_title.trim().is_empty() {
            return Err(SettingsError::InvalidValue(
                "naming.private_folder_title cannot be empty".to_string(),
            ));
        }
        if self.window_folder_prefix.trim().is_empty() {
            return Err(SettingsError::InvalidValue(
                "naming.window_folder_prefix cannot be empty".to_string(),
            ));
        }
        if self.is_window_folder_title(&self.private_folder_title) {
            return Err(SettingsError::InvalidValue(format!(
                "naming.private_folder_title '{}' looks like a window folder",
                self.private_folder_title
            )));
        }
        Ok(())
    }
}

/// Which clock decides "today" for the main folder title.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DateClock {
    Utc,
    Local,
}

/// Generic-tab filtering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FilterSettings {
    /// Also hide the extension's own pages (`chrome-extension:`).
    pub exclude_extension_pages: bool,
    /// Additional URL prefixes treated as generic.
    pub extra_excluded_prefixes: Vec<String>,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            exclude_extension_pages: true,
            extra_excluded_prefixes: Vec::new(),
        }
    }
}

/// Save behaviour.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SaveSettings {
    /// Drop repeated URLs from a selection before planning.
    pub dedupe_selection: bool,
}

impl Default for SaveSettings {
    fn default() -> Self {
        Self {
            dedupe_selection: true,
        }
    }
}
