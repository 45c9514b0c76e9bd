// Tabshelf Settings Engine
// Organizer settings (folder naming, tab filtering, save behaviour) kept as a
// pretty-printed JSON file under the platform config directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::platform;
use crate::types::errors::SettingsError;
use crate::types::settings::OrganizerSettings;

const SETTINGS_FILE: &str = "settings.json";

/// Trait defining the settings engine interface.
pub trait SettingsEngineTrait {
    fn load(&mut self) -> Result<OrganizerSettings, SettingsError>;
    fn save(&self) -> Result<(), SettingsError>;
    fn get_settings(&self) -> &OrganizerSettings;
    fn set_value(&mut self, key: &str, value: Value) -> Result<(), SettingsError>;
    fn reset(&mut self) -> Result<(), SettingsError>;
    fn get_config_path(&self) -> &Path;
}

pub struct SettingsEngine {
    config_path: PathBuf,
    settings: OrganizerSettings,
}

impl SettingsEngine {
    /// Engine over `path_override`, or `<config dir>/settings.json` when `None`.
    /// Nothing is read until [`SettingsEngineTrait::load`].
    pub fn new(path_override: Option<PathBuf>) -> Self {
        Self {
            config_path: path_override
                .unwrap_or_else(|| platform::get_config_dir().join(SETTINGS_FILE)),
            settings: OrganizerSettings::default(),
        }
    }

    fn write(&self, settings: &OrganizerSettings) -> Result<(), SettingsError> {
        if let Some(dir) = self.config_path.parent() {
            fs::create_dir_all(dir).map_err(|e| {
                SettingsError::IoError(format!("Failed to create config directory: {}", e))
            })?;
        }
        let text = serde_json::to_string_pretty(settings).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to serialize settings: {}", e))
        })?;
        fs::write(&self.config_path, text)
            .map_err(|e| SettingsError::IoError(format!("Failed to write config file: {}", e)))
    }
}

/// Replaces the leaf named by a dotted `key` inside `root`.
///
/// Every segment must already exist and the parent of the leaf must be an object.
fn replace_at(root: &mut Value, key: &str, value: Value) -> Result<(), SettingsError> {
    let not_found = || SettingsError::InvalidKey(format!("Key '{}' not found in settings", key));

    let (leaf, sections) = match key.rsplit_once('.') {
        Some((sections, leaf)) => (leaf, Some(sections)),
        None => (key, None),
    };

    let mut parent = root;
    for part in sections.into_iter().flat_map(|s| s.split('.')) {
        parent = parent.get_mut(part).ok_or_else(not_found)?;
    }

    match parent {
        Value::Object(map) => match map.get_mut(leaf) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(not_found()),
        },
        _ => Err(SettingsError::InvalidKey(format!(
            "Key '{}' does not name a settings section",
            key
        ))),
    }
}

impl SettingsEngineTrait for SettingsEngine {
    /// Reads the file into memory. A missing file means defaults; a malformed
    /// or invalid one is an error and leaves the current settings untouched.
    fn load(&mut self) -> Result<OrganizerSettings, SettingsError> {
        let loaded: OrganizerSettings = match fs::read_to_string(&self.config_path) {
            Ok(text) => serde_json::from_str(&text).map_err(|e| {
                SettingsError::SerializationError(format!("Failed to parse config file: {}", e))
            })?,
            Err(e) if e.kind() == ErrorKind::NotFound => OrganizerSettings::default(),
            Err(e) => {
                return Err(SettingsError::IoError(format!(
                    "Failed to read config file: {}",
                    e
                )))
            }
        };
        loaded.naming.validate()?;
        self.settings = loaded;
        Ok(self.settings.clone())
    }

    fn save(&self) -> Result<(), SettingsError> {
        self.write(&self.settings)
    }

    fn get_settings(&self) -> &OrganizerSettings {
        &self.settings
    }

    /// Sets one existing value by dotted path, e.g. `naming.private_folder_title`,
    /// and persists the result. The new value must still deserialize into
    /// valid [`OrganizerSettings`]; nothing changes in memory unless the
    /// write succeeds.
    fn set_value(&mut self, key: &str, value: Value) -> Result<(), SettingsError> {
        if key.is_empty() {
            return Err(SettingsError::InvalidKey("Key cannot be empty".to_string()));
        }

        let mut tree = serde_json::to_value(&self.settings).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to serialize settings: {}", e))
        })?;
        replace_at(&mut tree, key, value)?;

        let updated: OrganizerSettings = serde_json::from_value(tree).map_err(|e| {
            SettingsError::InvalidValue(format!("Invalid value for key '{}': {}", key, e))
        })?;
        updated.naming.validate()?;

        self.write(&updated)?;
        self.settings = updated;
        Ok(())
    }

    fn reset(&mut self) -> Result<(), SettingsError> {
        let defaults = OrganizerSettings::default();
        self.write(&defaults)?;
        self.settings = defaults;
        Ok(())
    }

    fn get_config_path(&self) -> &Path {
        &self.config_path
    }
}
