// Tabshelf platform paths
// Config and data directories per OS, plus the database and log locations
// derived from them.

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "tabshelf";

/// Overrides the data directory when set.
pub const DATA_DIR_ENV: &str = "TABSHELF_DATA_DIR";

#[cfg(not(target_os = "windows"))]
fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// Returns the platform-specific configuration directory.
///
/// - **Linux**: `$XDG_CONFIG_HOME/tabshelf` or `~/.config/tabshelf`
/// - **macOS**: `~/Library/Application Support/tabshelf`
/// - **Windows**: `%APPDATA%/tabshelf`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        appdata_dir()
    }
    #[cfg(target_os = "macos")]
    {
        home_dir().join("Library").join("Application Support").join(APP_DIR)
    }
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        match env::var("XDG_CONFIG_HOME") {
            Ok(xdg) => PathBuf::from(xdg).join(APP_DIR),
            Err(_) => home_dir().join(".config").join(APP_DIR),
        }
    }
}

/// Returns the platform-specific data directory, honouring `TABSHELF_DATA_DIR`.
///
/// - **Linux**: `$XDG_DATA_HOME/tabshelf` or `~/.local/share/tabshelf`
/// - **macOS**: `~/Library/Application Support/tabshelf`
/// - **Windows**: `%APPDATA%/tabshelf`
pub fn get_data_dir() -> PathBuf {
    if let Ok(dir) = env::var(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }
    #[cfg(target_os = "windows")]
    {
        appdata_dir()
    }
    #[cfg(target_os = "macos")]
    {
        home_dir().join("Library").join("Application Support").join(APP_DIR)
    }
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        match env::var("XDG_DATA_HOME") {
            Ok(xdg) => PathBuf::from(xdg).join(APP_DIR),
            Err(_) => home_dir().join(".local").join("share").join(APP_DIR),
        }
    }
}

#[cfg(target_os = "windows")]
fn appdata_dir() -> PathBuf {
    let appdata =
        env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join(APP_DIR)
}

/// Bookmark database file inside the data directory.
pub fn database_path() -> PathBuf {
    get_data_dir().join("tabshelf.db")
}

/// Directory for rolling log files.
pub fn log_dir() -> PathBuf {
    get_data_dir().join("logs")
}
