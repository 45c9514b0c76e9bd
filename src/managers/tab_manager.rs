//! Window and tab enumeration.
//!
//! The host browser pushes its window list into a [`TabManager`]; the rest
//! of the crate reads it back through [`WindowSourceTrait`].

use crate::types::errors::EnumerationError;
use crate::types::tab::{BrowserWindow, WindowId};

/// Trait defining the window/tab enumeration interface.
pub trait WindowSourceTrait {
    fn list_windows(&self) -> Result<Vec<BrowserWindow>, EnumerationError>;
    fn current_window_id(&self) -> Result<WindowId, EnumerationError>;
    /// Whether the host lets the extension see private windows.
    fn is_private_access_allowed(&self) -> bool;
}

/// In-memory snapshot of the host's windows.
pub struct TabManager {
    windows: Vec<BrowserWindow>,
    current_window_id: Option<WindowId>,
    private_access_allowed: bool,
}

impl TabManager {
    pub fn new() -> Self {
        Self {
            windows: Vec::new(),
            current_window_id: None,
            private_access_allowed: false,
        }
    }

    /// Replaces the whole snapshot with what the host just reported.
    pub fn sync(
        &mut self,
        windows: Vec<BrowserWindow>,
        current_window_id: WindowId,
        private_access_allowed: bool,
    ) {
        self.windows = windows;
        self.current_window_id = Some(current_window_id);
        self.private_access_allowed = private_access_allowed;
    }
}

impl Default for TabManager {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowSourceTrait for TabManager {
    fn list_windows(&self) -> Result<Vec<BrowserWindow>, EnumerationError> {
        Ok(self.windows.clone())
    }

    fn current_window_id(&self) -> Result<WindowId, EnumerationError> {
        self.current_window_id
            .ok_or(EnumerationError::NoCurrentWindow)
    }

    fn is_private_access_allowed(&self) -> bool {
        self.private_access_allowed
    }
}
