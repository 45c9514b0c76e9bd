//! Selection checklist for the save popup.
//!
//! Owns the `tab id -> checked` map for the current listing. The organizer
//! never reads this state; it only receives the resolved [`SelectedTab`] list.

use std::collections::HashMap;

use crate::types::errors::TabError;
use crate::types::tab::{CandidateWindow, SelectedTab, TabId, TabListing};

/// Trait defining the selection presets and queries.
pub trait SelectionManagerTrait {
    /// Checks only non-private tabs of the current window.
    fn quick_save_preset(&mut self);
    /// Checks every non-private tab across all windows.
    fn except_private_preset(&mut self);
    fn select_all(&mut self);
    fn clear_all(&mut self);
    fn set_checked(&mut self, tab_id: TabId, checked: bool) -> Result<(), TabError>;
    fn is_checked(&self, tab_id: TabId) -> bool;
    /// The save action is shown iff at least one tab is checked.
    fn is_save_visible(&self) -> bool;
    fn selected_tabs(&self) -> Vec<SelectedTab>;
}

/// Checklist over one [`TabListing`].
#[derive(Debug, Clone, Default)]
pub struct TabChecklist {
    listing: TabListing,
    checked: HashMap<TabId, bool>,
}

impl TabChecklist {
    /// Builds a checklist with every tab unchecked.
    pub fn new(listing: TabListing) -> Self {
        let checked = listing
            .windows
            .iter()
            .flat_map(|w| w.tabs.iter().map(|t| (t.id, false)))
            .collect();
        Self { listing, checked }
    }

    pub fn listing(&self) -> &TabListing {
        &self.listing
    }

    /// Whether the "save except private" action should be offered.
    pub fn offers_except_private(&self) -> bool {
        self.listing.has_multiple_windows
    }

    pub fn checked_count(&self) -> usize {
        self.checked.values().filter(|c| **c).count()
    }

    fn apply<F>(&mut self, rule: F)
    where
        F: Fn(&CandidateWindow) -> bool,
    {
        for window in &self.listing.windows {
            let value = rule(window);
            for tab in &window.tabs {
                self.checked.insert(tab.id, value);
            }
        }
    }
}

impl SelectionManagerTrait for TabChecklist {
    fn quick_save_preset(&mut self) {
        self.apply(|w| w.is_current_window && !w.is_private);
    }

    fn except_private_preset(&mut self) {
        self.apply(|w| !w.is_private);
    }

    fn select_all(&mut self) {
        self.apply(|_| true);
    }

    fn clear_all(&mut self) {
        self.apply(|_| false);
    }

    fn set_checked(&mut self, tab_id: TabId, checked: bool) -> Result<(), TabError> {
        match self.checked.get_mut(&tab_id) {
            Some(slot) => {
                *slot = checked;
                Ok(())
            }
            None => Err(TabError::NotFound(tab_id)),
        }
    }

    fn is_checked(&self, tab_id: TabId) -> bool {
        self.checked.get(&tab_id).copied().unwrap_or(false)
    }

    fn is_save_visible(&self) -> bool {
        self.checked.values().any(|c| *c)
    }

    /// Checked tabs in listing order.
    fn selected_tabs(&self) -> Vec<SelectedTab> {
        self.listing
            .windows
            .iter()
            .flat_map(|w| {
                w.tabs
                    .iter()
                    .filter(|t| self.is_checked(t.id))
                    .map(move |t| SelectedTab {
                        id: t.id,
                        title: t.title.clone(),
                        url: t.url.clone(),
                        window_id: w.window_id,
                        is_private: w.is_private,
                        is_current_window: w.is_current_window,
                    })
            })
            .collect()
    }
}
