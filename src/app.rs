//! App Core for Tabshelf.
//!
//! Holds the bookmark database, the host's window snapshot, settings and the
//! selection checklist, and runs the load/select/save flow on top of them.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDate;
use log::{error, info};

use crate::database::connection::Database;
use crate::managers::bookmark_manager::BookmarkManager;
use crate::managers::selection_manager::{SelectionManagerTrait, TabChecklist};
use crate::managers::tab_manager::TabManager;
use crate::services::organizer::{self, BookmarkOrganizer, BookmarkOrganizerTrait};
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::services::tab_classifier::{self, TabClassifier};
use crate::types::errors::SaveError;
use crate::types::plan::SaveSummary;
use crate::types::tab::TabListing;

/// Central application struct.
///
/// `BookmarkManager` is created on demand via `db.connection()` because it
/// borrows the connection with a lifetime.
pub struct App {
    pub db: Arc<Database>,
    pub tab_manager: TabManager,
    pub settings_engine: SettingsEngine,
    pub checklist: TabChecklist,
}

impl App {
    /// Creates a new App with settings at the platform config path.
    pub fn new(db_path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        Self::with_settings_path(db_path, None)
    }

    /// Creates a new App, reading settings from `settings_path` when given.
    pub fn with_settings_path(
        db_path: &str,
        settings_path: Option<String>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let db = Arc::new(Database::open(db_path)?);

        let mut settings_engine = SettingsEngine::new(settings_path.map(PathBuf::from));
        if let Err(e) = settings_engine.load() {
            error!("falling back to default settings: {}", e);
        }

        Ok(Self {
            db,
            tab_manager: TabManager::new(),
            settings_engine,
            checklist: TabChecklist::default(),
        })
    }

    fn organizer(&self) -> BookmarkOrganizer {
        BookmarkOrganizer::new(self.settings_engine.get_settings().naming.clone())
    }

    /// Enumerates windows, filters generic tabs and resets the checklist.
    pub fn load_tabs(&mut self) -> Result<&TabListing, SaveError> {
        let classifier = TabClassifier::from_settings(&self.settings_engine.get_settings().filter);
        let listing = tab_classifier::collect_candidates(&self.tab_manager, &classifier)
            .map_err(|e| {
                error!("loading tabs failed: {}", e);
                SaveError::from(e)
            })?;
        self.checklist = TabChecklist::new(listing);
        Ok(self.checklist.listing())
    }

    /// Saves the checked tabs into today's folder.
    pub fn save_selected(&mut self) -> Result<SaveSummary, SaveError> {
        let date = organizer::today(self.settings_engine.get_settings().naming.date_clock);
        self.save_selected_on(date)
    }

    /// Saves the checked tabs into the folder for `date`, then clears the checklist.
    pub fn save_selected_on(&mut self, date: NaiveDate) -> Result<SaveSummary, SaveError> {
        let mut selection = self.checklist.selected_tabs();
        if self.settings_engine.get_settings().save.dedupe_selection {
            selection = organizer::dedupe_by_url(selection);
        }

        let organizer = self.organizer();
        let mut store = BookmarkManager::new(self.db.connection());
        let summary = organizer.save(&mut store, &selection, date)?;

        info!("{}", summary.status_message());
        self.checklist.clear_all();
        Ok(summary)
    }

    /// Checks the current window's normal tabs and saves them right away.
    pub fn quick_save(&mut self) -> Result<SaveSummary, SaveError> {
        self.checklist.quick_save_preset();
        self.save_selected()
    }
}
