// Tabshelf services
// Stateless or settings-driven logic: tab classification, bookmark organization, settings.

pub mod organizer;
pub mod settings_engine;
pub mod tab_classifier;
