// Tabshelf state managers
// Managers own stateful collaborators: the bookmark store, the host's window snapshot
// and the selection checklist.

pub mod bookmark_manager;
pub mod selection_manager;
pub mod tab_manager;
