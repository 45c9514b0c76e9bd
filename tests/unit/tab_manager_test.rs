//! Unit tests for the TabManager window snapshot.

use tabshelf::managers::tab_manager::{TabManager, WindowSourceTrait};
use tabshelf::types::errors::EnumerationError;
use tabshelf::types::tab::{BrowserTab, BrowserWindow};

fn window(id: i64, incognito: bool, tab_ids: &[i64]) -> BrowserWindow {
    BrowserWindow {
        id,
        incognito,
        tabs: tab_ids
            .iter()
            .map(|t| BrowserTab {
                id: *t,
                title: format!("Tab {}", t),
                url: format!("https://site{}.com", t),
            })
            .collect(),
    }
}

#[test]
fn test_new_manager_has_no_current_window() {
    let manager = TabManager::new();
    assert!(manager.list_windows().unwrap().is_empty());
    assert!(matches!(manager.current_window_id(), Err(EnumerationError::NoCurrentWindow)));
    assert!(!manager.is_private_access_allowed());
}

#[test]
fn test_sync_replaces_snapshot() {
    let mut manager = TabManager::default();
    manager.sync(vec![window(1, false, &[1, 2])], 1, false);
    manager.sync(vec![window(5, false, &[7]), window(6, true, &[8, 9])], 6, true);

    let windows = manager.list_windows().unwrap();
    let ids: Vec<i64> = windows.iter().map(|w| w.id).collect();
    assert_eq!(ids, vec![5, 6]);
    assert!(windows[1].incognito);
    assert_eq!(windows[1].tabs.len(), 2);
    assert_eq!(manager.current_window_id().unwrap(), 6);
    assert!(manager.is_private_access_allowed());
}

#[test]
fn test_sync_can_revoke_private_access() {
    let mut manager = TabManager::new();
    manager.sync(vec![window(1, false, &[1])], 1, true);
    manager.sync(vec![window(1, false, &[1])], 1, false);
    assert!(!manager.is_private_access_allowed());
}

#[test]
fn test_sync_with_no_windows_keeps_current_id() {
    let mut manager = TabManager::new();
    manager.sync(Vec::new(), 3, false);
    assert!(manager.list_windows().unwrap().is_empty());
    assert_eq!(manager.current_window_id().unwrap(), 3);
}

#[test]
fn test_windows_deserialize_from_host_json() {
    let json = serde_json::json!([
        {"id": 1, "tabs": [{"id": 10, "url": "https://a.com"}]},
        {"id": 2, "incognito": true}
    ]);
    let windows: Vec<BrowserWindow> = serde_json::from_value(json).unwrap();
    assert!(!windows[0].incognito);
    assert_eq!(windows[0].tabs[0].title, "");
    assert_eq!(windows[0].tabs[0].display_title(), "https://a.com");
    assert!(windows[1].incognito);
    assert!(windows[1].tabs.is_empty());
}
