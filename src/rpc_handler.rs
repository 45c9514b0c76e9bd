//! RPC method handler for the Tabshelf JSON-RPC protocol.
//!
//! Extracted from `rpc_server.rs` so it can be unit-tested independently.
//! `handle_method` dispatches each call to the `App`; failures come back as
//! user-facing `Err(String)` messages and never panic the host.

use std::sync::Mutex;

use chrono::NaiveDate;
use log::error;
use serde_json::{json, Value};

use crate::app::App;
use crate::managers::bookmark_manager::{BookmarkManager, BookmarkManagerTrait};
use crate::managers::selection_manager::SelectionManagerTrait;
use crate::services::settings_engine::SettingsEngineTrait;
use crate::types::errors::SaveError;
use crate::types::plan::SaveSummary;
use crate::types::tab::BrowserWindow;

/// Converts a save failure into its status-line text, logging the detail.
fn save_error(e: SaveError) -> String {
    if !matches!(e, SaveError::EmptySelection) {
        error!("{}", e);
    }
    e.user_message().to_string()
}

fn summary_json(summary: &SaveSummary) -> Value {
    json!({
        "saved": summary.saved,
        "skipped": summary.skipped,
        "folder": summary.folder_title,
        "folder_id": summary.folder_id,
        "message": summary.status_message(),
    })
}

/// Current checklist as rendered by the popup.
fn checklist_json(app: &App) -> Value {
    let checklist = &app.checklist;
    let listing = checklist.listing();
    let windows: Vec<Value> = listing
        .windows
        .iter()
        .enumerate()
        .map(|(position, w)| {
            let tabs: Vec<Value> = w
                .tabs
                .iter()
                .map(|t| json!({
                    "id": t.id,
                    "title": t.display_title(),
                    "url": t.url,
                    "checked": checklist.is_checked(t.id),
                }))
                .collect();
            json!({
                "window_id": w.window_id,
                "label": w.label(position),
                "is_private": w.is_private,
                "is_current_window": w.is_current_window,
                "tabs": tabs,
            })
        })
        .collect();

    json!({
        "windows": windows,
        "save_visible": checklist.is_save_visible(),
        "show_except_private": checklist.offers_except_private(),
        "permission_notice": !listing.private_access_allowed,
    })
}

fn selection_state(app: &App) -> Value {
    json!({
        "save_visible": app.checklist.is_save_visible(),
        "checked": app.checklist.checked_count(),
    })
}

/// Dispatch a JSON-RPC method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    match method {
        // ─── Windows ───
        "windows.sync" => {
            let windows_val = params.get("windows").cloned().ok_or("missing windows")?;
            let windows: Vec<BrowserWindow> =
                serde_json::from_value(windows_val).map_err(|e| format!("invalid windows: {}", e))?;
            let current = params
                .get("current_window_id")
                .and_then(|v| v.as_i64())
                .ok_or("missing current_window_id")?;
            let allowed = params
                .get("private_access_allowed")
                .and_then(|v| v.as_bool())
                .unwrap_or(false);
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.tab_manager.sync(windows, current, allowed);
            a.load_tabs().map_err(save_error)?;
            Ok(checklist_json(&a))
        }
        "tabs.list" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            Ok(checklist_json(&a))
        }

        // ─── Selection ───
        "selection.set" => {
            let tab_id = params.get("tab_id").and_then(|v| v.as_i64()).ok_or("missing tab_id")?;
            let checked = params.get("checked").and_then(|v| v.as_bool()).ok_or("missing checked")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.checklist.set_checked(tab_id, checked).map_err(|e| e.to_string())?;
            Ok(selection_state(&a))
        }
        "selection.except_private" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.checklist.except_private_preset();
            Ok(selection_state(&a))
        }
        "selection.select_all" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.checklist.select_all();
            Ok(selection_state(&a))
        }
        "selection.clear_all" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.checklist.clear_all();
            Ok(selection_state(&a))
        }

        // ─── Save ───
        "tabs.save" => {
            let date = match params.get("date").and_then(|v| v.as_str()) {
                Some(s) => Some(
                    NaiveDate::parse_from_str(s, "%Y-%m-%d")
                        .map_err(|e| format!("invalid date: {}", e))?,
                ),
                None => None,
            };
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let summary = match date {
                Some(d) => a.save_selected_on(d),
                None => a.save_selected(),
            }
            .map_err(save_error)?;
            Ok(summary_json(&summary))
        }
        "tabs.quick_save" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let summary = a.quick_save().map_err(save_error)?;
            Ok(summary_json(&summary))
        }

        // ─── Bookmarks ───
        "bookmark.children" => {
            let folder_id = params.get("folder_id").and_then(|v| v.as_str()).ok_or("missing folder_id")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let mgr = BookmarkManager::new(a.db.connection());
            let children = mgr.list_children(folder_id).map_err(|e| e.to_string())?;
            serde_json::to_value(children).map_err(|e| e.to_string())
        }
        "bookmark.find_folder" => {
            let title = params.get("title").and_then(|v| v.as_str()).ok_or("missing title")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let mgr = BookmarkManager::new(a.db.connection());
            let folders = mgr.search_folders_by_title(title).map_err(|e| e.to_string())?;
            serde_json::to_value(folders).map_err(|e| e.to_string())
        }

        // ─── Settings ───
        "settings.get" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            serde_json::to_value(a.settings_engine.get_settings()).map_err(|e| e.to_string())
        }
        "settings.set" => {
            let key = params.get("key").and_then(|v| v.as_str()).ok_or("missing key")?;
            let value = params.get("value").cloned().ok_or("missing value")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.settings_engine.set_value(key, value).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }

        // ─── Ping ───
        "ping" => Ok(json!({"pong": true})),

        _ => Err(format!("unknown method: {}", method)),
    }
}
