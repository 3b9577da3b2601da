use tauri::{AppHandle, Manager};

use crate::update_status::{self, UpdateCheckSummary};
use crate::{help_links, AppState, BridgeResult};

#[tauri::command]
pub(crate) fn bridge_is_desktop_runtime() -> bool {
    true
}

#[tauri::command]
pub(crate) fn bridge_lifecycle_phase(app_handle: AppHandle) -> String {
    let state = app_handle.state::<AppState>();
    state.lifecycle_phase().as_str().to_string()
}

#[tauri::command]
pub(crate) fn bridge_update_status(app_handle: AppHandle) -> UpdateCheckSummary {
    update_status::current_summary(&app_handle)
}

#[tauri::command]
pub(crate) fn bridge_open_external_url(url: String) -> BridgeResult {
    help_links::open_external_url(&url)
}
