use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tauri::{AppHandle, Manager, Runtime};

use crate::{
    append_desktop_log, append_startup_log, runtime_paths, window_events, SEARCH_WINDOW_PREFIX,
    SESSION_RESTORED_EVENT, TASK_MANAGER_WINDOW_LABEL,
};

// Routes of the content windows that were open when the last session ended.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SessionState {
    #[serde(default)]
    pub(crate) open_routes: Vec<String>,
    #[serde(default)]
    pub(crate) saved_at: Option<String>,
}

// A missing file is a first run; a corrupt file reads the same way. Session
// restore must never block startup.
pub(crate) fn read_session_state(data_root_dir: Option<&Path>) -> SessionState {
    let Some(root) = data_root_dir else {
        return SessionState::default();
    };
    let path = runtime_paths::session_state_path_in(root);
    let raw = match fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(error) if error.kind() == ErrorKind::NotFound => return SessionState::default(),
        Err(error) => {
            append_desktop_log(&format!(
                "failed to read session state {}: {error}",
                path.display()
            ));
            return SessionState::default();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(state) => state,
        Err(error) => {
            append_desktop_log(&format!(
                "discarding corrupt session state {}: {error}",
                path.display()
            ));
            SessionState::default()
        }
    }
}

pub(crate) fn write_session_state(
    state: &SessionState,
    data_root_dir: Option<&Path>,
) -> Result<(), String> {
    let root = data_root_dir.ok_or_else(|| "Cannot resolve the ArcFile data root.".to_string())?;
    let path = runtime_paths::session_state_path_in(root);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|error| {
            format!("Failed to create session state dir {}: {error}", parent.display())
        })?;
    }
    let serialized = serde_json::to_string_pretty(state)
        .map_err(|error| format!("Failed to serialize session state: {error}"))?;
    fs::write(&path, serialized)
        .map_err(|error| format!("Failed to write session state {}: {error}", path.display()))
}

// Search overlays and the task manager are shell furniture, not session
// content; they are never restored.
pub(crate) fn is_restorable_label(window_label: &str) -> bool {
    !window_label.starts_with(SEARCH_WINDOW_PREFIX)
        && window_label != TASK_MANAGER_WINDOW_LABEL
}

fn collect_open_routes<R: Runtime>(app_handle: &AppHandle<R>) -> Vec<String> {
    app_handle
        .webview_windows()
        .values()
        .filter(|window| is_restorable_label(window.label()))
        .filter_map(|window| window.url().ok())
        .map(|url| url.path().to_string())
        .collect()
}

pub(crate) fn persist_open_windows<R, F>(app_handle: &AppHandle<R>, log: F)
where
    R: Runtime,
    F: Fn(&str),
{
    let state = SessionState {
        open_routes: collect_open_routes(app_handle),
        saved_at: Some(chrono::Local::now().to_rfc3339()),
    };
    match write_session_state(&state, runtime_paths::data_root_dir().as_deref()) {
        Ok(()) => log(&format!(
            "persisted session state with {} route(s)",
            state.open_routes.len()
        )),
        Err(error) => log(&format!("failed to persist session state: {error}")),
    }
}

// Restored routes are announced to the already-open shell rather than
// force-opening one window per route; the content layer decides how to
// rebuild its workspace.
pub(crate) fn start(app_handle: &AppHandle) {
    let state = read_session_state(runtime_paths::data_root_dir().as_deref());
    if state.open_routes.is_empty() {
        append_startup_log("session manager started with nothing to restore");
        return;
    }
    append_startup_log(&format!(
        "session manager restoring {} route(s)",
        state.open_routes.len()
    ));
    window_events::emit_to_all_windows(
        app_handle,
        SESSION_RESTORED_EVENT,
        state.open_routes,
        append_desktop_log,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_state_survives_a_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let state = SessionState {
            open_routes: vec!["/drive".to_string(), "/request/drive/open/abc".to_string()],
            saved_at: Some("2025-03-01T10:00:00+00:00".to_string()),
        };
        write_session_state(&state, Some(dir.path())).unwrap();
        assert_eq!(read_session_state(Some(dir.path())), state);
    }

    #[test]
    fn a_missing_file_reads_as_an_empty_session() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(read_session_state(Some(dir.path())), SessionState::default());
        assert_eq!(read_session_state(None), SessionState::default());
    }

    #[test]
    fn a_corrupt_file_reads_as_an_empty_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = runtime_paths::session_state_path_in(dir.path());
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not valid json").unwrap();
        assert_eq!(read_session_state(Some(dir.path())), SessionState::default());
    }

    #[test]
    fn writing_without_a_data_root_fails_loudly() {
        let state = SessionState::default();
        assert!(write_session_state(&state, None).is_err());
    }

    #[test]
    fn only_content_windows_are_restorable() {
        assert!(is_restorable_label("main"));
        assert!(is_restorable_label("window-3"));
        assert!(!is_restorable_label("search-main"));
        assert!(!is_restorable_label("task-manager"));
    }
}
