use serde::Serialize;
use tauri::{AppHandle, Emitter, Runtime};

use crate::{COMMAND_EVENT, REQUEST_ACTION_EVENT};

// The payload is the bare command name; the window's content layer owns
// what it means.
pub(crate) fn emit_command_to_window<R, F>(
    app_handle: &AppHandle<R>,
    window_label: &str,
    command: &str,
    log: F,
) where
    R: Runtime,
    F: Fn(&str),
{
    match app_handle.emit_to(window_label, COMMAND_EVENT, command) {
        Ok(()) => log(&format!("forwarded command {command} to window {window_label}")),
        Err(error) => log(&format!(
            "failed to forward command {command} to window {window_label}: {error}"
        )),
    }
}

pub(crate) fn emit_request_action_to_window<R, F>(
    app_handle: &AppHandle<R>,
    window_label: &str,
    action_suffix: &str,
    log: F,
) where
    R: Runtime,
    F: Fn(&str),
{
    match app_handle.emit_to(window_label, REQUEST_ACTION_EVENT, action_suffix) {
        Ok(()) => log(&format!(
            "forwarded request action {action_suffix} to window {window_label}"
        )),
        Err(error) => log(&format!(
            "failed to forward request action {action_suffix} to window {window_label}: {error}"
        )),
    }
}

pub(crate) fn emit_to_all_windows<R, F, S>(
    app_handle: &AppHandle<R>,
    event: &str,
    payload: S,
    log: F,
) where
    R: Runtime,
    F: Fn(&str),
    S: Serialize + Clone,
{
    if let Err(error) = app_handle.emit(event, payload) {
        log(&format!("failed to broadcast {event}: {error}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Uses Tauri test infrastructure that may not work on Windows CI
    #[test]
    #[cfg(not(target_os = "windows"))]
    fn forwarded_events_are_scoped_to_one_window() {
        let app = tauri::test::mock_app();
        let handle = app.handle();
        tauri::WebviewWindowBuilder::new(handle, "main", tauri::WebviewUrl::App("/".into()))
            .build()
            .unwrap();

        let lines = RefCell::new(Vec::new());
        emit_command_to_window(handle, "main", "open-saved", |line: &str| {
            lines.borrow_mut().push(line.to_string())
        });
        emit_request_action_to_window(handle, "main", "sign-out", |line: &str| {
            lines.borrow_mut().push(line.to_string())
        });

        let lines = lines.into_inner();
        assert_eq!(
            lines,
            vec![
                "forwarded command open-saved to window main".to_string(),
                "forwarded request action sign-out to window main".to_string(),
            ]
        );
    }
}
