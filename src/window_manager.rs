use serde::Deserialize;
use tauri::{
    AppHandle, Listener, Manager, Runtime, WebviewUrl, WebviewWindow, WebviewWindowBuilder,
};

use crate::{
    append_desktop_log, append_startup_log, WindowRegistry, DEFAULT_WINDOW_ROUTE,
    EXTRA_WINDOW_LABEL_PREFIX, MAIN_WINDOW_LABEL, TASK_MANAGER_ROUTE, TASK_MANAGER_WINDOW_LABEL,
    WINDOW_OPEN_REQUEST_EVENT,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OpenWindowRequest {
    #[serde(default)]
    path: Option<String>,
}

fn window_label_for_index(index: u64) -> String {
    if index <= 1 {
        MAIN_WINDOW_LABEL.to_string()
    } else {
        format!("{EXTRA_WINDOW_LABEL_PREFIX}{index}")
    }
}

// Labels are never reused within a process lifetime.
pub(crate) fn open<R, F>(
    app_handle: &AppHandle<R>,
    path: Option<&str>,
    log: F,
) -> Result<WebviewWindow<R>, String>
where
    R: Runtime,
    F: Fn(&str),
{
    let registry = app_handle.state::<WindowRegistry>();
    let label = window_label_for_index(registry.allocate_window_index());
    let route = path.unwrap_or(DEFAULT_WINDOW_ROUTE);
    let window = WebviewWindowBuilder::new(app_handle, &label, WebviewUrl::App(route.into()))
        .title("ArcFile")
        .inner_size(1180.0, 760.0)
        .min_inner_size(720.0, 480.0)
        .build()
        .map_err(|error| format!("Failed to create window {label}: {error}"))?;
    log(&format!("opened window {label} at {route}"));
    Ok(window)
}

pub(crate) fn open_deep_link<R, F>(
    app_handle: &AppHandle<R>,
    path: &str,
    log: F,
) -> Result<(), String>
where
    R: Runtime,
    F: Fn(&str),
{
    open(app_handle, Some(path), log).map(|_| ())
}

// The task manager is a singleton; a second request focuses the existing
// window instead of opening another.
pub(crate) fn open_task_manager<R, F>(app_handle: &AppHandle<R>, log: F)
where
    R: Runtime,
    F: Fn(&str),
{
    if let Some(existing) = app_handle.get_webview_window(TASK_MANAGER_WINDOW_LABEL) {
        match existing.set_focus() {
            Ok(()) => log("focused the existing task manager window"),
            Err(error) => log(&format!("failed to focus the task manager window: {error}")),
        }
        return;
    }
    let result = WebviewWindowBuilder::new(
        app_handle,
        TASK_MANAGER_WINDOW_LABEL,
        WebviewUrl::App(TASK_MANAGER_ROUTE.into()),
    )
    .title("ArcFile Task Manager")
    .inner_size(900.0, 600.0)
    .build();
    match result {
        Ok(_) => log("opened the task manager window"),
        Err(error) => log(&format!("failed to open the task manager window: {error}")),
    }
}

pub(crate) fn has_window<R: Runtime>(app_handle: &AppHandle<R>) -> bool {
    !app_handle.webview_windows().is_empty()
}

// Which window a shell action lands in: the focus hint when that window
// still exists, otherwise the main window, otherwise any.
pub(crate) fn source_window_label<R: Runtime>(app_handle: &AppHandle<R>) -> Option<String> {
    let registry = app_handle.state::<WindowRegistry>();
    if let Some(label) = registry.focused_label() {
        if app_handle.get_webview_window(&label).is_some() {
            return Some(label);
        }
    }
    if app_handle.get_webview_window(MAIN_WINDOW_LABEL).is_some() {
        return Some(MAIN_WINDOW_LABEL.to_string());
    }
    app_handle.webview_windows().keys().next().cloned()
}

pub(crate) fn note_focused_window<R: Runtime>(app_handle: &AppHandle<R>, window_label: &str) {
    app_handle.state::<WindowRegistry>().note_focused(window_label);
}

pub(crate) fn note_window_destroyed<R: Runtime>(app_handle: &AppHandle<R>, window_label: &str) {
    app_handle
        .state::<WindowRegistry>()
        .clear_focused_if(window_label);
}

fn parse_open_request(payload: &str) -> Option<String> {
    serde_json::from_str::<OpenWindowRequest>(payload)
        .ok()
        .and_then(|request| request.path)
}

pub(crate) fn listen(app_handle: &AppHandle) {
    let open_handle = app_handle.clone();
    app_handle.listen(WINDOW_OPEN_REQUEST_EVENT, move |event| {
        let path = parse_open_request(event.payload());
        if let Err(error) = open(&open_handle, path.as_deref(), append_desktop_log) {
            append_desktop_log(&format!("window open request failed: {error}"));
        }
    });
    append_startup_log("window manager listening for open requests");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_start_at_main_and_count_up() {
        assert_eq!(window_label_for_index(1), "main");
        assert_eq!(window_label_for_index(2), "window-2");
        assert_eq!(window_label_for_index(7), "window-7");
    }

    #[test]
    fn open_requests_accept_a_path_or_nothing() {
        assert_eq!(
            parse_open_request(r#"{"path":"/drive"}"#),
            Some("/drive".to_string())
        );
        assert_eq!(parse_open_request(r#"{}"#), None);
        assert_eq!(parse_open_request("not json"), None);
        assert_eq!(parse_open_request(""), None);
    }

    /// Uses Tauri test infrastructure that may not work on Windows CI
    #[test]
    #[cfg(not(target_os = "windows"))]
    fn windows_open_with_unique_labels() {
        let app = tauri::test::mock_app();
        app.manage(WindowRegistry::default());
        let handle = app.handle();

        let first = open(handle, None, |_| {}).unwrap();
        assert_eq!(first.label(), "main");
        let second = open(handle, Some("/request/drive/open/abc"), |_| {}).unwrap();
        assert_eq!(second.label(), "window-2");
        assert!(has_window(handle));
    }

    #[test]
    #[cfg(not(target_os = "windows"))]
    fn stale_focus_hints_fall_back_to_the_main_window() {
        let app = tauri::test::mock_app();
        app.manage(WindowRegistry::default());
        let handle = app.handle();

        open(handle, None, |_| {}).unwrap();
        note_focused_window(handle, "window-9");
        assert_eq!(source_window_label(handle).as_deref(), Some("main"));
    }

    #[test]
    #[cfg(not(target_os = "windows"))]
    fn task_manager_stays_a_singleton() {
        let app = tauri::test::mock_app();
        app.manage(WindowRegistry::default());
        let handle = app.handle();

        open_task_manager(handle, |_| {});
        open_task_manager(handle, |_| {});
        let task_managers = handle
            .webview_windows()
            .keys()
            .filter(|label| label.as_str() == TASK_MANAGER_WINDOW_LABEL)
            .count();
        assert_eq!(task_managers, 1);
    }
}
