use tauri::{AppHandle, Manager, Runtime, WebviewUrl, WebviewWindowBuilder};

use crate::{window_manager, SEARCH_OVERLAY_ROUTE, SEARCH_WINDOW_PREFIX};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FindDecision {
    IgnoreSearchView,
    FocusExisting,
    OpenNew,
}

// Find from a search view is swallowed; otherwise a window gets at most one
// overlay, and repeats focus it.
pub(crate) fn decide_find(source_is_search_view: bool, overlay_open: bool) -> FindDecision {
    if source_is_search_view {
        FindDecision::IgnoreSearchView
    } else if overlay_open {
        FindDecision::FocusExisting
    } else {
        FindDecision::OpenNew
    }
}

pub(crate) fn is_search_view(window_label: &str, route_path: &str) -> bool {
    window_label.starts_with(SEARCH_WINDOW_PREFIX) || route_path.starts_with(SEARCH_OVERLAY_ROUTE)
}

pub(crate) fn overlay_label_for(window_label: &str) -> String {
    format!("{SEARCH_WINDOW_PREFIX}{window_label}")
}

fn parent_label_for(overlay_label: &str) -> Option<&str> {
    overlay_label.strip_prefix(SEARCH_WINDOW_PREFIX)
}

fn window_route_path<R: Runtime>(app_handle: &AppHandle<R>, window_label: &str) -> String {
    app_handle
        .get_webview_window(window_label)
        .and_then(|window| window.url().ok())
        .map(|url| url.path().to_string())
        .unwrap_or_default()
}

pub(crate) fn handle_find_action<R, F>(app_handle: &AppHandle<R>, log: F)
where
    R: Runtime,
    F: Fn(&str),
{
    let Some(source_label) = window_manager::source_window_label(app_handle) else {
        log("find action dropped: no window to search in");
        return;
    };
    let overlay_label = overlay_label_for(&source_label);
    let existing = app_handle.get_webview_window(&overlay_label);
    let route_path = window_route_path(app_handle, &source_label);
    match decide_find(is_search_view(&source_label, &route_path), existing.is_some()) {
        FindDecision::IgnoreSearchView => {}
        FindDecision::FocusExisting => {
            if let Some(overlay) = existing {
                match overlay.set_focus() {
                    Ok(()) => log(&format!("focused the search overlay for {source_label}")),
                    Err(error) => log(&format!(
                        "failed to focus the search overlay for {source_label}: {error}"
                    )),
                }
            }
        }
        FindDecision::OpenNew => open_overlay(app_handle, &source_label, &overlay_label, &log),
    }
}

fn open_overlay<R, F>(app_handle: &AppHandle<R>, source_label: &str, overlay_label: &str, log: &F)
where
    R: Runtime,
    F: Fn(&str),
{
    let route = format!("{SEARCH_OVERLAY_ROUTE}/{source_label}");
    let result = WebviewWindowBuilder::new(app_handle, overlay_label, WebviewUrl::App(route.into()))
        .title("Find")
        .inner_size(460.0, 72.0)
        .resizable(false)
        .always_on_top(true)
        .build();
    match result {
        Ok(_) => log(&format!("opened a search overlay for {source_label}")),
        Err(error) => log(&format!(
            "failed to open a search overlay for {source_label}: {error}"
        )),
    }
}

// A parent window going away takes its overlay with it; overlays never
// outlive the content they search.
pub(crate) fn handle_window_destroyed<R, F>(app_handle: &AppHandle<R>, destroyed_label: &str, log: F)
where
    R: Runtime,
    F: Fn(&str),
{
    if parent_label_for(destroyed_label).is_some() {
        return;
    }
    let overlay_label = overlay_label_for(destroyed_label);
    if let Some(overlay) = app_handle.get_webview_window(&overlay_label) {
        match overlay.close() {
            Ok(()) => log(&format!("closed the orphaned search overlay {overlay_label}")),
            Err(error) => log(&format!(
                "failed to close the orphaned search overlay {overlay_label}: {error}"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_views_never_get_nested_search() {
        assert_eq!(decide_find(true, false), FindDecision::IgnoreSearchView);
        assert_eq!(decide_find(true, true), FindDecision::IgnoreSearchView);
    }

    #[test]
    fn second_find_focuses_instead_of_reopening() {
        assert_eq!(decide_find(false, false), FindDecision::OpenNew);
        assert_eq!(decide_find(false, true), FindDecision::FocusExisting);
    }

    #[test]
    fn search_views_are_recognized_by_label_or_route() {
        assert!(is_search_view("search-main", "/"));
        assert!(is_search_view("main", "/search-overlay/main"));
        assert!(!is_search_view("main", "/drive"));
    }

    #[test]
    fn overlay_labels_derive_from_their_parent() {
        assert_eq!(overlay_label_for("main"), "search-main");
        assert_eq!(parent_label_for("search-main"), Some("main"));
        assert_eq!(parent_label_for("main"), None);
    }

    /// Uses Tauri test infrastructure that may not work on Windows CI
    #[test]
    #[cfg(not(target_os = "windows"))]
    fn a_window_gets_at_most_one_overlay() {
        let app = tauri::test::mock_app();
        app.manage(crate::WindowRegistry::default());
        let handle = app.handle();

        window_manager::open(handle, None, |_| {}).unwrap();
        handle.state::<crate::WindowRegistry>().note_focused("main");

        handle_find_action(handle, |_| {});
        handle_find_action(handle, |_| {});

        let overlays = handle
            .webview_windows()
            .keys()
            .filter(|label| label.starts_with(SEARCH_WINDOW_PREFIX))
            .count();
        assert_eq!(overlays, 1);
    }
}
