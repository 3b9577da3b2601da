use tauri::{AppHandle, Manager, RunEvent, WindowEvent};
use tauri_plugin_deep_link::DeepLinkExt;

use crate::lifecycle_state::ActivationDecision;
use crate::{
    append_desktop_log, append_startup_log, content_search, exit_events, menu_handler,
    protocol_urls, session_manager, startup_task, test_driver, window_manager, AppState,
    StartupOptions, UpdateStatusState, WindowRegistry, DESKTOP_LOG_FILE, PRODUCT_VERSION,
};

// OS activation (dock or taskbar click). Reopens a window only when none is
// left and the process is not shutting down.
pub(crate) fn handle_activation(app_handle: &AppHandle) {
    let decision = app_handle
        .state::<AppState>()
        .activate(window_manager::has_window(app_handle));
    if decision == ActivationDecision::OpenNewWindow {
        if let Err(error) = window_manager::open(app_handle, None, append_desktop_log) {
            append_desktop_log(&format!("failed to reopen a window on activation: {error}"));
        }
    }
}

pub(crate) fn run() {
    let startup_options = StartupOptions::from_process();

    append_startup_log(&format!("desktop process starting (version {PRODUCT_VERSION})"));
    append_startup_log(&format!(
        "desktop log path: {}",
        crate::logging::resolve_desktop_log_path(
            crate::runtime_paths::data_root_dir(),
            DESKTOP_LOG_FILE,
        )
        .display()
    ));

    tauri::Builder::default()
        .plugin(tauri_plugin_single_instance::init(|app, argv, _cwd| {
            append_desktop_log("second instance launched; forwarding to the primary process");
            if let Some(window) = app.webview_windows().values().next() {
                if let Err(error) = window.set_focus() {
                    append_desktop_log(&format!("failed to focus the primary instance: {error}"));
                }
            }
            if let Some(url) = protocol_urls::find_protocol_url_in_args(&argv) {
                protocol_urls::handle_incoming_url(app, url, append_desktop_log);
            }
        }))
        .plugin(tauri_plugin_deep_link::init())
        .plugin(tauri_plugin_process::init())
        .plugin(tauri_plugin_updater::Builder::new().build())
        .manage(startup_options.clone())
        .manage(AppState::default())
        .manage(WindowRegistry::default())
        .manage(UpdateStatusState::default())
        .invoke_handler(tauri::generate_handler![
            crate::bridge_commands::bridge_is_desktop_runtime,
            crate::bridge_commands::bridge_lifecycle_phase,
            crate::bridge_commands::bridge_update_status,
            crate::bridge_commands::bridge_open_external_url,
        ])
        .on_window_event(|window, event| match event {
            WindowEvent::Focused(true) => {
                window_manager::note_focused_window(window.app_handle(), window.label());
            }
            WindowEvent::CloseRequested { .. } => {
                // Snapshot while the closing window is still part of the
                // session; restoring it on next launch is the point.
                if session_manager::is_restorable_label(window.label()) {
                    session_manager::persist_open_windows(window.app_handle(), append_desktop_log);
                }
            }
            WindowEvent::Destroyed => {
                window_manager::note_window_destroyed(window.app_handle(), window.label());
                content_search::handle_window_destroyed(
                    window.app_handle(),
                    window.label(),
                    append_desktop_log,
                );
            }
            _ => {}
        })
        .on_menu_event(|app, event| menu_handler::handle_menu_event(app, event.id().as_ref()))
        .setup(move |app| {
            let app_handle = app.handle().clone();
            if app_handle.state::<AppState>().mark_ready() {
                append_startup_log("application ready");
            }

            let deep_link_handle = app_handle.clone();
            app.deep_link().on_open_url(move |event| {
                for url in event.urls() {
                    protocol_urls::handle_incoming_url(
                        &deep_link_handle,
                        url.as_str(),
                        append_desktop_log,
                    );
                }
            });

            if startup_options.test_driver {
                test_driver::install(&app_handle);
            }

            startup_task::spawn_ready_sequence(app_handle);
            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|app_handle, event| match event {
            #[cfg(target_os = "macos")]
            RunEvent::Reopen { has_visible_windows, .. } => {
                append_desktop_log(&format!(
                    "activation signal received (visible_windows={has_visible_windows})"
                ));
                handle_activation(app_handle);
            }
            RunEvent::ExitRequested { api, code, .. } => {
                exit_events::handle_exit_requested(app_handle, &api, code);
            }
            RunEvent::Exit => {
                exit_events::handle_exit_event(app_handle);
            }
            _ => {}
        });
}
