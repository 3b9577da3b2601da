use tauri::{AppHandle, Listener};

use crate::{
    append_desktop_log, append_startup_log, app_runtime, menu_handler, protocol_urls,
    TEST_ACTIVATE_EVENT, TEST_MENU_ACTION_EVENT, TEST_OPEN_URL_EVENT,
};

// Only installed when the test driver environment variable is set;
// production launches never register these listeners.
pub(crate) fn install(app_handle: &AppHandle) {
    let menu_handle = app_handle.clone();
    app_handle.listen(TEST_MENU_ACTION_EVENT, move |event| {
        match serde_json::from_str::<String>(event.payload()) {
            Ok(action_id) => menu_handler::handle_menu_event(&menu_handle, &action_id),
            Err(error) => append_desktop_log(&format!(
                "ignored malformed test menu action payload: {error}"
            )),
        }
    });

    let url_handle = app_handle.clone();
    app_handle.listen(TEST_OPEN_URL_EVENT, move |event| {
        match serde_json::from_str::<String>(event.payload()) {
            Ok(url) => protocol_urls::handle_incoming_url(&url_handle, &url, append_desktop_log),
            Err(error) => append_desktop_log(&format!(
                "ignored malformed test open-url payload: {error}"
            )),
        }
    });

    let activation_handle = app_handle.clone();
    app_handle.listen(TEST_ACTIVATE_EVENT, move |_event| {
        app_runtime::handle_activation(&activation_handle);
    });

    append_startup_log("test driver interface installed");
}
