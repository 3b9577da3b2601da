use tauri::AppHandle;

// Menu and window mutations must happen on the main thread on macOS;
// everything UI-shaped funnels through here.
pub(crate) fn run_on_main_thread_dispatch<F>(
    app_handle: &AppHandle,
    description: &str,
    task: F,
) -> Result<(), String>
where
    F: FnOnce(&AppHandle) + Send + 'static,
{
    let task_handle = app_handle.clone();
    app_handle
        .run_on_main_thread(move || task(&task_handle))
        .map_err(|error| format!("Failed to dispatch {description} to the main thread: {error}"))
}
