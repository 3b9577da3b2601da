use tauri::{AppHandle, Manager};

use crate::startup_plan::{ListenerTarget, ReadyStep};
use crate::{
    append_startup_log, cloud_export, environment, identity, menu_setup, prompts, protocol_urls,
    session_manager, startup_plan, update_status, window_manager, AppState, StartupOptions,
};

pub(crate) fn spawn_ready_sequence(app_handle: AppHandle) {
    tauri::async_runtime::spawn(async move {
        run_ready_sequence(&app_handle).await;
    });
}

async fn run_ready_sequence(app_handle: &AppHandle) {
    let options = app_handle.state::<StartupOptions>().inner().clone();
    if options.inspect_mode {
        append_startup_log("inspection flag detected; the update checker is disabled");
    }
    for step in startup_plan::ready_plan(options.inspect_mode) {
        execute_ready_step(app_handle, &options, step).await;
    }
    append_startup_log("ready sequence complete");
}

async fn execute_ready_step(app_handle: &AppHandle, options: &StartupOptions, step: ReadyStep) {
    match step {
        ReadyStep::PrepareEnvironment => {
            match environment::prepare_environment(app_handle).await {
                Ok(()) => append_startup_log("runtime environment prepared"),
                Err(error) => {
                    append_startup_log("environment preparation failed, continuing degraded");
                    append_startup_log(&format!("environment preparation error: {error}"));
                }
            }
        }
        ReadyStep::StartListener(target) => start_listener(app_handle, target),
        ReadyStep::OpenInitialWindow => open_initial_window(app_handle, options),
        ReadyStep::StartUpdateChecker => update_status::start(app_handle),
        ReadyStep::InstallApplicationMenu => {
            menu_setup::install_application_menu(app_handle, append_startup_log)
        }
        ReadyStep::StartSessionManager => session_manager::start(app_handle),
    }
}

fn start_listener(app_handle: &AppHandle, target: ListenerTarget) {
    match target {
        ListenerTarget::Identity => identity::listen(app_handle),
        ListenerTarget::WindowManager => window_manager::listen(app_handle),
        ListenerTarget::Prompts => prompts::listen(app_handle),
        ListenerTarget::UpdateStatus => update_status::listen(app_handle),
        ListenerTarget::CloudExport => cloud_export::listen(app_handle),
    }
}

// The first window honors a protocol URL from the launch arguments; any
// other launch lands on the default route.
fn open_initial_window(app_handle: &AppHandle, options: &StartupOptions) {
    let initial_route = options
        .launch_url
        .as_deref()
        .and_then(protocol_urls::decode_protocol_url)
        .map(|request| protocol_urls::navigation_path(&request));
    if options.launch_url.is_some() && initial_route.is_none() {
        append_startup_log("launch url was not a drive handoff; opening the default route");
    }
    match window_manager::open(app_handle, initial_route.as_deref(), append_startup_log) {
        Ok(_) => app_handle.state::<AppState>().mark_active(),
        Err(error) => append_startup_log(&format!("failed to open the initial window: {error}")),
    }
}
