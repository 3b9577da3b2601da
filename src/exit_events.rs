use tauri::{AppHandle, ExitRequestApi, Manager};

use crate::{append_desktop_log, append_shutdown_log, AppState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ExitDecision {
    Proceed,
    PreventExit,
}

// A window-close exit (no explicit code) is suppressed on platforms where
// applications stay resident without windows. An explicit exit code or an
// in-progress shutdown always wins.
pub(crate) fn decide_exit_requested(
    explicit_exit_code: Option<i32>,
    keeps_background_apps: bool,
    shutting_down: bool,
) -> ExitDecision {
    if explicit_exit_code.is_some() || shutting_down {
        return ExitDecision::Proceed;
    }
    if keeps_background_apps {
        ExitDecision::PreventExit
    } else {
        ExitDecision::Proceed
    }
}

pub(crate) fn platform_keeps_background_apps() -> bool {
    cfg!(target_os = "macos")
}

pub(crate) fn handle_exit_requested(
    app_handle: &AppHandle,
    api: &ExitRequestApi,
    exit_code: Option<i32>,
) {
    let state = app_handle.state::<AppState>();
    let decision = decide_exit_requested(
        exit_code,
        platform_keeps_background_apps(),
        state.is_shutting_down(),
    );
    match decision {
        ExitDecision::PreventExit => {
            append_desktop_log("all windows closed; staying resident in the background");
            api.prevent_exit();
        }
        ExitDecision::Proceed => {
            if state.begin_shutdown() {
                append_shutdown_log("exit requested, beginning shutdown");
            }
        }
    }
}

pub(crate) fn handle_exit_event(app_handle: &AppHandle) {
    let state = app_handle.state::<AppState>();
    if state.begin_shutdown() {
        append_shutdown_log("exit event received without a prior shutdown request");
    }
    append_shutdown_log("desktop process exiting");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_close_keeps_background_platforms_alive() {
        assert_eq!(decide_exit_requested(None, true, false), ExitDecision::PreventExit);
    }

    #[test]
    fn window_close_exits_everywhere_else() {
        assert_eq!(decide_exit_requested(None, false, false), ExitDecision::Proceed);
    }

    #[test]
    fn explicit_exit_codes_always_proceed() {
        assert_eq!(decide_exit_requested(Some(0), true, false), ExitDecision::Proceed);
        assert_eq!(decide_exit_requested(Some(1), true, false), ExitDecision::Proceed);
    }

    #[test]
    fn an_in_progress_shutdown_is_never_suppressed() {
        assert_eq!(decide_exit_requested(None, true, true), ExitDecision::Proceed);
    }
}
