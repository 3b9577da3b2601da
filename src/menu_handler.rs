use tauri::{AppHandle, Manager};

use crate::menu_actions::{route_action_id, AppAction, RoutedAction};
use crate::{
    append_desktop_log, append_shutdown_log, content_search, help_links, session_manager,
    window_events, window_manager, AppState,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RouteOutcome<'a> {
    ForwardCommand(&'static str),
    ForwardRequestAction(&'a str),
    Quit,
    OpenNewWindow,
    OpenHelp(&'static str),
    OpenTaskManager,
    OpenContentSearch,
    Ignore,
}

// Unknown identifiers map to Ignore; a stale menu id from an older content
// build must not take the shell down.
pub(crate) fn decide_route(action_id: &str) -> RouteOutcome<'_> {
    match route_action_id(action_id) {
        RoutedAction::Application(action) => match action {
            AppAction::OpenSaved
            | AppAction::OpenHistory
            | AppAction::OpenDrive
            | AppAction::OpenMessages
            | AppAction::OpenThemes
            | AppAction::ImportData
            | AppAction::ExportData
            | AppAction::ShowSettings
            | AppAction::OpenCookieManager
            | AppAction::OpenHostsEditor
            | AppAction::LoginExternalWebservice
            | AppAction::About
            | AppAction::OpenLicense => RouteOutcome::ForwardCommand(action.command_name()),
            AppAction::Quit => RouteOutcome::Quit,
            AppAction::NewWindow => RouteOutcome::OpenNewWindow,
            AppAction::TaskManager => RouteOutcome::OpenTaskManager,
            AppAction::Find => RouteOutcome::OpenContentSearch,
            AppAction::OpenPrivacyPolicy
            | AppAction::OpenDocumentation
            | AppAction::OpenFaq
            | AppAction::OpenDiscussions
            | AppAction::ReportIssue
            | AppAction::SearchIssues
            | AppAction::WebSessionHelp => RouteOutcome::OpenHelp(action.command_name()),
        },
        RoutedAction::Request(suffix) => RouteOutcome::ForwardRequestAction(suffix),
        RoutedAction::Unrouted => RouteOutcome::Ignore,
    }
}

pub(crate) fn handle_menu_event(app_handle: &AppHandle, action_id: &str) {
    match decide_route(action_id) {
        RouteOutcome::ForwardCommand(command) => {
            match window_manager::source_window_label(app_handle) {
                Some(label) => window_events::emit_command_to_window(
                    app_handle,
                    &label,
                    command,
                    append_desktop_log,
                ),
                None => append_desktop_log(&format!(
                    "dropped command {command}: no window to receive it"
                )),
            }
        }
        RouteOutcome::ForwardRequestAction(suffix) => {
            match window_manager::source_window_label(app_handle) {
                Some(label) => window_events::emit_request_action_to_window(
                    app_handle,
                    &label,
                    suffix,
                    append_desktop_log,
                ),
                None => append_desktop_log(&format!(
                    "dropped request action {suffix}: no window to receive it"
                )),
            }
        }
        RouteOutcome::Quit => {
            let state = app_handle.state::<AppState>();
            if state.begin_shutdown() {
                append_shutdown_log("quit action received, exiting desktop process");
                session_manager::persist_open_windows(app_handle, append_shutdown_log);
                app_handle.exit(0);
            } else {
                append_shutdown_log("quit action ignored: shutdown already in progress");
            }
        }
        RouteOutcome::OpenNewWindow => {
            if let Err(error) = window_manager::open(app_handle, None, append_desktop_log) {
                append_desktop_log(&format!("new window action failed: {error}"));
            }
        }
        RouteOutcome::OpenHelp(command) => help_links::help_with(command, append_desktop_log),
        RouteOutcome::OpenTaskManager => {
            window_manager::open_task_manager(app_handle, append_desktop_log)
        }
        RouteOutcome::OpenContentSearch => {
            content_search::handle_find_action(app_handle, append_desktop_log)
        }
        RouteOutcome::Ignore => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_commands_forward_their_command_name() {
        assert_eq!(
            decide_route("application-open-saved"),
            RouteOutcome::ForwardCommand("open-saved")
        );
        assert_eq!(
            decide_route("application-show-settings"),
            RouteOutcome::ForwardCommand("show-settings")
        );
        assert_eq!(
            decide_route("application-about"),
            RouteOutcome::ForwardCommand("about")
        );
    }

    #[test]
    fn shell_actions_stay_in_the_shell() {
        assert_eq!(decide_route("application-quit"), RouteOutcome::Quit);
        assert_eq!(decide_route("application-new-window"), RouteOutcome::OpenNewWindow);
        assert_eq!(
            decide_route("application-task-manager"),
            RouteOutcome::OpenTaskManager
        );
        assert_eq!(decide_route("application-find"), RouteOutcome::OpenContentSearch);
    }

    #[test]
    fn help_actions_carry_their_command_name() {
        assert_eq!(
            decide_route("application-open-faq"),
            RouteOutcome::OpenHelp("open-faq")
        );
        assert_eq!(
            decide_route("application-report-issue"),
            RouteOutcome::OpenHelp("report-issue")
        );
    }

    #[test]
    fn request_actions_forward_the_suffix_verbatim() {
        assert_eq!(
            decide_route("request-refresh-drive-listing"),
            RouteOutcome::ForwardRequestAction("refresh-drive-listing")
        );
    }

    #[test]
    fn unknown_identifiers_are_ignored() {
        assert_eq!(decide_route("application-self-destruct"), RouteOutcome::Ignore);
        assert_eq!(decide_route("settings"), RouteOutcome::Ignore);
        assert_eq!(decide_route("undo"), RouteOutcome::Ignore);
        assert_eq!(decide_route(""), RouteOutcome::Ignore);
    }
}
