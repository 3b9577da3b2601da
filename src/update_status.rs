use std::time::Instant;

use serde::Serialize;
use tauri::{AppHandle, Listener, Manager};
use tauri_plugin_updater::UpdaterExt;

use crate::{
    append_desktop_log, append_startup_log, window_events, UpdateStatusState,
    UPDATE_STATUS_CHANGED_EVENT, UPDATE_STATUS_REQUEST_EVENT,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateCheckSummary {
    pub(crate) current_version: String,
    pub(crate) latest_version: Option<String>,
    pub(crate) has_update: bool,
}

impl UpdateCheckSummary {
    fn update_available(current_version: String, latest_version: String) -> Self {
        Self {
            current_version,
            latest_version: Some(latest_version),
            has_update: true,
        }
    }

    fn up_to_date(current_version: String) -> Self {
        Self {
            latest_version: Some(current_version.clone()),
            current_version,
            has_update: false,
        }
    }

    fn unknown(current_version: String) -> Self {
        Self {
            current_version,
            latest_version: None,
            has_update: false,
        }
    }
}

// Guards against a feed offering a downgrade. Non-semver versions fall
// back to the updater's own comparison.
pub(crate) fn is_newer_version(current: &str, offered: &str) -> bool {
    match (semver::Version::parse(current), semver::Version::parse(offered)) {
        (Ok(current), Ok(offered)) => offered > current,
        _ => true,
    }
}

// One silent check at startup. The result is broadcast and remembered;
// windows opened later ask instead of triggering another network call.
pub(crate) fn start(app_handle: &AppHandle) {
    let check_handle = app_handle.clone();
    tauri::async_runtime::spawn(async move {
        let check_started = Instant::now();
        let current_version = check_handle.package_info().version.to_string();
        let updater = match check_handle.updater() {
            Ok(updater) => updater,
            Err(error) => {
                append_startup_log(&format!("failed to initialize the update checker: {error}"));
                return;
            }
        };
        append_startup_log("checking for desktop updates");
        let summary = match updater.check().await {
            Ok(Some(update)) => {
                let offered = update.version.to_string();
                if is_newer_version(&current_version, &offered) {
                    append_desktop_log(&format!(
                        "desktop update {offered} available (currently {current_version}, checked in {}ms)",
                        check_started.elapsed().as_millis()
                    ));
                    UpdateCheckSummary::update_available(current_version, offered)
                } else {
                    append_desktop_log(&format!(
                        "update feed offered {offered}, which is not newer than {current_version}; ignoring"
                    ));
                    UpdateCheckSummary::up_to_date(current_version)
                }
            }
            Ok(None) => {
                append_desktop_log(&format!(
                    "desktop app is up to date ({current_version}, checked in {}ms)",
                    check_started.elapsed().as_millis()
                ));
                UpdateCheckSummary::up_to_date(current_version)
            }
            Err(error) => {
                // A missing release manifest before the first publish is normal.
                append_desktop_log(&format!("update check failed (silent): {error}"));
                UpdateCheckSummary::unknown(current_version)
            }
        };
        record_and_broadcast(&check_handle, summary);
    });
}

fn record_and_broadcast(app_handle: &AppHandle, summary: UpdateCheckSummary) {
    if let Some(state) = app_handle.try_state::<UpdateStatusState>() {
        state.record(summary.clone());
    }
    window_events::emit_to_all_windows(
        app_handle,
        UPDATE_STATUS_CHANGED_EVENT,
        summary,
        append_desktop_log,
    );
}

pub(crate) fn current_summary(app_handle: &AppHandle) -> UpdateCheckSummary {
    app_handle
        .try_state::<UpdateStatusState>()
        .and_then(|state| state.last_summary())
        .unwrap_or_else(|| {
            UpdateCheckSummary::unknown(app_handle.package_info().version.to_string())
        })
}

pub(crate) fn listen(app_handle: &AppHandle) {
    let reply_handle = app_handle.clone();
    app_handle.listen(UPDATE_STATUS_REQUEST_EVENT, move |_event| {
        let summary = current_summary(&reply_handle);
        window_events::emit_to_all_windows(
            &reply_handle,
            UPDATE_STATUS_CHANGED_EVENT,
            summary,
            append_desktop_log,
        );
    });
    append_startup_log("update status listener started");
}
