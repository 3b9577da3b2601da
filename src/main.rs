#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app_constants;
mod app_helpers;
mod app_runtime;
mod app_types;
mod bridge_commands;
mod cloud_export;
mod content_search;
mod environment;
mod exit_events;
mod help_links;
mod identity;
mod lifecycle_state;
mod logging;
mod menu_actions;
mod menu_handler;
mod menu_setup;
mod prompts;
mod protocol_urls;
mod runtime_paths;
mod session_manager;
mod startup_options;
mod startup_plan;
mod startup_task;
mod test_driver;
mod ui_dispatch;
mod update_status;
mod window_events;
mod window_manager;

pub(crate) use app_constants::*;
pub(crate) use app_helpers::{append_desktop_log, append_shutdown_log, append_startup_log};
pub(crate) use app_types::{AppState, BridgeResult, UpdateStatusState, WindowRegistry};
pub(crate) use startup_options::StartupOptions;

fn main() {
    app_runtime::run();
}
