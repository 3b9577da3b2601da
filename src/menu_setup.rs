use tauri::menu::{Menu, MenuItem, SubmenuBuilder};
use tauri::{AppHandle, Wry};

use crate::menu_actions::AppAction;
use crate::ui_dispatch;

// Installed late in the ready sequence; a menu action must never race
// collaborator startup.
pub(crate) fn install_application_menu(app_handle: &AppHandle, log: fn(&str)) {
    let dispatch_result = ui_dispatch::run_on_main_thread_dispatch(
        app_handle,
        "application menu install",
        move |main_app| match build_application_menu(main_app) {
            Ok(menu) => match main_app.set_menu(menu) {
                Ok(_) => log("application menu installed"),
                Err(error) => log(&format!("failed to install the application menu: {error}")),
            },
            Err(error) => log(&format!("failed to build the application menu: {error}")),
        },
    );
    if let Err(error) = dispatch_result {
        log(&error);
    }
}

fn action_item(
    app_handle: &AppHandle,
    action: AppAction,
    text: &str,
    accelerator: Option<&str>,
) -> Result<MenuItem<Wry>, String> {
    MenuItem::with_id(app_handle, action.menu_id(), text, true, accelerator)
        .map_err(|error| format!("Failed to create menu item {}: {error}", action.menu_id()))
}

fn build_application_menu(app_handle: &AppHandle) -> Result<Menu<Wry>, String> {
    let file_menu = SubmenuBuilder::new(app_handle, "File")
        .item(&action_item(app_handle, AppAction::NewWindow, "New Window", Some("CmdOrCtrl+N"))?)
        .separator()
        .item(&action_item(app_handle, AppAction::ImportData, "Import Data…", None)?)
        .item(&action_item(app_handle, AppAction::ExportData, "Export Data…", None)?)
        .separator()
        .item(&action_item(app_handle, AppAction::Quit, "Quit ArcFile", Some("CmdOrCtrl+Q"))?)
        .build()
        .map_err(|error| format!("Failed to build the File menu: {error}"))?;

    let edit_menu = SubmenuBuilder::new(app_handle, "Edit")
        .undo()
        .redo()
        .separator()
        .cut()
        .copy()
        .paste()
        .select_all()
        .separator()
        .item(&action_item(app_handle, AppAction::Find, "Find…", Some("CmdOrCtrl+F"))?)
        .build()
        .map_err(|error| format!("Failed to build the Edit menu: {error}"))?;

    let view_menu = SubmenuBuilder::new(app_handle, "View")
        .item(&action_item(app_handle, AppAction::OpenSaved, "Saved", Some("CmdOrCtrl+1"))?)
        .item(&action_item(app_handle, AppAction::OpenHistory, "History", Some("CmdOrCtrl+2"))?)
        .item(&action_item(app_handle, AppAction::OpenDrive, "Drive", Some("CmdOrCtrl+3"))?)
        .item(&action_item(app_handle, AppAction::OpenMessages, "Messages", Some("CmdOrCtrl+4"))?)
        .separator()
        .item(&action_item(app_handle, AppAction::OpenThemes, "Themes", None)?)
        .build()
        .map_err(|error| format!("Failed to build the View menu: {error}"))?;

    let account_menu = SubmenuBuilder::new(app_handle, "Account")
        .item(&action_item(
            app_handle,
            AppAction::LoginExternalWebservice,
            "Sign In to Web Service…",
            None,
        )?)
        .item(&action_item(app_handle, AppAction::ShowSettings, "Settings…", Some("CmdOrCtrl+,"))?)
        .separator()
        .item(&action_item(app_handle, AppAction::OpenCookieManager, "Cookie Manager", None)?)
        .item(&action_item(app_handle, AppAction::OpenHostsEditor, "Hosts Editor", None)?)
        .build()
        .map_err(|error| format!("Failed to build the Account menu: {error}"))?;

    let help_menu = SubmenuBuilder::new(app_handle, "Help")
        .item(&action_item(app_handle, AppAction::About, "About ArcFile", None)?)
        .item(&action_item(app_handle, AppAction::OpenLicense, "License", None)?)
        .separator()
        .item(&action_item(app_handle, AppAction::OpenDocumentation, "Documentation", None)?)
        .item(&action_item(app_handle, AppAction::OpenFaq, "FAQ", None)?)
        .item(&action_item(app_handle, AppAction::OpenPrivacyPolicy, "Privacy Policy", None)?)
        .item(&action_item(app_handle, AppAction::WebSessionHelp, "Web Session Help", None)?)
        .separator()
        .item(&action_item(app_handle, AppAction::OpenDiscussions, "Discussions", None)?)
        .item(&action_item(app_handle, AppAction::ReportIssue, "Report an Issue", None)?)
        .item(&action_item(app_handle, AppAction::SearchIssues, "Search Issues", None)?)
        .separator()
        .item(&action_item(app_handle, AppAction::TaskManager, "Task Manager", None)?)
        .build()
        .map_err(|error| format!("Failed to build the Help menu: {error}"))?;

    Menu::with_items(
        app_handle,
        &[&file_menu, &edit_menu, &view_menu, &account_menu, &help_menu],
    )
    .map_err(|error| format!("Failed to assemble the application menu: {error}"))
}
