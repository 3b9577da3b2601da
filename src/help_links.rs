use std::process::{Command, Stdio};

use url::Url;

use crate::BridgeResult;

// Keyed by the exact command name of the menu action.
pub(crate) fn help_url_for_command(command: &str) -> Option<&'static str> {
    match command {
        "open-privacy-policy" => Some("https://arcfile.io/privacy"),
        "open-documentation" => Some("https://docs.arcfile.io/"),
        "open-faq" => Some("https://docs.arcfile.io/faq"),
        "open-discussions" => Some("https://github.com/arcfile-app/arcfile/discussions"),
        "report-issue" => Some("https://github.com/arcfile-app/arcfile/issues/new/choose"),
        "search-issues" => Some("https://github.com/arcfile-app/arcfile/issues"),
        "web-session-help" => Some("https://docs.arcfile.io/web-sessions"),
        _ => None,
    }
}

pub(crate) fn help_with<F: Fn(&str)>(command: &str, log: F) {
    let Some(raw_url) = help_url_for_command(command) else {
        log(&format!("no help link registered for {command}"));
        return;
    };
    match parse_openable_url(raw_url) {
        Ok(parsed) => match open_url_with_system_browser(parsed.as_ref()) {
            Ok(()) => log(&format!("opened help link for {command}")),
            Err(error) => log(&format!("failed to open help link for {command}: {error}")),
        },
        Err(error) => log(&format!("help link for {command} is unusable: {error}")),
    }
}

// Backs the external-url bridge command; content never opens URLs itself.
pub(crate) fn open_external_url(raw_url: &str) -> BridgeResult {
    let parsed = match parse_openable_url(raw_url) {
        Ok(parsed) => parsed,
        Err(error) => return BridgeResult::failure(error),
    };
    match open_url_with_system_browser(parsed.as_ref()) {
        Ok(()) => BridgeResult::success(),
        Err(error) => BridgeResult::failure(error),
    }
}

fn parse_openable_url(raw_url: &str) -> Result<Url, String> {
    let trimmed = raw_url.trim();
    if trimmed.is_empty() {
        return Err("Missing external URL.".to_string());
    }

    let parsed = Url::parse(trimmed).map_err(|error| format!("Invalid URL: {error}"))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(format!(
            "Unsupported URL scheme '{scheme}', only http/https are allowed."
        )),
    }
}

#[cfg(target_os = "macos")]
fn open_url_with_system_browser(url: &str) -> Result<(), String> {
    Command::new("open")
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
        .map_err(|error| format!("Failed to run 'open': {error}"))
}

#[cfg(target_os = "windows")]
fn open_url_with_system_browser(url: &str) -> Result<(), String> {
    Command::new("rundll32")
        .args(["url.dll,FileProtocolHandler", url])
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
        .map_err(|error| format!("Failed to run 'rundll32': {error}"))
}

#[cfg(all(unix, not(target_os = "macos")))]
fn open_url_with_system_browser(url: &str) -> Result<(), String> {
    Command::new("xdg-open")
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
        .map_err(|error| format!("Failed to run 'xdg-open': {error}"))
}

#[cfg(not(any(target_os = "macos", target_os = "windows", unix)))]
fn open_url_with_system_browser(_url: &str) -> Result<(), String> {
    Err("Opening external URLs is not supported on this platform.".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu_actions::AppAction;
    use crate::menu_handler::{decide_route, RouteOutcome};

    #[test]
    fn every_help_action_has_a_destination() {
        for action in AppAction::ALL {
            if let RouteOutcome::OpenHelp(command) = decide_route(&action.menu_id()) {
                let url = help_url_for_command(command)
                    .unwrap_or_else(|| panic!("no help url for {command}"));
                assert!(parse_openable_url(url).is_ok());
            }
        }
    }

    #[test]
    fn non_help_commands_have_no_destination() {
        assert_eq!(help_url_for_command("open-saved"), None);
        assert_eq!(help_url_for_command("quit"), None);
        assert_eq!(help_url_for_command(""), None);
    }

    #[test]
    fn only_web_urls_are_openable() {
        assert!(parse_openable_url("https://docs.arcfile.io/faq").is_ok());
        assert!(parse_openable_url("  http://arcfile.io  ").is_ok());
        assert!(parse_openable_url("ftp://arcfile.io").is_err());
        assert!(parse_openable_url("arc-file://drive/open/x").is_err());
        assert!(parse_openable_url("").is_err());
        assert!(parse_openable_url("not a url").is_err());
    }
}
