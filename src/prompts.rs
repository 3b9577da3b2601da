use serde::Deserialize;
use tauri::{AppHandle, Emitter, Listener};

use crate::{
    append_desktop_log, append_startup_log, window_manager, PROMPT_REQUEST_EVENT,
    PROMPT_SHOW_EVENT,
};

#[derive(Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptRequest {
    prompt: String,
    #[serde(default)]
    window_label: Option<String>,
}

fn parse_prompt_request(payload: &str) -> Option<PromptRequest> {
    serde_json::from_str(payload).ok()
}

// Requests without a target land in whichever window the next action
// would use.
pub(crate) fn listen(app_handle: &AppHandle) {
    let relay_handle = app_handle.clone();
    app_handle.listen(PROMPT_REQUEST_EVENT, move |event| {
        let Some(request) = parse_prompt_request(event.payload()) else {
            append_desktop_log(&format!(
                "dropped malformed prompt request: {}",
                event.payload()
            ));
            return;
        };
        let target = request
            .window_label
            .or_else(|| window_manager::source_window_label(&relay_handle));
        let Some(target) = target else {
            append_desktop_log(&format!(
                "dropped prompt {}: no window to display it",
                request.prompt
            ));
            return;
        };
        match relay_handle.emit_to(target.as_str(), PROMPT_SHOW_EVENT, &request.prompt) {
            Ok(()) => append_desktop_log(&format!(
                "relayed prompt {} to window {target}",
                request.prompt
            )),
            Err(error) => append_desktop_log(&format!(
                "failed to relay prompt {} to window {target}: {error}",
                request.prompt
            )),
        }
    });
    append_startup_log("prompt listener started");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_requests_carry_a_name_and_optional_target() {
        let request =
            parse_prompt_request(r#"{"prompt":"rename-resource","windowLabel":"window-2"}"#)
                .unwrap();
        assert_eq!(request.prompt, "rename-resource");
        assert_eq!(request.window_label.as_deref(), Some("window-2"));

        let untargeted = parse_prompt_request(r#"{"prompt":"confirm-delete"}"#).unwrap();
        assert_eq!(untargeted.window_label, None);
    }

    #[test]
    fn requests_without_a_prompt_name_are_malformed() {
        assert_eq!(parse_prompt_request(r#"{"windowLabel":"main"}"#), None);
        assert_eq!(parse_prompt_request("not json"), None);
        assert_eq!(parse_prompt_request(""), None);
    }
}
