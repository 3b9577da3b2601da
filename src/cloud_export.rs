use serde::{Deserialize, Serialize};
use tauri::{AppHandle, Emitter, Listener};

use crate::{
    append_desktop_log, append_startup_log, CLOUD_EXPORT_QUEUED_EVENT, CLOUD_EXPORT_REQUEST_EVENT,
};

#[derive(Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CloudExportRequest {
    resource_id: String,
    #[serde(default)]
    window_label: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct CloudExportAck {
    resource_id: String,
    queued: bool,
}

fn parse_export_request(payload: &str) -> Option<CloudExportRequest> {
    serde_json::from_str(payload).ok()
}

// The actual upload lives in the content layer; the shell only sequences
// the queue acknowledgement.
pub(crate) fn listen(app_handle: &AppHandle) {
    let ack_handle = app_handle.clone();
    app_handle.listen(CLOUD_EXPORT_REQUEST_EVENT, move |event| {
        let Some(request) = parse_export_request(event.payload()) else {
            append_desktop_log(&format!(
                "dropped malformed cloud export request: {}",
                event.payload()
            ));
            return;
        };
        append_desktop_log(&format!(
            "cloud export requested for resource {}",
            request.resource_id
        ));
        let ack = CloudExportAck {
            resource_id: request.resource_id,
            queued: true,
        };
        let result = match request.window_label.as_deref() {
            Some(label) => ack_handle.emit_to(label, CLOUD_EXPORT_QUEUED_EVENT, ack),
            None => ack_handle.emit(CLOUD_EXPORT_QUEUED_EVENT, ack),
        };
        if let Err(error) = result {
            append_desktop_log(&format!("failed to acknowledge cloud export: {error}"));
        }
    });
    append_startup_log("cloud export listener started");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_requests_name_their_resource() {
        let request =
            parse_export_request(r#"{"resourceId":"abc123","windowLabel":"main"}"#).unwrap();
        assert_eq!(request.resource_id, "abc123");
        assert_eq!(request.window_label.as_deref(), Some("main"));
    }

    #[test]
    fn requests_without_a_resource_are_malformed() {
        assert_eq!(parse_export_request(r#"{"windowLabel":"main"}"#), None);
        assert_eq!(parse_export_request("[]"), None);
        assert_eq!(parse_export_request(""), None);
    }
}
