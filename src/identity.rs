use serde::{Deserialize, Serialize};
use tauri::{AppHandle, Listener};

use crate::{
    append_desktop_log, append_startup_log, window_events, IDENTITY_CHANGED_EVENT,
    IDENTITY_SESSION_EVENT,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IdentitySession {
    #[serde(default)]
    account: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct IdentityBroadcast {
    pub(crate) signed_in: bool,
    pub(crate) account: Option<String>,
}

// A malformed session payload means signed out; windows always get told
// something rather than being left with a stale identity.
fn broadcast_for_payload(payload: &str) -> IdentityBroadcast {
    let session = serde_json::from_str::<IdentitySession>(payload)
        .unwrap_or(IdentitySession { account: None });
    IdentityBroadcast {
        signed_in: session.account.is_some(),
        account: session.account,
    }
}

pub(crate) fn listen(app_handle: &AppHandle) {
    let broadcast_handle = app_handle.clone();
    app_handle.listen(IDENTITY_SESSION_EVENT, move |event| {
        let broadcast = broadcast_for_payload(event.payload());
        append_desktop_log(&format!(
            "identity session update: signed_in={}",
            broadcast.signed_in
        ));
        window_events::emit_to_all_windows(
            &broadcast_handle,
            IDENTITY_CHANGED_EVENT,
            broadcast,
            append_desktop_log,
        );
    });
    append_startup_log("identity listener started");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_session_with_an_account_is_signed_in() {
        let broadcast = broadcast_for_payload(r#"{"account":"ada@arcfile.io"}"#);
        assert!(broadcast.signed_in);
        assert_eq!(broadcast.account.as_deref(), Some("ada@arcfile.io"));
    }

    #[test]
    fn an_empty_session_is_signed_out() {
        let broadcast = broadcast_for_payload(r#"{}"#);
        assert!(!broadcast.signed_in);
        assert_eq!(broadcast.account, None);
    }

    #[test]
    fn malformed_payloads_degrade_to_signed_out() {
        assert!(!broadcast_for_payload("not json").signed_in);
        assert!(!broadcast_for_payload("").signed_in);
    }
}
