use tauri::{AppHandle, Runtime};

use crate::{window_manager, PROTOCOL_DRIVE_KIND, PROTOCOL_SCHEME_PREFIX};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ProtocolKind {
    Drive,
}

// Only drive handoffs are understood; every other kind is dropped before
// it gets this far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ProtocolRequest {
    pub(crate) kind: ProtocolKind,
    pub(crate) operation: String,
    pub(crate) resource_id: String,
}

// Decodes arc-file://drive/<operation>/<resource-id>. Missing segments
// decode to empty fields; the degraded navigation target must stay stable
// because the content layer keys its request-not-found view on it.
pub(crate) fn decode_protocol_url(url: &str) -> Option<ProtocolRequest> {
    let remainder = url.strip_prefix(PROTOCOL_SCHEME_PREFIX)?;
    let mut segments = remainder.split('/');
    if segments.next().unwrap_or_default() != PROTOCOL_DRIVE_KIND {
        return None;
    }
    let operation = segments.next().unwrap_or_default().to_string();
    let resource_id = segments.next().unwrap_or_default().to_string();
    Some(ProtocolRequest {
        kind: ProtocolKind::Drive,
        operation,
        resource_id,
    })
}

pub(crate) fn navigation_path(request: &ProtocolRequest) -> String {
    match request.kind {
        ProtocolKind::Drive => {
            format!("/request/drive/{}/{}", request.operation, request.resource_id)
        }
    }
}

// Scans both the launch arguments of this process and the forwarded
// arguments of a second instance.
pub(crate) fn find_protocol_url_in_args(args: &[String]) -> Option<&str> {
    args.iter()
        .map(String::as_str)
        .find(|arg| arg.starts_with(PROTOCOL_SCHEME_PREFIX))
}

pub(crate) fn handle_incoming_url<R, F>(app_handle: &AppHandle<R>, url: &str, log: F)
where
    R: Runtime,
    F: Fn(&str),
{
    let Some(request) = decode_protocol_url(url) else {
        log(&format!("ignored protocol url without a drive handoff: {url}"));
        return;
    };
    let path = navigation_path(&request);
    log(&format!("protocol url accepted, opening {path}"));
    if let Err(error) = window_manager::open_deep_link(app_handle, &path, &log) {
        log(&format!("failed to open a window for {path}: {error}"));
    }
}
