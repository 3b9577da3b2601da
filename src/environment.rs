use std::fs;
use std::path::Path;

use tauri::AppHandle;

use crate::runtime_paths;

// Failure leaves the shell degraded but alive; callers log and move on.
pub(crate) async fn prepare_environment(app_handle: &AppHandle) -> Result<(), String> {
    let data_root = runtime_paths::data_root_dir()
        .ok_or_else(|| "Cannot resolve the ArcFile data root directory.".to_string())?;
    ensure_runtime_dirs(&data_root)?;
    register_protocol_handler(app_handle)
}

fn ensure_runtime_dirs(data_root: &Path) -> Result<(), String> {
    for dir in [data_root.join("data"), data_root.join("logs")] {
        fs::create_dir_all(&dir)
            .map_err(|error| format!("Failed to create {}: {error}", dir.display()))?;
    }
    Ok(())
}

#[cfg(any(target_os = "windows", target_os = "linux"))]
fn register_protocol_handler(app_handle: &AppHandle) -> Result<(), String> {
    use tauri_plugin_deep_link::DeepLinkExt;
    app_handle
        .deep_link()
        .register_all()
        .map_err(|error| format!("Failed to register the arc-file protocol handler: {error}"))
}

// The bundle declares the scheme on macOS; no runtime registration exists.
#[cfg(not(any(target_os = "windows", target_os = "linux")))]
fn register_protocol_handler(_app_handle: &AppHandle) -> Result<(), String> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_dirs_are_created_and_recreation_is_harmless() {
        let dir = tempfile::tempdir().unwrap();
        ensure_runtime_dirs(dir.path()).unwrap();
        assert!(dir.path().join("data").is_dir());
        assert!(dir.path().join("logs").is_dir());
        ensure_runtime_dirs(dir.path()).unwrap();
    }
}
