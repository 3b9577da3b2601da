use std::fs;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use crate::{runtime_paths, DESKTOP_LOG_FILE};

// Without a data root the log still has to land somewhere readable.
pub(crate) fn resolve_desktop_log_path(data_root_dir: Option<PathBuf>, log_file: &str) -> PathBuf {
    data_root_dir
        .map(|root| root.join("logs").join(log_file))
        .unwrap_or_else(|| std::env::temp_dir().join(log_file))
}

fn format_log_line(timestamp: &str, category: &str, message: &str) -> String {
    format!("[{timestamp}] [{category}] {message}\n")
}

pub(crate) fn append_log(category: &str, message: &str) {
    let path = resolve_desktop_log_path(runtime_paths::data_root_dir(), DESKTOP_LOG_FILE);
    if let Some(parent) = path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return;
        }
    }
    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string();
    let line = format_log_line(&timestamp, category, message);
    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(&path) {
        let _ = file.write_all(line.as_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_path_prefers_data_root_logs_dir() {
        let path = resolve_desktop_log_path(Some(PathBuf::from("/tmp/arcfile-root")), "desktop.log");
        assert_eq!(path, PathBuf::from("/tmp/arcfile-root/logs/desktop.log"));
    }

    #[test]
    fn log_path_falls_back_to_temp_dir() {
        let path = resolve_desktop_log_path(None, "desktop.log");
        assert_eq!(path, std::env::temp_dir().join("desktop.log"));
    }

    #[test]
    fn log_lines_carry_timestamp_and_category() {
        let line = format_log_line("2025-03-01 10:00:00.000", "startup", "ready");
        assert_eq!(line, "[2025-03-01 10:00:00.000] [startup] ready\n");
    }
}
