use std::env;
use std::path::PathBuf;

use crate::{DATA_ROOT_ENV, SESSION_STATE_FILE};

// An explicit ARCFILE_ROOT wins over the per-user default.
pub(crate) fn data_root_dir() -> Option<PathBuf> {
    if let Ok(configured) = env::var(DATA_ROOT_ENV) {
        let trimmed = configured.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    default_data_root_dir()
}

pub(crate) fn default_data_root_dir() -> Option<PathBuf> {
    home::home_dir().map(|home| home.join(".arcfile"))
}

pub(crate) fn session_state_path_in(data_root_dir: &std::path::Path) -> PathBuf {
    data_root_dir.join("data").join(SESSION_STATE_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_state_lives_under_the_data_subdir() {
        let path = session_state_path_in(std::path::Path::new("/tmp/arcfile-root"));
        assert_eq!(path, PathBuf::from("/tmp/arcfile-root/data/session_state.json"));
    }
}
