use std::env;

use crate::{protocol_urls, INSPECT_FLAG, TEST_DRIVER_ENV};

// Everything the shell reads from the process environment, captured once
// at launch and managed as shared state.
#[derive(Debug, Clone)]
pub(crate) struct StartupOptions {
    pub(crate) inspect_mode: bool,
    pub(crate) test_driver: bool,
    pub(crate) launch_url: Option<String>,
}

impl StartupOptions {
    pub(crate) fn from_process() -> Self {
        let args: Vec<String> = env::args().collect();
        let test_driver = env::var(TEST_DRIVER_ENV)
            .map(|value| value.trim() == "1")
            .unwrap_or(false);
        Self::from_args(&args, test_driver)
    }

    pub(crate) fn from_args(args: &[String], test_driver: bool) -> Self {
        Self {
            inspect_mode: detect_inspect_flag(args),
            test_driver,
            launch_url: protocol_urls::find_protocol_url_in_args(args).map(str::to_string),
        }
    }
}

// Substring match: the flag comes in several spellings (--inspect,
// --inspect-brk, --inspect=9229).
pub(crate) fn detect_inspect_flag(args: &[String]) -> bool {
    args.iter().any(|arg| arg.contains(INSPECT_FLAG))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn inspect_flag_matches_all_spellings() {
        assert!(detect_inspect_flag(&args(&["arcfile", "--inspect"])));
        assert!(detect_inspect_flag(&args(&["arcfile", "--inspect=9229"])));
        assert!(detect_inspect_flag(&args(&["arcfile", "--inspect-brk"])));
    }

    #[test]
    fn inspect_flag_absent_by_default() {
        assert!(!detect_inspect_flag(&args(&["arcfile"])));
        assert!(!detect_inspect_flag(&args(&["arcfile", "--verbose"])));
    }

    #[test]
    fn launch_url_picked_out_of_the_argument_list() {
        let options = StartupOptions::from_args(
            &args(&["arcfile", "--some-flag", "arc-file://drive/open/abc123"]),
            false,
        );
        assert_eq!(options.launch_url.as_deref(), Some("arc-file://drive/open/abc123"));
        assert!(!options.inspect_mode);
    }

    #[test]
    fn plain_launch_has_no_url() {
        let options = StartupOptions::from_args(&args(&["arcfile"]), true);
        assert_eq!(options.launch_url, None);
        assert!(options.test_driver);
    }
}
