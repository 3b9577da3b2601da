pub(crate) const PRODUCT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub(crate) const DATA_ROOT_ENV: &str = "ARCFILE_ROOT";
pub(crate) const TEST_DRIVER_ENV: &str = "ARCFILE_TEST_DRIVER";
pub(crate) const INSPECT_FLAG: &str = "--inspect";

pub(crate) const DESKTOP_LOG_FILE: &str = "desktop.log";
pub(crate) const SESSION_STATE_FILE: &str = "session_state.json";

pub(crate) const PROTOCOL_SCHEME_PREFIX: &str = "arc-file://";
pub(crate) const PROTOCOL_DRIVE_KIND: &str = "drive";

// Window-scoped events consumed by the content layer.
pub(crate) const COMMAND_EVENT: &str = "command";
pub(crate) const REQUEST_ACTION_EVENT: &str = "request-action";

// Shell events raised by the content layer.
pub(crate) const WINDOW_OPEN_REQUEST_EVENT: &str = "window-open-request";
pub(crate) const IDENTITY_SESSION_EVENT: &str = "identity-session";
pub(crate) const PROMPT_REQUEST_EVENT: &str = "prompt-request";
pub(crate) const UPDATE_STATUS_REQUEST_EVENT: &str = "update-status-request";
pub(crate) const CLOUD_EXPORT_REQUEST_EVENT: &str = "cloud-export-request";

// Shell broadcasts back into windows.
pub(crate) const IDENTITY_CHANGED_EVENT: &str = "identity-changed";
pub(crate) const PROMPT_SHOW_EVENT: &str = "prompt-show";
pub(crate) const UPDATE_STATUS_CHANGED_EVENT: &str = "update-status-changed";
pub(crate) const CLOUD_EXPORT_QUEUED_EVENT: &str = "cloud-export-queued";
pub(crate) const SESSION_RESTORED_EVENT: &str = "session-restored";

// External-control events, only wired up under TEST_DRIVER_ENV.
pub(crate) const TEST_MENU_ACTION_EVENT: &str = "test-menu-action";
pub(crate) const TEST_OPEN_URL_EVENT: &str = "test-open-url";
pub(crate) const TEST_ACTIVATE_EVENT: &str = "test-activate";

pub(crate) const MAIN_WINDOW_LABEL: &str = "main";
pub(crate) const EXTRA_WINDOW_LABEL_PREFIX: &str = "window-";
pub(crate) const SEARCH_WINDOW_PREFIX: &str = "search-";
pub(crate) const TASK_MANAGER_WINDOW_LABEL: &str = "task-manager";

pub(crate) const DEFAULT_WINDOW_ROUTE: &str = "/";
pub(crate) const TASK_MANAGER_ROUTE: &str = "/task-manager";
pub(crate) const SEARCH_OVERLAY_ROUTE: &str = "/search-overlay";
