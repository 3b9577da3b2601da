use crate::logging;

pub(crate) fn append_desktop_log(message: &str) {
    logging::append_log("desktop", message);
}

pub(crate) fn append_startup_log(message: &str) {
    logging::append_log("startup", message);
}

pub(crate) fn append_shutdown_log(message: &str) {
    logging::append_log("shutdown", message);
}
