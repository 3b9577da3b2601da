// Action identifiers are namespaced: `application-<command>` for
// shell-owned actions, `request-<suffix>` for actions the content layer
// interprets itself.
pub(crate) const APPLICATION_ACTION_PREFIX: &str = "application-";
pub(crate) const REQUEST_ACTION_PREFIX: &str = "request-";

// The closed set of shell-owned actions. Adding a command means adding a
// variant; `command_name` will not compile until it is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AppAction {
    // Forwarded to the source window as a `command` event.
    OpenSaved,
    OpenHistory,
    OpenDrive,
    OpenMessages,
    OpenThemes,
    ImportData,
    ExportData,
    ShowSettings,
    OpenCookieManager,
    OpenHostsEditor,
    LoginExternalWebservice,
    About,
    OpenLicense,
    // Handled by the shell itself.
    Quit,
    NewWindow,
    TaskManager,
    Find,
    // Opened in the system browser via the help link table.
    OpenPrivacyPolicy,
    OpenDocumentation,
    OpenFaq,
    OpenDiscussions,
    ReportIssue,
    SearchIssues,
    WebSessionHelp,
}

impl AppAction {
    pub(crate) const ALL: [AppAction; 24] = [
        AppAction::OpenSaved,
        AppAction::OpenHistory,
        AppAction::OpenDrive,
        AppAction::OpenMessages,
        AppAction::OpenThemes,
        AppAction::ImportData,
        AppAction::ExportData,
        AppAction::ShowSettings,
        AppAction::OpenCookieManager,
        AppAction::OpenHostsEditor,
        AppAction::LoginExternalWebservice,
        AppAction::About,
        AppAction::OpenLicense,
        AppAction::Quit,
        AppAction::NewWindow,
        AppAction::TaskManager,
        AppAction::Find,
        AppAction::OpenPrivacyPolicy,
        AppAction::OpenDocumentation,
        AppAction::OpenFaq,
        AppAction::OpenDiscussions,
        AppAction::ReportIssue,
        AppAction::SearchIssues,
        AppAction::WebSessionHelp,
    ];

    pub(crate) fn command_name(self) -> &'static str {
        match self {
            AppAction::OpenSaved => "open-saved",
            AppAction::OpenHistory => "open-history",
            AppAction::OpenDrive => "open-drive",
            AppAction::OpenMessages => "open-messages",
            AppAction::OpenThemes => "open-themes",
            AppAction::ImportData => "import-data",
            AppAction::ExportData => "export-data",
            AppAction::ShowSettings => "show-settings",
            AppAction::OpenCookieManager => "open-cookie-manager",
            AppAction::OpenHostsEditor => "open-hosts-editor",
            AppAction::LoginExternalWebservice => "login-external-webservice",
            AppAction::About => "about",
            AppAction::OpenLicense => "open-license",
            AppAction::Quit => "quit",
            AppAction::NewWindow => "new-window",
            AppAction::TaskManager => "task-manager",
            AppAction::Find => "find",
            AppAction::OpenPrivacyPolicy => "open-privacy-policy",
            AppAction::OpenDocumentation => "open-documentation",
            AppAction::OpenFaq => "open-faq",
            AppAction::OpenDiscussions => "open-discussions",
            AppAction::ReportIssue => "report-issue",
            AppAction::SearchIssues => "search-issues",
            AppAction::WebSessionHelp => "web-session-help",
        }
    }

    pub(crate) fn from_command(command: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|action| action.command_name() == command)
    }

    pub(crate) fn menu_id(self) -> String {
        format!("{APPLICATION_ACTION_PREFIX}{}", self.command_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RoutedAction<'a> {
    Application(AppAction),
    Request(&'a str),
    Unrouted,
}

// Identifiers outside both namespaces, and application- commands the shell
// does not know, come back Unrouted and are dropped without side effects.
pub(crate) fn route_action_id(action_id: &str) -> RoutedAction<'_> {
    if let Some(command) = action_id.strip_prefix(APPLICATION_ACTION_PREFIX) {
        return match AppAction::from_command(command) {
            Some(action) => RoutedAction::Application(action),
            None => RoutedAction::Unrouted,
        };
    }
    if let Some(suffix) = action_id.strip_prefix(REQUEST_ACTION_PREFIX) {
        return RoutedAction::Request(suffix);
    }
    RoutedAction::Unrouted
}
