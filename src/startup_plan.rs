// The ready sequence is data, not control flow; startup_task executes it.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ListenerTarget {
    Identity,
    WindowManager,
    Prompts,
    UpdateStatus,
    CloudExport,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ReadyStep {
    PrepareEnvironment,
    StartListener(ListenerTarget),
    OpenInitialWindow,
    StartUpdateChecker,
    InstallApplicationMenu,
    StartSessionManager,
}

// Listeners must be live before the first window loads; the session manager
// runs last so restored routes land in an otherwise settled shell.
pub(crate) fn ready_plan(inspect_mode: bool) -> Vec<ReadyStep> {
    let mut plan = vec![
        ReadyStep::PrepareEnvironment,
        ReadyStep::StartListener(ListenerTarget::Identity),
        ReadyStep::StartListener(ListenerTarget::WindowManager),
        ReadyStep::StartListener(ListenerTarget::Prompts),
        ReadyStep::StartListener(ListenerTarget::UpdateStatus),
        ReadyStep::StartListener(ListenerTarget::CloudExport),
        ReadyStep::OpenInitialWindow,
    ];
    if !inspect_mode {
        plan.push(ReadyStep::StartUpdateChecker);
    }
    plan.push(ReadyStep::InstallApplicationMenu);
    plan.push(ReadyStep::StartSessionManager);
    plan
}
