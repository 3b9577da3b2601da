// Phases only ever move forward; ShuttingDown is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum LifecyclePhase {
    #[default]
    Constructed,
    Ready,
    Active,
    ShuttingDown,
}

impl LifecyclePhase {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            LifecyclePhase::Constructed => "constructed",
            LifecyclePhase::Ready => "ready",
            LifecyclePhase::Active => "active",
            LifecyclePhase::ShuttingDown => "shutting-down",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ActivationDecision {
    OpenNewWindow,
    KeepCurrentWindows,
}

#[derive(Debug, Default)]
pub(crate) struct LifecycleStateMachine {
    phase: LifecyclePhase,
}

impl LifecycleStateMachine {
    pub(crate) fn phase(&self) -> LifecyclePhase {
        self.phase
    }

    // True only on the first call; the ready signal fires once.
    pub(crate) fn mark_ready(&mut self) -> bool {
        if self.phase == LifecyclePhase::Constructed {
            self.phase = LifecyclePhase::Ready;
            return true;
        }
        false
    }

    pub(crate) fn mark_active(&mut self) {
        if matches!(self.phase, LifecyclePhase::Ready | LifecyclePhase::Active) {
            self.phase = LifecyclePhase::Active;
        }
    }

    // OS activation signal. The decision only tells the caller whether a
    // window has to be opened to show anything.
    pub(crate) fn activate(&mut self, has_window: bool) -> ActivationDecision {
        match self.phase {
            LifecyclePhase::Constructed | LifecyclePhase::ShuttingDown => {
                ActivationDecision::KeepCurrentWindows
            }
            LifecyclePhase::Ready | LifecyclePhase::Active => {
                self.phase = LifecyclePhase::Active;
                if has_window {
                    ActivationDecision::KeepCurrentWindows
                } else {
                    ActivationDecision::OpenNewWindow
                }
            }
        }
    }

    // True only for the caller that actually starts the shutdown; repeated
    // quit requests collapse into one.
    pub(crate) fn begin_shutdown(&mut self) -> bool {
        if self.phase == LifecyclePhase::ShuttingDown {
            return false;
        }
        self.phase = LifecyclePhase::ShuttingDown;
        true
    }

    pub(crate) fn is_shutting_down(&self) -> bool {
        self.phase == LifecyclePhase::ShuttingDown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_advance_in_order() {
        let mut machine = LifecycleStateMachine::default();
        assert_eq!(machine.phase(), LifecyclePhase::Constructed);
        assert!(machine.mark_ready());
        assert_eq!(machine.phase(), LifecyclePhase::Ready);
        machine.mark_active();
        assert_eq!(machine.phase(), LifecyclePhase::Active);
        assert!(machine.begin_shutdown());
        assert_eq!(machine.phase(), LifecyclePhase::ShuttingDown);
    }

    #[test]
    fn ready_signal_fires_once() {
        let mut machine = LifecycleStateMachine::default();
        assert!(machine.mark_ready());
        assert!(!machine.mark_ready());
        assert_eq!(machine.phase(), LifecyclePhase::Ready);
    }

    #[test]
    fn repeated_shutdown_requests_collapse_into_one() {
        let mut machine = LifecycleStateMachine::default();
        machine.mark_ready();
        assert!(machine.begin_shutdown());
        assert!(!machine.begin_shutdown());
        assert!(!machine.begin_shutdown());
        assert!(machine.is_shutting_down());
    }

    #[test]
    fn activation_without_windows_asks_for_a_new_one() {
        let mut machine = LifecycleStateMachine::default();
        machine.mark_ready();
        machine.mark_active();
        assert_eq!(machine.activate(false), ActivationDecision::OpenNewWindow);
        assert_eq!(machine.phase(), LifecyclePhase::Active);
    }

    #[test]
    fn activation_with_windows_is_a_no_op() {
        let mut machine = LifecycleStateMachine::default();
        machine.mark_ready();
        machine.mark_active();
        assert_eq!(machine.activate(true), ActivationDecision::KeepCurrentWindows);
        assert_eq!(machine.phase(), LifecyclePhase::Active);
    }

    #[test]
    fn activation_during_shutdown_never_reopens_windows() {
        let mut machine = LifecycleStateMachine::default();
        machine.mark_ready();
        machine.begin_shutdown();
        assert_eq!(machine.activate(false), ActivationDecision::KeepCurrentWindows);
        assert!(machine.is_shutting_down());
    }

    #[test]
    fn shutdown_never_moves_backward() {
        let mut machine = LifecycleStateMachine::default();
        machine.mark_ready();
        machine.begin_shutdown();
        machine.mark_active();
        assert!(!machine.mark_ready());
        assert_eq!(machine.phase(), LifecyclePhase::ShuttingDown);
    }
}
