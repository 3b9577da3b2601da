use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use serde::Serialize;

use crate::lifecycle_state::{ActivationDecision, LifecyclePhase, LifecycleStateMachine};
use crate::update_status::UpdateCheckSummary;

// All transitions funnel through the state machine; phase ordering holds no
// matter which thread asks.
#[derive(Debug, Default)]
pub(crate) struct AppState {
    lifecycle: Mutex<LifecycleStateMachine>,
}

impl AppState {
    pub(crate) fn lifecycle_phase(&self) -> LifecyclePhase {
        self.lifecycle
            .lock()
            .map(|machine| machine.phase())
            .unwrap_or(LifecyclePhase::ShuttingDown)
    }

    pub(crate) fn mark_ready(&self) -> bool {
        self.lifecycle
            .lock()
            .map(|mut machine| machine.mark_ready())
            .unwrap_or(false)
    }

    pub(crate) fn mark_active(&self) {
        if let Ok(mut machine) = self.lifecycle.lock() {
            machine.mark_active();
        }
    }

    pub(crate) fn activate(&self, has_window: bool) -> ActivationDecision {
        self.lifecycle
            .lock()
            .map(|mut machine| machine.activate(has_window))
            .unwrap_or(ActivationDecision::KeepCurrentWindows)
    }

    pub(crate) fn begin_shutdown(&self) -> bool {
        self.lifecycle
            .lock()
            .map(|mut machine| machine.begin_shutdown())
            .unwrap_or(false)
    }

    pub(crate) fn is_shutting_down(&self) -> bool {
        self.lifecycle
            .lock()
            .map(|machine| machine.is_shutting_down())
            .unwrap_or(true)
    }
}

// The focused label is a hint, not a guarantee; readers must tolerate the
// window being gone already.
#[derive(Debug)]
pub(crate) struct WindowRegistry {
    next_window_index: AtomicU64,
    focused_label: Mutex<Option<String>>,
}

impl Default for WindowRegistry {
    fn default() -> Self {
        Self {
            next_window_index: AtomicU64::new(1),
            focused_label: Mutex::new(None),
        }
    }
}

impl WindowRegistry {
    pub(crate) fn allocate_window_index(&self) -> u64 {
        self.next_window_index.fetch_add(1, Ordering::SeqCst)
    }

    pub(crate) fn note_focused(&self, window_label: &str) {
        if let Ok(mut focused) = self.focused_label.lock() {
            *focused = Some(window_label.to_string());
        }
    }

    pub(crate) fn clear_focused_if(&self, window_label: &str) {
        if let Ok(mut focused) = self.focused_label.lock() {
            if focused.as_deref() == Some(window_label) {
                *focused = None;
            }
        }
    }

    pub(crate) fn focused_label(&self) -> Option<String> {
        self.focused_label
            .lock()
            .map(|focused| focused.clone())
            .unwrap_or(None)
    }
}

// Last completed update check, kept for windows that open later and ask.
#[derive(Debug, Default)]
pub(crate) struct UpdateStatusState {
    last_check: Mutex<Option<UpdateCheckSummary>>,
}

impl UpdateStatusState {
    pub(crate) fn record(&self, summary: UpdateCheckSummary) {
        if let Ok(mut last_check) = self.last_check.lock() {
            *last_check = Some(summary);
        }
    }

    pub(crate) fn last_summary(&self) -> Option<UpdateCheckSummary> {
        self.last_check
            .lock()
            .map(|last_check| last_check.clone())
            .unwrap_or(None)
    }
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct BridgeResult {
    pub(crate) ok: bool,
    pub(crate) reason: Option<String>,
}

impl BridgeResult {
    pub(crate) fn success() -> Self {
        Self { ok: true, reason: None }
    }

    pub(crate) fn failure(reason: String) -> Self {
        Self {
            ok: false,
            reason: Some(reason),
        }
    }
}
