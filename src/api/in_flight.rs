use std::collections::HashSet;
use std::fmt;
use std::sync::{Arc, Mutex};

/// Submit actions that must not overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    AnalyzeMood,
    SaveEntry,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Action::AnalyzeMood => "mood analysis",
            Action::SaveEntry => "journal save",
        })
    }
}

/// Tracks which submit actions currently have a request outstanding.
///
/// Cloning shares the underlying set, so every clone of an `ApiClient` sees
/// the same in-flight state.
#[derive(Clone, Default)]
pub struct InFlight {
    active: Arc<Mutex<HashSet<Action>>>,
}

/// Held for the lifetime of one request; releases the action on drop.
pub struct InFlightGuard {
    active: Arc<Mutex<HashSet<Action>>>,
    action: Action,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` when a request for `action` is already outstanding.
    pub fn try_begin(&self, action: Action) -> Option<InFlightGuard> {
        let mut active = self.active.lock().unwrap_or_else(|e| e.into_inner());
        if !active.insert(action) {
            tracing::debug!(%action, "Duplicate submit ignored");
            return None;
        }
        Some(InFlightGuard {
            active: Arc::clone(&self.active),
            action,
        })
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        let mut active = self.active.lock().unwrap_or_else(|e| e.into_inner());
        active.remove(&self.action);
    }
}
