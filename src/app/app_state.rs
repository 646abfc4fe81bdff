//! Usage: Shared Tauri state types (current launch session, staged update).

use crate::launcher::LaunchSession;
use crate::shared::mutex_ext::MutexExt;
use std::sync::Mutex;

#[derive(Default)]
pub(crate) struct ShellState(pub(crate) Mutex<Option<LaunchSession>>);

impl ShellState {
    /// Stores a new session; an older one has its ready observer cancelled.
    pub(crate) fn replace(&self, session: LaunchSession) {
        let previous = self.0.lock_or_recover().replace(session);
        if let Some(previous) = previous {
            previous.ready.cancel();
        }
    }

    pub(crate) fn current(&self) -> Option<LaunchSession> {
        self.0.lock_or_recover().clone()
    }
}

#[cfg(desktop)]
#[derive(Default)]
pub(crate) struct UpdateState(pub(crate) Mutex<Option<crate::updates::StagedUpdate>>);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::{PrimaryLifecycle, ReadySubscription};

    fn session() -> LaunchSession {
        LaunchSession {
            splash_label: "splash",
            primary_label: "main",
            ready: ReadySubscription::new(PrimaryLifecycle::new()),
        }
    }

    #[test]
    fn replace_cancels_previous_session() {
        let state = ShellState::default();
        let first = session();
        state.replace(first.clone());
        assert!(first.ready.is_active());

        state.replace(session());
        assert!(!first.ready.is_active());
        assert!(state.current().expect("session").ready.is_active());
    }

    #[test]
    fn current_is_none_before_launch() {
        assert!(ShellState::default().current().is_none());
    }
}
