//! Usage: Primary surface lifecycle (`Created -> Loading -> Ready -> Shown`) and its one-shot ready subscription.

use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryPhase {
    Created,
    Loading,
    Ready,
    Shown,
}

impl PrimaryPhase {
    fn as_u8(self) -> u8 {
        match self {
            PrimaryPhase::Created => 0,
            PrimaryPhase::Loading => 1,
            PrimaryPhase::Ready => 2,
            PrimaryPhase::Shown => 3,
        }
    }

    fn from_u8(value: u8) -> Self {
        match value {
            0 => PrimaryPhase::Created,
            1 => PrimaryPhase::Loading,
            2 => PrimaryPhase::Ready,
            _ => PrimaryPhase::Shown,
        }
    }
}

/// Shared between the launcher and the page-load observer. Every transition is
/// a compare-and-swap so repeated signals are no-ops.
#[derive(Debug)]
pub struct PrimaryLifecycle {
    phase: AtomicU8,
    cancelled: AtomicBool,
}

impl PrimaryLifecycle {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            phase: AtomicU8::new(PrimaryPhase::Created.as_u8()),
            cancelled: AtomicBool::new(false),
        })
    }

    pub fn phase(&self) -> PrimaryPhase {
        PrimaryPhase::from_u8(self.phase.load(Ordering::SeqCst))
    }

    fn transition(&self, from: PrimaryPhase, to: PrimaryPhase) -> bool {
        self.phase
            .compare_exchange(from.as_u8(), to.as_u8(), Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    pub fn mark_loading(&self) -> bool {
        self.transition(PrimaryPhase::Created, PrimaryPhase::Loading)
    }

    /// Returns `true` only for the first ready signal of an active subscription.
    pub fn mark_ready(&self) -> bool {
        if self.is_cancelled() {
            return false;
        }
        // Some webviews report "finished" without a preceding "started".
        self.transition(PrimaryPhase::Loading, PrimaryPhase::Ready)
            || self.transition(PrimaryPhase::Created, PrimaryPhase::Ready)
    }

    pub fn mark_shown(&self) -> bool {
        self.transition(PrimaryPhase::Ready, PrimaryPhase::Shown)
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Handle returned by `launch` for the primary surface's ready observer.
#[derive(Debug, Clone)]
pub struct ReadySubscription {
    lifecycle: Arc<PrimaryLifecycle>,
}

impl ReadySubscription {
    pub fn new(lifecycle: Arc<PrimaryLifecycle>) -> Self {
        Self { lifecycle }
    }

    pub fn cancel(&self) {
        self.lifecycle.cancel();
    }

    pub fn is_active(&self) -> bool {
        !self.lifecycle.is_cancelled()
            && matches!(
                self.lifecycle.phase(),
                PrimaryPhase::Created | PrimaryPhase::Loading
            )
    }

    pub fn phase(&self) -> PrimaryPhase {
        self.lifecycle.phase()
    }

    pub(crate) fn lifecycle(&self) -> &PrimaryLifecycle {
        &self.lifecycle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_the_full_lifecycle_in_order() {
        let lifecycle = PrimaryLifecycle::new();
        assert_eq!(lifecycle.phase(), PrimaryPhase::Created);
        assert!(lifecycle.mark_loading());
        assert_eq!(lifecycle.phase(), PrimaryPhase::Loading);
        assert!(lifecycle.mark_ready());
        assert_eq!(lifecycle.phase(), PrimaryPhase::Ready);
        assert!(lifecycle.mark_shown());
        assert_eq!(lifecycle.phase(), PrimaryPhase::Shown);
    }

    #[test]
    fn ready_fires_once() {
        let lifecycle = PrimaryLifecycle::new();
        lifecycle.mark_loading();
        assert!(lifecycle.mark_ready());
        assert!(!lifecycle.mark_ready());
        lifecycle.mark_shown();
        assert!(!lifecycle.mark_ready());
        assert_eq!(lifecycle.phase(), PrimaryPhase::Shown);
    }

    #[test]
    fn ready_without_started_is_accepted() {
        let lifecycle = PrimaryLifecycle::new();
        assert!(lifecycle.mark_ready());
        assert!(!lifecycle.mark_loading());
    }

    #[test]
    fn shown_requires_ready() {
        let lifecycle = PrimaryLifecycle::new();
        assert!(!lifecycle.mark_shown());
        lifecycle.mark_loading();
        assert!(!lifecycle.mark_shown());
        assert_eq!(lifecycle.phase(), PrimaryPhase::Loading);
    }

    #[test]
    fn cancelled_subscription_ignores_ready() {
        let lifecycle = PrimaryLifecycle::new();
        let subscription = ReadySubscription::new(lifecycle.clone());
        assert!(subscription.is_active());

        subscription.cancel();
        assert!(!subscription.is_active());
        assert!(!lifecycle.mark_ready());
        assert_eq!(subscription.phase(), PrimaryPhase::Created);
    }

    #[test]
    fn subscription_is_inactive_after_ready() {
        let lifecycle = PrimaryLifecycle::new();
        let subscription = ReadySubscription::new(lifecycle.clone());
        lifecycle.mark_ready();
        assert!(!subscription.is_active());
    }
}
