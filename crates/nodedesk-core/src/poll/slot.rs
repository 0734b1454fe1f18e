use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use arc_swap::ArcSwap;
use tracing::warn;

use super::types::Trigger;

/// Holds the most recently supplied callback.
///
/// Written on every `replace`, read only when a tick fires. Clones share the
/// same cell, so the timer task and its owner always agree on "current".
#[derive(Clone)]
pub struct CallbackSlot {
    current: Arc<ArcSwap<Trigger>>,
}

impl CallbackSlot {
    pub fn new(initial: Trigger) -> Self {
        Self {
            current: Arc::new(ArcSwap::from_pointee(initial)),
        }
    }

    pub fn replace(&self, callback: Trigger) {
        self.current.store(Arc::new(callback));
    }

    pub fn current(&self) -> Trigger {
        Trigger::clone(&self.current.load())
    }

    /// Invoke whatever callback is current right now.
    ///
    /// A panicking callback is caught and logged; the caller keeps ticking.
    pub fn fire(&self) {
        let callback = self.current.load_full();
        if catch_unwind(AssertUnwindSafe(|| callback.invoke())).is_err() {
            warn!(
                event = "core.poll.tick_panicked",
                "Poll callback panicked, continuing with next tick"
            );
        }
    }

    /// A trigger that dispatches through this slot at call time.
    pub fn dispatcher(&self) -> Trigger {
        let slot = self.clone();
        Trigger::new(move || slot.fire())
    }
}

impl std::fmt::Debug for CallbackSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackSlot").finish_non_exhaustive()
    }
}
