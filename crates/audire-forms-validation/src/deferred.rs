//! Single-slot holder for a deferred action
//!
//! `H` is a handle that cancels its action when dropped, such as
//! `gloo_timers::callback::Timeout`. Scheduling a new action drops the old
//! handle, so at most one action is ever pending.

#[derive(Debug)]
pub struct DeferredSlot<H> {
    pending: Option<H>,
}

impl<H> Default for DeferredSlot<H> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<H> DeferredSlot<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new handle, cancelling the previous one.
    /// Returns true when a previous action was cancelled.
    pub fn schedule(&mut self, handle: H) -> bool {
        let replaced = self.pending.replace(handle).is_some();
        if replaced {
            tracing::debug!("Cancelled pending deferred action");
        }
        replaced
    }

    /// Cancel the pending action, if any.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_scheduled(&self) -> bool {
        self.pending.is_some()
    }
}
