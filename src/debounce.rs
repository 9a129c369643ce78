//! Version-counter debounce gate for query recomputation.
//!
//! Every keystroke schedules a timer carrying a ticket; only the ticket from
//! the most recent schedule is allowed to commit when its timer fires, so a
//! burst of keystrokes coalesces into a single filter pass and a stale timer
//! can never overwrite a newer render. The quiet period itself is owned by
//! the host, which reads it from [`crate::config::SwitcherConfig::debounce`].

/// Ticket handed to the host alongside a timer request. Opaque outside this
/// module; compared against the gate's latest version on fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket(u64);

/// Monotonic version gate. One per session; versions never reset within a
/// session, so tickets from before a cancellation can never commit.
#[derive(Debug, Default)]
pub struct DebounceGate {
    version: u64,
}

impl DebounceGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new pending recomputation, invalidating all earlier tickets.
    pub fn schedule(&mut self) -> DebounceTicket {
        self.version += 1;
        DebounceTicket(self.version)
    }

    /// True iff `ticket` is the most recently scheduled one. A `false` return
    /// means the timer was superseded and its fire must be discarded.
    pub fn is_current(&self, ticket: DebounceTicket) -> bool {
        ticket.0 == self.version
    }

    /// Invalidate any outstanding ticket without scheduling a new one.
    /// Used at session teardown so a timer racing the close cannot commit.
    pub fn cancel_pending(&mut self) {
        self.version += 1;
    }
}

#[cfg(test)]
#[path = "debounce_tests.rs"]
mod debounce_tests;
