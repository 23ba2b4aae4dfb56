//! Coalescing recompute scheduler for the expensive geometry rebuilds.
//!
//! The kinematic profile is cheap (1000 closed-form samples) and is
//! recomputed immediately on every parameter change. The point clouds are
//! not (up to a million samples for the accretion disk), so rapid
//! successive edits are coalesced: each edit marks the scheduler dirty and
//! pushes a deadline out by the debounce window, and one rebuild fires once
//! the edits stop (trailing edge). The scheduler is a plain dirty-flag
//! state machine driven by explicit `Instant`s, independent of any timer or
//! concurrency primitive, which also makes it directly testable.

use std::time::{Duration, Instant};

/// Trailing-edge debounce over explicit time points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecomputeScheduler {
    window: Duration,
    deadline: Option<Instant>,
}

impl RecomputeScheduler {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
        }
    }

    /// Record a parameter change at `now`. Further changes inside the
    /// window postpone the rebuild.
    pub fn mark_dirty(&mut self, now: Instant) {
        self.deadline = Some(now + self.window);
    }

    /// `true` while a rebuild is pending.
    pub fn is_dirty(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns `true` exactly once per coalesced burst of edits, when the
    /// deadline has passed; the caller runs the rebuild then.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
