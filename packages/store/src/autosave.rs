//! # Autosave Debounce
//!
//! A cancellable scheduled task owned by the store facade: armed when an
//! edit dirties the state, re-armed on every further edit, and fired once
//! after the quiet window. Debounce, not throttle — rapid typing produces
//! exactly one save after the user pauses.
//!
//! Poll-driven like the persistence engine: the host calls
//! [`Store::tick`](crate::Store::tick) from its event loop; the timer is
//! "cancelled" simply by being re-armed.

use std::time::{Duration, Instant};

/// Quiet window after the last edit before autosave fires.
pub const AUTOSAVE_DELAY: Duration = Duration::from_millis(2000);

#[derive(Debug)]
pub struct Debounce {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debounce {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// (Re)arm the timer: the deadline moves to `now + delay`, superseding
    /// any earlier one.
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Consume the deadline if it has elapsed. Returns true at most once
    /// per arm.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for Debounce {
    fn default() -> Self {
        Self::new(AUTOSAVE_DELAY)
    }
}
