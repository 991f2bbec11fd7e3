//! Page-transition busy state.
//!
//! Simulates a routing system: a transition is busy until a deadline,
//! and the busy flag is fed to a [`BusyBinding`] once per frame. The
//! binding turns the repeated boolean into exactly one acquire/release
//! pair on the shared loader.

use std::time::{Duration, Instant};

use loadgate::{BusyBinding, SharedLoader};

/// State related to an in-progress simulated page transition.
///
/// Responsibilities:
/// - Holding the transition deadline
/// - Feeding the derived busy flag to the acquisition binding each tick
#[derive(Debug)]
pub struct TransitionState {
    /// Binding that owns this state's claim on the loader
    binding: BusyBinding,
    /// Deadline until which the transition counts as busy
    busy_until: Option<Instant>,
}

impl TransitionState {
    /// Creates an idle transition state bound to the given loader.
    pub fn new(loader: &SharedLoader) -> Self {
        Self {
            binding: BusyBinding::new(loader),
            busy_until: None,
        }
    }

    /// Starts (or restarts) a transition lasting `duration` from `now`.
    pub fn begin(&mut self, duration: Duration, now: Instant) {
        self.busy_until = Some(now + duration);
    }

    /// Re-evaluates the busy flag and feeds it to the binding.
    ///
    /// Called once per frame. The binding makes repeated identical
    /// flags free, so a long transition costs one acquire total.
    pub fn tick(&mut self, now: Instant) {
        let busy = self.busy_until.is_some_and(|deadline| now < deadline);
        self.binding.bind_busy(busy);
        if !busy {
            self.busy_until = None;
        }
    }

    /// Returns true while a transition is in progress.
    pub fn is_active(&self) -> bool {
        self.binding.is_held()
    }

    /// Returns the time left until the transition completes.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.busy_until
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}
