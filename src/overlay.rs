//! Debounced visibility state machine for the loading overlay.
//!
//! The overlay shows immediately when loading starts but hides only
//! after a fixed grace window, so operations shorter than the window
//! never flash the indicator, and staggered overlapping operations
//! produce one continuous visible period instead of flicker.
//!
//! The machine is driven by [`OverlayState::observe`], which takes the
//! current loading flag and the current time. Time is a parameter rather
//! than read internally so tests can step through transitions without
//! sleeping.

use std::time::{Duration, Instant};

/// Grace window between loading ending and the overlay hiding.
pub const DEFAULT_HIDE_DELAY: Duration = Duration::from_millis(300);

/// Visibility phase of the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayPhase {
    /// Nothing loading, overlay not shown
    Hidden,
    /// Loading in progress, overlay shown
    Showing,
    /// Loading ended; overlay still shown until the hide deadline passes
    HidingScheduled,
}

/// Tracks overlay visibility with asymmetric show/hide timing.
///
/// Transitions:
/// - `Hidden -> Showing` immediately on loading becoming true
/// - `Showing -> HidingScheduled` on loading becoming false, arming the
///   hide deadline
/// - `HidingScheduled -> Hidden` once the deadline passes with loading
///   still false
/// - `HidingScheduled -> Showing` if loading resumes before the
///   deadline, cancelling the pending hide
///
/// Invariant: the deadline is `Some` iff the phase is `HidingScheduled`.
/// There is a single deadline slot, always cleared or replaced, so two
/// pending hides can never coexist.
#[derive(Debug, Clone)]
pub struct OverlayState {
    phase: OverlayPhase,
    hide_delay: Duration,
    hide_deadline: Option<Instant>,
}

impl Default for OverlayState {
    fn default() -> Self {
        Self::new()
    }
}

impl OverlayState {
    /// Creates a hidden overlay with the default 300 ms hide delay.
    pub fn new() -> Self {
        Self::with_hide_delay(DEFAULT_HIDE_DELAY)
    }

    /// Creates a hidden overlay with a custom hide delay.
    pub fn with_hide_delay(hide_delay: Duration) -> Self {
        Self {
            phase: OverlayPhase::Hidden,
            hide_delay,
            hide_deadline: None,
        }
    }

    /// Returns the current phase.
    pub fn phase(&self) -> OverlayPhase {
        self.phase
    }

    /// Returns true while the overlay should be drawn.
    ///
    /// Both `Showing` and `HidingScheduled` are visible; only `Hidden`
    /// is not.
    pub fn is_visible(&self) -> bool {
        self.phase != OverlayPhase::Hidden
    }

    /// Returns the pending hide deadline, if one is armed.
    ///
    /// The GUI uses this to schedule a repaint at the moment the overlay
    /// is due to disappear.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.hide_deadline
    }

    /// Returns the configured hide delay.
    pub fn hide_delay(&self) -> Duration {
        self.hide_delay
    }

    /// Changes the hide delay for future falling edges.
    ///
    /// An already-armed deadline is left untouched.
    pub fn set_hide_delay(&mut self, hide_delay: Duration) {
        self.hide_delay = hide_delay;
    }

    /// Advances the machine with the current loading flag and time.
    ///
    /// Returns whether the overlay should be drawn this frame. Designed
    /// to be called once per update; calling it more often with the same
    /// inputs is harmless.
    pub fn observe(&mut self, is_loading: bool, now: Instant) -> bool {
        match self.phase {
            OverlayPhase::Hidden => {
                if is_loading {
                    // Show immediately, never delay the rising edge
                    self.phase = OverlayPhase::Showing;
                }
            }
            OverlayPhase::Showing => {
                if !is_loading {
                    self.phase = OverlayPhase::HidingScheduled;
                    self.hide_deadline = Some(now + self.hide_delay);
                }
            }
            OverlayPhase::HidingScheduled => {
                if is_loading {
                    // New operation started inside the grace window:
                    // cancel the pending hide, stay visible
                    self.phase = OverlayPhase::Showing;
                    self.hide_deadline = None;
                } else if self.hide_deadline.is_some_and(|deadline| now >= deadline) {
                    self.phase = OverlayPhase::Hidden;
                    self.hide_deadline = None;
                }
            }
        }
        self.is_visible()
    }
}
