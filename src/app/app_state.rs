//! Centralized application state for the loadgate demo.
//!
//! This module implements the State pattern by composing focused state
//! components that each manage a specific aspect of the application's
//! state. The shared loader is constructed here once and handed to every
//! component that claims it, so the whole application reference-counts
//! against a single counter while tests can build isolated instances.

use crate::state::{StagedOpState, TaskState, TransitionState};
use loadgate::{LoadCounter, OverlayState, SharedLoader};
use std::time::Duration;

/// Main application state composed of focused state components.
pub struct AppState {
    /// Shared loading counter every busy source claims against
    pub loader: SharedLoader,

    /// Debounced overlay visibility state machine
    pub overlay: OverlayState,

    /// Launched simulated tasks
    pub tasks: TaskState,

    /// Simulated page-transition busy signal
    pub transition: TransitionState,

    /// Multi-stage manually-tracked operation
    pub staged: StagedOpState,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new application state with the default hide delay.
    pub fn new() -> Self {
        Self::with_hide_delay(loadgate::DEFAULT_HIDE_DELAY)
    }

    /// Creates a new AppState with a specific overlay hide delay loaded from storage.
    pub fn with_hide_delay(hide_delay: Duration) -> Self {
        let loader = LoadCounter::new_shared();
        let transition = TransitionState::new(&loader);

        Self {
            loader,
            overlay: OverlayState::with_hide_delay(hide_delay),
            tasks: TaskState::new(),
            transition,
            staged: StagedOpState::new(),
        }
    }
}
