pub mod counter;
pub mod binding;
pub mod guard;
pub mod overlay;

// Export the counter store and manual control surface
pub use counter::{shared, ActivitySnapshot, LoadCounter, SharedLoader};

// Export acquisition adapters
pub use binding::BusyBinding;
pub use guard::LoadGuard;

// Export the overlay state machine
pub use overlay::{OverlayPhase, OverlayState, DEFAULT_HIDE_DELAY};
