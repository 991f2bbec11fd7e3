//! Reference-counted loading state.
//!
//! This module is the single source of truth for "is anything loading".
//! Every in-flight operation claims one reference via `acquire` and drops
//! it via `release`; the loading flag is derived from the count and is
//! never stored separately, so it cannot drift.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use once_cell::sync::Lazy;

/// Point-in-time view of the loading state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivitySnapshot {
    /// Number of currently-registered in-flight operations
    pub active_count: usize,
    /// Derived flag: true iff `active_count > 0`
    pub is_loading: bool,
}

/// Reference counter for concurrent in-flight operations.
///
/// Responsibilities:
/// - Counting overlapping operations so one finishing early does not
///   clear the loading flag while others are still running
/// - Clamping mismatched releases at zero instead of going negative
/// - Providing atomic mutation so interleaved completions on any thread
///   never lose an update
///
/// The counter has no fallible operations: `acquire` and `release` always
/// succeed, and a `release` without a matching `acquire` is treated as a
/// benign caller bug (clamped, asserted in debug builds).
#[derive(Debug, Default)]
pub struct LoadCounter {
    /// Count of outstanding acquire calls
    active: AtomicUsize,
}

/// Shared handle to a [`LoadCounter`].
///
/// Constructed once and passed to every consumer (UI panels, background
/// workers, bindings); tests create fresh isolated instances the same way.
pub type SharedLoader = Arc<LoadCounter>;

impl LoadCounter {
    /// Creates a counter with no in-flight operations.
    pub fn new() -> Self {
        Self {
            active: AtomicUsize::new(0),
        }
    }

    /// Creates a new shared handle to a fresh counter.
    pub fn new_shared() -> SharedLoader {
        Arc::new(Self::new())
    }

    /// Registers one in-flight operation.
    ///
    /// Always succeeds. `is_loading` becomes true if it was false.
    pub fn acquire(&self) {
        self.active.fetch_add(1, Ordering::AcqRel);
    }

    /// Unregisters one in-flight operation, clamped at zero.
    ///
    /// `is_loading` becomes false only when the count reaches zero.
    /// A release with no outstanding acquire is clamped rather than
    /// underflowing; debug builds assert so mismatched pairs in caller
    /// code surface during development.
    pub fn release(&self) {
        let result = self
            .active
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| n.checked_sub(1));
        debug_assert!(result.is_ok(), "release() without a matching acquire()");
    }

    /// Returns the current count of in-flight operations.
    pub fn active_count(&self) -> usize {
        self.active.load(Ordering::Acquire)
    }

    /// Returns true if any operation is in flight.
    pub fn is_loading(&self) -> bool {
        self.active_count() > 0
    }

    /// Returns a consistent `(active_count, is_loading)` view.
    pub fn snapshot(&self) -> ActivitySnapshot {
        let active_count = self.active_count();
        ActivitySnapshot {
            active_count,
            is_loading: active_count > 0,
        }
    }

    // ===== Manual Control Surface =====
    // Imperative entry points for callers whose busy condition is not a
    // single synchronous boolean (multi-stage operations, externally
    // triggered sequences).

    /// Shows the loading indicator for one manually-tracked operation.
    ///
    /// Equivalent to [`acquire`](Self::acquire). Every `show()` must be
    /// matched by exactly one later [`hide`](Self::hide) — the surface
    /// performs no automatic pairing, so an early return or panic between
    /// the two calls leaks a reference and keeps the indicator visible.
    /// Prefer [`LoadGuard`](crate::LoadGuard) or
    /// [`BusyBinding`](crate::BusyBinding) when the operation fits a
    /// scope or a boolean signal.
    pub fn show(&self) {
        self.acquire();
    }

    /// Hides the loading indicator for one manually-tracked operation.
    ///
    /// Equivalent to [`release`](Self::release), including the clamp at
    /// zero. See [`show`](Self::show) for the pairing convention.
    pub fn hide(&self) {
        self.release();
    }
}

/// Process-wide loader handle.
static GLOBAL_LOADER: Lazy<SharedLoader> = Lazy::new(LoadCounter::new_shared);

/// Returns the process-wide shared loader.
///
/// Convenience for callers that cannot thread a [`SharedLoader`] through
/// their call path. Code under test should construct its own counter via
/// [`LoadCounter::new_shared`] instead, so tests stay isolated.
pub fn shared() -> SharedLoader {
    Arc::clone(&GLOBAL_LOADER)
}
