//! Edge-triggered binding from a caller's busy flag to the counter.
//!
//! Immediate-mode UIs re-evaluate their state every frame, so a caller's
//! "I am busy" condition arrives as a boolean repeated once per update
//! rather than as explicit start/stop calls. [`BusyBinding`] converts
//! that repeated signal into exactly one acquire per rising edge and one
//! release per falling edge, and guarantees the release on teardown.

use crate::counter::SharedLoader;

/// Per-caller adapter translating a boolean busy signal into paired
/// acquire/release calls.
///
/// Responsibilities:
/// - At most one outstanding acquire per binding instance
/// - Idempotence under repeated identical input (calling
///   [`bind_busy`](Self::bind_busy) with an unchanged flag is a no-op)
/// - Releasing an outstanding acquire when the binding is dropped, so a
///   caller torn down mid-operation cannot leak a reference
#[derive(Debug)]
pub struct BusyBinding {
    loader: SharedLoader,
    /// True while this binding's own acquire is outstanding
    held: bool,
}

impl BusyBinding {
    /// Creates a binding that is not currently holding a reference.
    pub fn new(loader: &SharedLoader) -> Self {
        Self {
            loader: SharedLoader::clone(loader),
            held: false,
        }
    }

    /// Feeds the caller's current busy state to the binding.
    ///
    /// Call this on every update with the freshly-computed flag:
    /// - `false -> true` transition acquires once
    /// - `true -> false` transition releases once
    /// - an unchanged value does nothing
    pub fn bind_busy(&mut self, busy: bool) {
        if busy == self.held {
            return;
        }
        if busy {
            self.loader.acquire();
        } else {
            self.loader.release();
        }
        self.held = busy;
    }

    /// Returns true if this binding currently holds a reference.
    pub fn is_held(&self) -> bool {
        self.held
    }
}

impl Drop for BusyBinding {
    fn drop(&mut self) {
        if self.held {
            self.loader.release();
        }
    }
}
