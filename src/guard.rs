//! Scoped acquisition of the loading counter.
//!
//! A [`LoadGuard`] claims one reference for exactly the lifetime of a
//! scope: acquired on construction, released on drop. Because release
//! runs on every exit path (normal return, early return, `?`, panic
//! unwind), a guard can never leak a reference the way an unmatched
//! manual `show()` can.

use crate::counter::SharedLoader;

/// RAII claim on the loading counter.
///
/// Holds one acquire for as long as the guard is alive. Move the guard
/// into a background thread to keep the indicator up until the work
/// finishes there; drop it (or let it fall out of scope) to release.
#[derive(Debug)]
pub struct LoadGuard {
    loader: SharedLoader,
}

impl LoadGuard {
    /// Acquires one reference on the given loader.
    pub fn new(loader: &SharedLoader) -> Self {
        loader.acquire();
        Self {
            loader: SharedLoader::clone(loader),
        }
    }

    /// Returns the loader this guard holds a reference on.
    pub fn loader(&self) -> &SharedLoader {
        &self.loader
    }
}

impl Drop for LoadGuard {
    fn drop(&mut self) {
        self.loader.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::LoadCounter;

    #[test]
    fn test_guard_acquires_and_releases() {
        let loader = LoadCounter::new_shared();
        {
            let _guard = LoadGuard::new(&loader);
            assert_eq!(loader.active_count(), 1);
            assert!(loader.is_loading());
        }
        assert_eq!(loader.active_count(), 0);
        assert!(!loader.is_loading());
    }

    #[test]
    fn test_nested_guards_overlap() {
        let loader = LoadCounter::new_shared();
        let outer = LoadGuard::new(&loader);
        {
            let _inner = LoadGuard::new(&loader);
            assert_eq!(loader.active_count(), 2);
        }
        // Inner finished; outer still holds the indicator up
        assert_eq!(loader.active_count(), 1);
        assert!(loader.is_loading());
        drop(outer);
        assert!(!loader.is_loading());
    }

    #[test]
    fn test_guard_releases_on_early_return() {
        fn busy_then_bail(loader: &SharedLoader, bail: bool) -> Option<u32> {
            let _guard = LoadGuard::new(loader);
            if bail {
                return None;
            }
            Some(1)
        }

        let loader = LoadCounter::new_shared();
        assert_eq!(busy_then_bail(&loader, true), None);
        assert_eq!(loader.active_count(), 0);
        assert_eq!(busy_then_bail(&loader, false), Some(1));
        assert_eq!(loader.active_count(), 0);
    }

    #[test]
    fn test_guard_releases_on_panic_unwind() {
        let loader = LoadCounter::new_shared();
        let cloned = SharedLoader::clone(&loader);
        let result = std::panic::catch_unwind(move || {
            let _guard = LoadGuard::new(&cloned);
            panic!("simulated failure mid-operation");
        });
        assert!(result.is_err());
        assert_eq!(loader.active_count(), 0);
    }

    #[test]
    fn test_guard_moves_across_threads() {
        let loader = LoadCounter::new_shared();
        let guard = LoadGuard::new(&loader);
        let handle = std::thread::spawn(move || {
            // Worker owns the claim until it finishes
            drop(guard);
        });
        handle.join().unwrap();
        assert_eq!(loader.active_count(), 0);
    }
}
