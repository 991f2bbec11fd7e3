use anyhow::Result;
use loadgate::{BusyBinding, LoadCounter, LoadGuard, OverlayPhase, OverlayState};
use std::thread;
use std::time::{Duration, Instant};

#[test]
fn test_count_tracks_net_unmatched_acquires() -> Result<()> {
    let loader = LoadCounter::new_shared();

    // Arbitrary interleaving of three overlapping operations
    loader.acquire();
    loader.acquire();
    loader.release();
    loader.acquire();
    assert_eq!(loader.active_count(), 2);
    assert!(loader.is_loading());

    loader.release();
    assert!(loader.is_loading());
    loader.release();
    assert_eq!(loader.active_count(), 0);
    assert!(!loader.is_loading());
    Ok(())
}

#[test]
fn test_is_loading_derived_from_count_everywhere() {
    let loader = LoadCounter::new_shared();
    for step in 0..20 {
        if step % 3 == 2 {
            loader.release();
        } else {
            loader.acquire();
        }
        let snap = loader.snapshot();
        assert_eq!(snap.is_loading, snap.active_count > 0);
        assert_eq!(snap.active_count, loader.active_count());
    }
}

#[cfg(not(debug_assertions))]
#[test]
fn test_release_at_zero_clamps_silently() {
    // Release-build behavior: the mismatched release is absorbed
    let loader = LoadCounter::new_shared();
    loader.release();
    let snap = loader.snapshot();
    assert_eq!(snap.active_count, 0);
    assert!(!snap.is_loading);

    // A later normal pair still works
    loader.acquire();
    assert!(loader.is_loading());
    loader.release();
    assert!(!loader.is_loading());
}

#[test]
fn test_binding_pairs_exactly_once_across_repeated_frames() {
    let loader = LoadCounter::new_shared();
    let mut binding = BusyBinding::new(&loader);

    // Simulated frames: busy flag repeats many times per phase
    for _ in 0..50 {
        binding.bind_busy(true);
    }
    assert_eq!(loader.active_count(), 1);

    for _ in 0..50 {
        binding.bind_busy(false);
    }
    assert_eq!(loader.active_count(), 0);
}

#[test]
fn test_binding_teardown_while_busy_releases_once() {
    let loader = LoadCounter::new_shared();
    let mut binding = BusyBinding::new(&loader);
    binding.bind_busy(true);
    drop(binding);
    assert_eq!(loader.snapshot().active_count, 0);
}

#[test]
fn test_guard_holds_across_worker_thread() {
    let loader = LoadCounter::new_shared();

    let guard = LoadGuard::new(&loader);
    assert!(loader.is_loading());

    let handle = thread::spawn(move || {
        thread::sleep(Duration::from_millis(5));
        drop(guard);
    });
    handle.join().unwrap();
    assert!(!loader.is_loading());
}

#[test]
fn test_concurrent_pairs_reach_zero() {
    // N threads each run M acquire/release pairs; any interleaving of
    // completions must end with the counter back at zero
    let loader = LoadCounter::new_shared();
    let threads = 8;
    let pairs = 1000;

    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let loader = loader.clone();
            thread::spawn(move || {
                for _ in 0..pairs {
                    loader.acquire();
                    loader.release();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(loader.active_count(), 0);
    assert!(!loader.is_loading());
}

#[test]
fn test_overlay_debounce_bridges_staggered_operations() {
    let mut overlay = OverlayState::new();
    let t0 = Instant::now();

    // First operation shows the overlay
    assert!(overlay.observe(true, t0));

    // It finishes at t=100ms; the hide is scheduled, not immediate
    overlay.observe(false, t0 + Duration::from_millis(100));
    let mut saw_hidden = false;
    for ms in (110..250).step_by(10) {
        let visible = overlay.observe(false, t0 + Duration::from_millis(ms));
        saw_hidden |= !visible;
    }

    // A second operation starts at t=250ms, inside the 300ms window
    assert!(overlay.observe(true, t0 + Duration::from_millis(250)));
    assert!(!saw_hidden, "overlay must stay continuously visible");
    assert_eq!(overlay.phase(), OverlayPhase::Showing);
}

#[test]
fn test_overlay_suppresses_flash_for_short_operation() {
    let mut overlay = OverlayState::new();
    let t0 = Instant::now();

    // 50ms busy pulse: visible immediately at t=0
    assert!(overlay.observe(true, t0));
    // Condition clears at t=50ms but the overlay stays up
    assert!(overlay.observe(false, t0 + Duration::from_millis(50)));
    assert!(overlay.observe(false, t0 + Duration::from_millis(200)));
    // Hidden only once the 300ms window (from the falling edge) elapses
    assert!(!overlay.observe(false, t0 + Duration::from_millis(350)));
}

#[test]
fn test_overlay_follows_counter_through_overlapping_work() {
    // End-to-end: two bindings share a loader; the overlay reacts only
    // to the derived flag, never to individual callers
    let loader = LoadCounter::new_shared();
    let mut page = BusyBinding::new(&loader);
    let mut request = BusyBinding::new(&loader);
    let mut overlay = OverlayState::new();
    let t0 = Instant::now();

    page.bind_busy(true);
    request.bind_busy(true);
    assert!(overlay.observe(loader.is_loading(), t0));

    // Page transition ends first; request still in flight
    page.bind_busy(false);
    assert!(overlay.observe(loader.is_loading(), t0 + Duration::from_millis(100)));
    assert_eq!(overlay.phase(), OverlayPhase::Showing);

    // Request ends; hide is debounced, then lands
    request.bind_busy(false);
    assert!(overlay.observe(loader.is_loading(), t0 + Duration::from_millis(200)));
    assert_eq!(overlay.phase(), OverlayPhase::HidingScheduled);
    assert!(!overlay.observe(loader.is_loading(), t0 + Duration::from_millis(600)));
}

#[test]
fn test_manual_surface_mirrors_counter_semantics() -> Result<()> {
    let loader = LoadCounter::new_shared();

    // Multi-step operation bracketed by show/hide
    loader.show();
    assert!(loader.is_loading());

    // A scoped fetch overlaps the manual window
    {
        let _guard = LoadGuard::new(&loader);
        assert_eq!(loader.active_count(), 2);
    }
    assert!(loader.is_loading());

    loader.hide();
    assert!(!loader.is_loading());
    Ok(())
}
