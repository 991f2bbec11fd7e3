//! Multi-stage operation state.
//!
//! Models an operation whose busy condition is not a single boolean: a
//! fixed number of sequential stages, each taking a fixed time. The
//! coordinator brackets the whole sequence with the loader's manual
//! `show()`/`hide()` surface; this state only tracks stage progress.

use std::time::{Duration, Instant};

/// Progress of the active staged operation.
#[derive(Debug, Clone, Copy)]
struct StagedOp {
    /// Zero-based index of the stage currently running
    stage: usize,
    /// Total number of stages
    total: usize,
    /// How long each stage takes
    stage_duration: Duration,
    /// When the current stage completes
    next_stage_at: Instant,
}

/// State related to the demo's multi-stage manual operation.
///
/// At most one staged operation runs at a time.
#[derive(Debug, Default)]
pub struct StagedOpState {
    current: Option<StagedOp>,
}

impl StagedOpState {
    /// Creates an idle staged-operation state.
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Returns true while a staged operation is running.
    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    /// Starts a staged operation of `total` stages.
    ///
    /// # Returns
    /// `true` if the operation was started, `false` if one is already
    /// running (the caller must not issue a second `show()` in that case).
    pub fn start(&mut self, total: usize, stage_duration: Duration, now: Instant) -> bool {
        if self.current.is_some() || total == 0 {
            return false;
        }
        self.current = Some(StagedOp {
            stage: 0,
            total,
            stage_duration,
            next_stage_at: now + stage_duration,
        });
        true
    }

    /// Advances stage progress against the clock.
    ///
    /// # Returns
    /// `true` exactly once, on the tick where the final stage completes;
    /// the caller must issue the matching `hide()` then.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(op) = &mut self.current else {
            return false;
        };
        if now < op.next_stage_at {
            return false;
        }
        op.stage += 1;
        if op.stage >= op.total {
            self.current = None;
            return true;
        }
        op.next_stage_at = now + op.stage_duration;
        false
    }

    /// Returns `(current_stage, total_stages)` for display, 1-based.
    pub fn progress(&self) -> Option<(usize, usize)> {
        self.current.map(|op| (op.stage + 1, op.total))
    }
}
