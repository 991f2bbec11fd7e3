//! Application-level coordination and workflow management.
//!
//! Handles high-level demo operations: launching simulated work, driving
//! the frame-by-frame busy signals, and pairing the manual show()/hide()
//! calls around the staged operation.

use crate::app::AppState;
use crate::io::TaskRunner;
use rand::Rng;
use std::time::{Duration, Instant};

/// How long a simulated page transition stays busy.
const TRANSITION_DURATION: Duration = Duration::from_millis(800);

/// Stage count and per-stage time for the staged operation.
const STAGED_OP_STAGES: usize = 3;
const STAGED_OP_STAGE_DURATION: Duration = Duration::from_millis(400);

/// Coordinates application-level operations and workflows.
///
/// This struct is responsible for:
/// - Launching simulated background fetches
/// - Starting page transitions and staged operations
/// - Advancing all busy signals once per frame
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Launches a simulated fetch with a random duration.
    ///
    /// The fetch holds the loader via a scoped guard that travels into
    /// the worker thread, so no completion path can leak a reference.
    pub fn launch_fetch(state: &mut AppState, runner: &mut TaskRunner, ctx: &egui::Context) {
        let millis = rand::thread_rng().gen_range(150..=1200);
        let duration = Duration::from_millis(millis);

        let task_id = runner.spawn_task(duration, &state.loader, ctx);
        state.tasks.record_launch(
            task_id,
            format!("fetch #{} ({} ms)", task_id, millis),
            Instant::now(),
        );
    }

    /// Launches a burst of overlapping fetches.
    ///
    /// Their staggered completions exercise the reference counting: the
    /// overlay must stay up until the slowest one finishes.
    pub fn launch_fetch_burst(
        state: &mut AppState,
        runner: &mut TaskRunner,
        ctx: &egui::Context,
        count: usize,
    ) {
        for _ in 0..count {
            Self::launch_fetch(state, runner, ctx);
        }
    }

    /// Starts a simulated page transition.
    ///
    /// The transition is tracked declaratively: its busy flag is fed to
    /// an acquisition binding on every tick.
    pub fn begin_transition(state: &mut AppState, now: Instant) {
        state.transition.begin(TRANSITION_DURATION, now);
    }

    /// Starts the multi-stage operation, bracketed by show()/hide().
    ///
    /// show() is issued only when the operation actually starts; the
    /// matching hide() is issued by [`tick`](Self::tick) on the frame
    /// where the final stage completes.
    pub fn start_staged_operation(state: &mut AppState, now: Instant) {
        if state
            .staged
            .start(STAGED_OP_STAGES, STAGED_OP_STAGE_DURATION, now)
        {
            state.loader.show();
        }
    }

    /// Advances all busy signals and collects finished work.
    ///
    /// Called once per frame in the update loop, before rendering.
    pub fn tick(state: &mut AppState, runner: &mut TaskRunner, now: Instant) {
        // Drain completions that arrived since the last frame
        while let Some(completion) = runner.poll_completion() {
            state.tasks.mark_finished(completion.task_id, completion.elapsed);
        }

        // Re-evaluate the declarative transition flag
        state.transition.tick(now);

        // Advance the staged operation; pair its show() with hide()
        if state.staged.tick(now) {
            state.loader.hide();
        }
    }
}
