//! Background simulated task execution.
//!
//! This module runs demo "network calls" on background threads, keeping
//! the GUI responsive while the loading coordinator tracks them. Each
//! task carries a [`LoadGuard`] into its worker thread, so the loader is
//! acquired at launch and released on every worker exit path, including
//! a panicking worker.

use eframe::egui;
use loadgate::{LoadGuard, SharedLoader};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;
use std::time::Duration;

/// Completion notice for one background task.
#[derive(Debug, Clone, Copy)]
pub struct TaskCompletion {
    /// ID assigned by [`TaskRunner::spawn_task`]
    pub task_id: u64,
    /// How long the simulated work took
    pub elapsed: Duration,
}

/// Runs simulated tasks on background threads.
///
/// This struct coordinates worker threads with the main GUI thread: all
/// workers report through one completion channel, and the GUI drains it
/// once per frame via `poll_completion`.
pub struct TaskRunner {
    /// Sender cloned into each worker thread
    completion_sender: Sender<TaskCompletion>,
    /// Channel receiver for task completions
    completion_receiver: Receiver<TaskCompletion>,
    /// Next task ID to assign
    next_task_id: u64,
}

impl TaskRunner {
    /// Creates a runner with no tasks in flight.
    pub fn new() -> Self {
        let (completion_sender, completion_receiver) = channel();
        Self {
            completion_sender,
            completion_receiver,
            next_task_id: 1,
        }
    }

    /// Spawns a simulated task that sleeps for `duration`.
    ///
    /// The loader is acquired before the worker starts and released by
    /// the guard when the worker finishes, so the overlay covers the
    /// whole task lifetime. Call `poll_completion` regularly (e.g. once
    /// per frame) to collect results.
    ///
    /// # Arguments
    /// * `duration` - Simulated work time
    /// * `loader` - Shared loading counter to hold while working
    /// * `ctx` - egui context for requesting a repaint on completion
    ///
    /// # Returns
    /// The ID assigned to the spawned task.
    pub fn spawn_task(
        &mut self,
        duration: Duration,
        loader: &SharedLoader,
        ctx: &egui::Context,
    ) -> u64 {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        // Claim the loader on the launching thread so the indicator is
        // up before the worker is even scheduled
        let guard = LoadGuard::new(loader);

        let sender = self.completion_sender.clone();
        let ctx_handle = ctx.clone();

        thread::spawn(move || {
            thread::sleep(duration);

            // Release before reporting, so the frame that sees the
            // completion also sees the decremented count
            drop(guard);

            let _ = sender.send(TaskCompletion {
                task_id,
                elapsed: duration,
            });

            // Notify GUI thread to repaint
            ctx_handle.request_repaint();
        });

        task_id
    }

    /// Returns the next completed task, if any.
    ///
    /// Non-blocking; call in a loop once per frame to drain all
    /// completions that arrived since the last frame.
    pub fn poll_completion(&mut self) -> Option<TaskCompletion> {
        self.completion_receiver.try_recv().ok()
    }
}

impl Default for TaskRunner {
    fn default() -> Self {
        Self::new()
    }
}
