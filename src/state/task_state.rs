//! Simulated task log state.
//!
//! Tracks every background task launched from the demo so the task log
//! panel can show what is in flight and how long finished work took.

use std::time::{Duration, Instant};

/// One launched background task.
#[derive(Debug, Clone)]
pub struct TaskEntry {
    /// Runner-assigned task ID
    pub id: u64,
    /// Human-readable label shown in the task log
    pub label: String,
    /// When the task was launched
    pub started: Instant,
    /// When the task completed (None while still in flight)
    pub finished: Option<Instant>,
}

impl TaskEntry {
    /// Returns true while the task has not completed.
    pub fn in_flight(&self) -> bool {
        self.finished.is_none()
    }
}

/// State related to launched simulated tasks.
///
/// Responsibilities:
/// - Recording task launches and completions
/// - Exposing the log for rendering
/// - Counting in-flight tasks
#[derive(Debug, Clone, Default)]
pub struct TaskState {
    /// Launch-ordered task log
    entries: Vec<TaskEntry>,
}

impl TaskState {
    /// Creates an empty task log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Records a newly-launched task.
    pub fn record_launch(&mut self, id: u64, label: String, now: Instant) {
        self.entries.push(TaskEntry {
            id,
            label,
            started: now,
            finished: None,
        });
    }

    /// Marks the task with the given ID as finished after `elapsed`.
    ///
    /// The finish time is derived from the launch time plus the
    /// reported work duration, so the log shows the task's own timing
    /// rather than completion-polling jitter.
    ///
    /// # Returns
    /// `true` if the task was found and newly marked, `false` otherwise.
    pub fn mark_finished(&mut self, id: u64, elapsed: Duration) -> bool {
        match self
            .entries
            .iter_mut()
            .find(|entry| entry.id == id && entry.in_flight())
        {
            Some(entry) => {
                entry.finished = Some(entry.started + elapsed);
                true
            }
            None => false,
        }
    }

    /// Returns the full task log in launch order.
    pub fn entries(&self) -> &[TaskEntry] {
        &self.entries
    }

    /// Returns the number of tasks still in flight.
    pub fn in_flight_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.in_flight()).count()
    }

    /// Removes finished tasks from the log.
    pub fn clear_finished(&mut self) {
        self.entries.retain(|entry| entry.in_flight());
    }
}
