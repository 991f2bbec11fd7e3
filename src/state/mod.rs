//! State management modules for the loadgate demo.
//!
//! This module contains state-only logic (no UI concerns):
//! - Task state (launched simulated tasks and their outcomes)
//! - Transition state (deadline-driven page-transition busy signal)
//! - Staged operation state (multi-stage manually-tracked operation)

mod task_state;
mod transition_state;
mod staged_op_state;

pub use task_state::{TaskEntry, TaskState};
pub use transition_state::TransitionState;
pub use staged_op_state::StagedOpState;
