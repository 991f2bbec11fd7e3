//! Background execution of simulated tasks.

pub mod task_runner;

// Re-export commonly used types
pub use task_runner::{TaskCompletion, TaskRunner};
