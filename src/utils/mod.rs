//! Utility modules for the loadgate demo.

pub mod formatting;

// Re-export commonly used functions
pub use formatting::{format_duration_ms, format_memory_mb, get_current_memory_mb};
