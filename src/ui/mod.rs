//! UI panel rendering for the loadgate demo.
//!
//! Each panel is a free render function taking the egui UI and the
//! application state, orchestrated by the `PanelManager`.

pub mod header;
pub mod overlay_panel;
pub mod panel_manager;
pub mod status_bar;
pub mod task_log_panel;
