//! Status bar UI rendering
//!
//! Handles the bottom status bar displaying the live loading snapshot
//! and process memory usage.

use crate::app::AppState;
use crate::utils::{format_memory_mb, get_current_memory_mb};
use eframe::egui;
use egui::RichText;
use loadgate::OverlayPhase;

/// Renders the status panel at the bottom of the window.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        // Always show memory usage first
        let memory_text = format_memory_mb(get_current_memory_mb());
        ui.label(RichText::new(&memory_text).strong());

        ui.label(RichText::new("|").strong());

        let snapshot = state.loader.snapshot();
        let loading_text = if snapshot.is_loading {
            format!("In flight: {}", snapshot.active_count)
        } else {
            "Idle".to_string()
        };
        ui.label(RichText::new(loading_text).strong());

        ui.label(RichText::new("|").strong());

        let phase_text = match state.overlay.phase() {
            OverlayPhase::Hidden => "Overlay: hidden",
            OverlayPhase::Showing => "Overlay: showing",
            OverlayPhase::HidingScheduled => "Overlay: hide pending",
        };
        let phase_label = RichText::new(phase_text).strong();
        if state.overlay.phase() == OverlayPhase::HidingScheduled {
            ui.label(phase_label.color(egui::Color32::YELLOW));
        } else {
            ui.label(phase_label);
        }

        if let Some((stage, total)) = state.staged.progress() {
            ui.label(RichText::new("|").strong());
            ui.label(RichText::new(format!("Staged sync: stage {}/{}", stage, total)).strong());
        }
    });
}
