//! Header UI rendering
//!
//! Handles the top toolbar: launching demo work and tuning the overlay
//! hide delay.

use crate::app::AppState;
use eframe::egui;
use std::time::Duration;

/// Interactions a user can trigger from the header.
pub enum HeaderInteraction {
    /// Launch a single simulated fetch
    FetchRequested,
    /// Launch several overlapping simulated fetches
    FetchBurstRequested(usize),
    /// Start a simulated page transition
    TransitionRequested,
    /// Start the multi-stage manually-tracked operation
    StagedOperationRequested,
    /// Remove finished tasks from the log
    ClearFinishedRequested,
}

/// Renders the header toolbar.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable application state (the hide-delay slider writes
///   straight into the overlay state machine)
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        ui.heading("Loadgate Demo");
        ui.separator();

        if ui.button("Fetch").clicked() {
            interaction = Some(HeaderInteraction::FetchRequested);
        }
        if ui.button("Fetch x5").clicked() {
            interaction = Some(HeaderInteraction::FetchBurstRequested(5));
        }
        if ui.button("Page transition").clicked() {
            interaction = Some(HeaderInteraction::TransitionRequested);
        }

        let staged_active = state.staged.is_active();
        if ui
            .add_enabled(!staged_active, egui::Button::new("Staged sync"))
            .clicked()
        {
            interaction = Some(HeaderInteraction::StagedOperationRequested);
        }

        ui.separator();
        let has_finished = state.tasks.entries().len() > state.tasks.in_flight_count();
        if ui
            .add_enabled(has_finished, egui::Button::new("Clear finished"))
            .clicked()
        {
            interaction = Some(HeaderInteraction::ClearFinishedRequested);
        }
    });

    ui.horizontal(|ui| {
        ui.label("Hide delay:");
        let mut hide_delay_ms = state.overlay.hide_delay().as_millis() as u64;
        let response = ui.add(
            egui::Slider::new(&mut hide_delay_ms, 0..=2000)
                .suffix(" ms")
                .step_by(50.0),
        );
        if response.changed() {
            state.overlay.set_hide_delay(Duration::from_millis(hide_delay_ms));
        }
    });

    interaction
}
