//! Panel orchestration and layout management.
//!
//! Coordinates all UI panels (header, task log, status bar, loading
//! overlay) and manages their layout and interaction results.

use crate::app::AppState;
use crate::ui::{header, overlay_panel, status_bar, task_log_panel};
use eframe::egui;
use std::time::{Duration, Instant};

/// Result of panel interactions that need to be handled by the application coordinator.
pub enum PanelInteraction {
    /// User requested a single simulated fetch
    FetchRequested,
    /// User requested several overlapping fetches
    FetchBurstRequested(usize),
    /// User requested a simulated page transition
    TransitionRequested,
    /// User requested the multi-stage manual operation
    StagedOperationRequested,
    /// User requested clearing finished tasks from the log
    ClearFinishedRequested,
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called
    /// from the eframe::App::update() implementation.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
        now: Instant,
    ) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        // Header panel at the top
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state) {
                interaction = Some(match header_interaction {
                    header::HeaderInteraction::FetchRequested => PanelInteraction::FetchRequested,
                    header::HeaderInteraction::FetchBurstRequested(count) => {
                        PanelInteraction::FetchBurstRequested(count)
                    }
                    header::HeaderInteraction::TransitionRequested => {
                        PanelInteraction::TransitionRequested
                    }
                    header::HeaderInteraction::StagedOperationRequested => {
                        PanelInteraction::StagedOperationRequested
                    }
                    header::HeaderInteraction::ClearFinishedRequested => {
                        PanelInteraction::ClearFinishedRequested
                    }
                });
            }
        });

        // Status panel at the very bottom
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        // Central panel: task log
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Task Log");
            ui.separator();
            task_log_panel::render_task_log(ui, state, now);
        });

        // Loading overlay above everything
        overlay_panel::render_overlay(ctx, state, now);

        // Keep animating while frame-driven busy sources are active
        if state.transition.is_active() || state.staged.is_active() {
            ctx.request_repaint_after(Duration::from_millis(50));
        }

        interaction
    }
}
