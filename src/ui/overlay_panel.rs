//! Loading overlay UI rendering
//!
//! Draws a modal loading indicator over the whole window while the
//! overlay state machine reports visible. This panel only reads the
//! loader; it never mutates the counter.

use crate::app::AppState;
use eframe::egui;
use std::time::Instant;

/// Advances the overlay state machine and draws the overlay if visible.
///
/// Called once per frame, after all busy sources have ticked. Schedules
/// a repaint for the pending hide deadline so the overlay disappears on
/// time even when no other event wakes the UI.
pub fn render_overlay(ctx: &egui::Context, state: &mut AppState, now: Instant) {
    let visible = state.overlay.observe(state.loader.is_loading(), now);

    if let Some(deadline) = state.overlay.next_deadline() {
        ctx.request_repaint_after(deadline.saturating_duration_since(now));
    }

    if !visible {
        return;
    }

    // Dim the window behind the indicator
    let dim_painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Foreground,
        egui::Id::new("loading_dim"),
    ));
    dim_painter.rect_filled(
        ctx.content_rect(),
        0.0,
        egui::Color32::from_black_alpha(96),
    );

    egui::Area::new(egui::Id::new("loading_overlay"))
        .order(egui::Order::Foreground)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            egui::Frame::window(&ctx.style()).show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.add(egui::Spinner::new().size(24.0));
                    ui.label(egui::RichText::new("Loading...").strong());
                });
            });
        });
}
