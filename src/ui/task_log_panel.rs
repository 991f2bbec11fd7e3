//! Task log UI rendering
//!
//! Central panel listing every launched simulated task with its current
//! status and elapsed time.

use crate::app::AppState;
use crate::utils::format_duration_ms;
use eframe::egui;
use egui::RichText;
use std::time::Instant;

/// Renders the task log in the central panel.
pub fn render_task_log(ui: &mut egui::Ui, state: &AppState, now: Instant) {
    if state.tasks.entries().is_empty() && !state.transition.is_active() {
        ui.label("No tasks yet. Launch one from the toolbar above.");
        return;
    }

    if let Some(remaining) = state.transition.remaining(now) {
        ui.label(
            RichText::new(format!(
                "Page transition in progress ({} left)",
                format_duration_ms(remaining)
            ))
            .italics(),
        );
        ui.separator();
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        // Newest first
        for entry in state.tasks.entries().iter().rev() {
            ui.horizontal(|ui| {
                match entry.finished {
                    Some(finished) => {
                        ui.label(RichText::new("done").color(egui::Color32::LIGHT_GREEN));
                        ui.label(&entry.label);
                        ui.label(format!(
                            "took {}",
                            format_duration_ms(finished.duration_since(entry.started))
                        ));
                    }
                    None => {
                        ui.add(egui::Spinner::new().size(12.0));
                        ui.label(&entry.label);
                        ui.label(format!(
                            "running for {}",
                            format_duration_ms(now.duration_since(entry.started))
                        ));
                    }
                }
            });
        }
    });
}
