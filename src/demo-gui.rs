//! Loadgate Demo GUI Application
//!
//! Interactive demonstration of the loadgate loading coordinator using
//! the egui framework. The demo features:
//! - Simulated background fetches tracked by scoped guards
//! - A simulated page transition tracked by a frame-driven busy binding
//! - A multi-stage operation tracked through the manual show()/hide() surface
//! - A debounced loading overlay that never flickers on short operations
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `io/` - Background simulated task execution
//! - `state/` - Focused state components (tasks, transition, staged op)
//! - `ui/` - UI panel rendering and orchestration
//! - `utils/` - Utility functions for formatting

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use std::time::{Duration, Instant};

mod app;
mod io;
mod state;
mod ui;
mod utils;

use app::{AppState, ApplicationCoordinator, SettingsCoordinator};
use io::TaskRunner;
use ui::panel_manager::{PanelInteraction, PanelManager};

const HIDE_DELAY_KEY: &str = "hide_delay_ms";
const DEFAULT_HIDE_DELAY_MS: u64 = 300;

/// Main application entry point that initializes and launches the demo GUI.
fn main() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_title("Loadgate Demo"),
        ..Default::default()
    };

    eframe::run_native(
        "Loadgate Demo",
        options,
        Box::new(|cc| Ok(Box::new(LoadgateDemoApp::new(cc)))),
    )
}

/// The loadgate demo application.
///
/// Delegates most functionality to coordinators:
/// - `ApplicationCoordinator` handles launching work and per-frame ticking
/// - `PanelManager` handles UI panel layout and rendering
struct LoadgateDemoApp {
    /// Centralized application state
    state: AppState,
    /// Background simulated task runner
    runner: TaskRunner,
}

impl LoadgateDemoApp {
    /// Creates a new demo instance with the hide delay loaded from persistent storage.
    fn new(cc: &eframe::CreationContext) -> Self {
        let hide_delay_ms: u64 =
            SettingsCoordinator::load_setting_or(cc.storage, HIDE_DELAY_KEY, DEFAULT_HIDE_DELAY_MS);

        Self {
            state: AppState::with_hide_delay(Duration::from_millis(hide_delay_ms)),
            runner: TaskRunner::new(),
        }
    }

    /// Handles panel interactions by delegating to ApplicationCoordinator.
    fn handle_panel_interaction(
        &mut self,
        interaction: PanelInteraction,
        ctx: &egui::Context,
        now: Instant,
    ) {
        match interaction {
            PanelInteraction::FetchRequested => {
                ApplicationCoordinator::launch_fetch(&mut self.state, &mut self.runner, ctx);
            }
            PanelInteraction::FetchBurstRequested(count) => {
                ApplicationCoordinator::launch_fetch_burst(
                    &mut self.state,
                    &mut self.runner,
                    ctx,
                    count,
                );
            }
            PanelInteraction::TransitionRequested => {
                ApplicationCoordinator::begin_transition(&mut self.state, now);
            }
            PanelInteraction::StagedOperationRequested => {
                ApplicationCoordinator::start_staged_operation(&mut self.state, now);
            }
            PanelInteraction::ClearFinishedRequested => {
                self.state.tasks.clear_finished();
            }
        }
    }
}

impl eframe::App for LoadgateDemoApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let hide_delay_ms = self.state.overlay.hide_delay().as_millis() as u64;
        SettingsCoordinator::save_setting(storage, HIDE_DELAY_KEY, &hide_delay_ms);
    }

    /// Main update loop that advances busy signals and renders all panels.
    ///
    /// 1. Tick: drain task completions, re-evaluate the transition
    ///    binding, advance the staged operation
    /// 2. Render all panels (including the debounced overlay) via PanelManager
    /// 3. Handle panel interactions
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        ApplicationCoordinator::tick(&mut self.state, &mut self.runner, now);

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state, now) {
            self.handle_panel_interaction(interaction, ctx, now);
        }
    }
}
