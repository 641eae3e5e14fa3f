//! Demo application state and main loop

use std::path::PathBuf;

use anyhow::Result;
use eframe::egui;

use inspector_core::config::{self, Config};
use inspector_core::inspect::{
    DispatchReport, ExpansionStore, Inspectable, InspectorPanel, InvocationBridge, draw,
};

use crate::cli::TargetChoice;
use crate::targets::{Lantern, WaveSpawner};

/// Demo application state
pub struct App {
    /// User configuration
    config: Config,
    /// Inspector window state
    panel: InspectorPanel,
    /// Foldout expansion states, shared by all targets
    store: ExpansionStore,
    bridge: InvocationBridge,
    /// Where expansion states are saved (None = don't persist)
    state_path: Option<PathBuf>,
    selected: TargetChoice,
    lantern: Lantern,
    spawner: WaveSpawner,
    /// Last action failure (for displaying in UI)
    last_error: Option<String>,
    show_help: bool,
}

impl App {
    pub fn new(
        config: Config,
        store: ExpansionStore,
        state_path: Option<PathBuf>,
        selected: TargetChoice,
    ) -> Self {
        Self {
            panel: InspectorPanel::from_config(&config),
            config,
            store,
            bridge: InvocationBridge::new(),
            state_path,
            selected,
            lantern: Lantern::default(),
            spawner: WaveSpawner::default(),
            last_error: None,
            show_help: true,
        }
    }

    /// Render the inspector for the selected target and apply its events
    fn render_inspector(&mut self, ctx: &egui::Context) -> DispatchReport {
        let target: &mut dyn Inspectable = match self.selected {
            TargetChoice::Lantern => &mut self.lantern,
            TargetChoice::Spawner => &mut self.spawner,
        };
        self.panel
            .render(ctx, target, &mut self.store, &mut self.bridge)
    }

    /// Record failures and persist expansion changes
    fn handle_report(&mut self, report: &DispatchReport) {
        if let Some(failure) = report.failures.last() {
            self.last_error = Some(format!("{}: {}", failure.member, failure.message));
        }

        if report.relayout
            && let Some(path) = &self.state_path
            && let Err(e) = self.store.save(path)
        {
            tracing::warn!("Failed to save expansion state: {}", e);
        }
    }

    fn render_controls(&mut self, ui: &mut egui::Ui) {
        draw::header(ui, "Target");
        ui.horizontal(|ui| {
            ui.radio_value(&mut self.selected, TargetChoice::Lantern, "Lantern");
            ui.radio_value(&mut self.selected, TargetChoice::Spawner, "Wave spawner");
        });

        draw::splitter(ui);

        self.show_help = draw::header_foldout(ui, "Help", self.show_help);
        if self.show_help {
            draw::description(
                ui,
                &format!(
                    "Press {} to toggle the inspector. Foldout states are kept per \
                     member and survive switching targets.",
                    self.config.inspector.panel_toggle
                ),
            );
        }

        draw::splitter(ui);

        ui.label(format!(
            "Failed actions so far: {}",
            self.bridge.failure_count()
        ));
        if let Some(error) = &self.last_error {
            egui::Frame::new()
                .fill(draw::Tint::Red.color())
                .inner_margin(egui::Margin::same(4))
                .show(ui, |ui| {
                    ui.label(error);
                });
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(key) = config::parse_key(&self.config.inspector.panel_toggle)
            && ctx.input(|i| i.key_pressed(key))
        {
            self.panel.toggle();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_controls(ui);
        });

        let report = self.render_inspector(ctx);
        self.handle_report(&report);
    }
}

/// Run the demo application
pub fn run(app: App) -> Result<()> {
    tracing::info!("Starting inspector demo");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Inspector Demo")
            .with_inner_size([960.0, 540.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Inspector Demo",
        native_options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app(state_path: Option<PathBuf>) -> App {
        App::new(
            Config::default(),
            ExpansionStore::new(),
            state_path,
            TargetChoice::Lantern,
        )
    }

    #[test]
    fn test_handle_report_records_last_failure() {
        let mut app = test_app(None);
        let report = DispatchReport {
            failures: vec![inspector_core::inspect::InvocationFailure {
                member: "Lantern::burn".to_string(),
                message: "invalid operation: not enough fuel (0 left)".to_string(),
            }],
            ..Default::default()
        };
        app.handle_report(&report);
        assert_eq!(
            app.last_error.as_deref(),
            Some("Lantern::burn: invalid operation: not enough fuel (0 left)")
        );
    }

    #[test]
    fn test_relayout_saves_expansion_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("expansion.toml");
        let mut app = test_app(Some(path.clone()));

        let id = inspector_core::DescriptorId::new("Lantern", "intensity");
        let state = app.store.toggle(&id);
        app.handle_report(&DispatchReport {
            toggled: vec![(id.clone(), state)],
            relayout: true,
            ..Default::default()
        });

        let loaded = ExpansionStore::load(&path).unwrap();
        assert!(!loaded.is_expanded(&id));
    }

    #[test]
    fn test_frame_without_input() {
        let mut app = test_app(None);
        let ctx = egui::Context::default();
        let mut report = DispatchReport::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            report = app.render_inspector(ctx);
        });
        assert!(report.is_empty());
        assert_eq!(app.lantern, Lantern::default());
    }
}
