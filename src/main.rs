//! Softbody-Rig-Editor (Headless).
//!
//! Spielt eine skriptgesteuerte Bearbeitungssitzung am Demo-Rig ab und
//! protokolliert nach jedem Schritt den Zustand der Properties-Panels.

use softbody_rig_editor::demo::{build_demo_rig, scripted_session};
use softbody_rig_editor::{
    AppController, AppIntent, AppState, EditorOptions, EntityPanel, FieldState,
};

fn main() -> anyhow::Result<()> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Softbody-Rig-Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let rig = build_demo_rig()?;
        let intents = scripted_session(&rig);

        let mut app = EditorApp::new();
        app.state.load_project(rig.project);
        app.process_events(intents);

        log::info!(
            "Sitzung beendet: {} Commands ausgeführt, Undo verfügbar: {}",
            app.state.command_log.len(),
            app.state.can_undo()
        );
        Ok(())
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
}

impl EditorApp {
    fn new() -> Self {
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        Self {
            state: AppState::with_options(editor_options),
            controller: AppController::new(),
        }
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for (step, event) in events.into_iter().enumerate() {
            log::info!("Schritt {}: {:?}", step + 1, event);
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
            self.log_properties();
        }
    }

    fn log_properties(&self) {
        let view = self.controller.build_properties_view(&self.state);
        log_panel("Nodes", view.nodes.as_ref());
        log_panel("Beams", view.beams.as_ref());
    }
}

fn log_panel(title: &str, panel: Option<&EntityPanel>) {
    let Some(panel) = panel else {
        log::debug!("  {}: keine Selektion", title);
        return;
    };
    log::info!(
        "  {}: {} selektiert{}, {} Felder uneinheitlich",
        title,
        panel.count,
        panel
            .name
            .as_deref()
            .map(|n| format!(" ('{n}')"))
            .unwrap_or_default(),
        panel.mixed_count()
    );
    for field in &panel.fields {
        match field.state {
            FieldState::Uniform => log::debug!("    {} = {}", field.label, field.value),
            FieldState::Mixed => log::debug!("    {} = <gemischt>", field.label),
        }
    }
    let checked: Vec<&str> = panel
        .options
        .iter()
        .filter(|o| o.checked)
        .map(|o| o.label)
        .collect();
    if !checked.is_empty() {
        log::debug!("    Optionen: {}", checked.join(", "));
    }
}
