//! Zentraler Anwendungszustand.

use super::history::{EditHistory, Snapshot};
use super::CommandLog;
use crate::core::Project;
use crate::shared::EditorOptions;
use std::sync::Arc;

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Bearbeitetes Projekt (Arc für O(1)-Undo-Snapshots, COW beim Ändern)
    pub project: Arc<Project>,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Protokoll ausgeführter Commands
    pub command_log: CommandLog,
    /// Undo/Redo-History
    pub history: EditHistory,
}

impl AppState {
    /// Erstellt einen leeren AppState mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren AppState mit den übergebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        let options = options.sanitized();
        Self {
            project: Arc::new(Project::default()),
            history: EditHistory::new_with_capacity(options.history_depth),
            command_log: CommandLog::new(),
            options,
        }
    }

    /// Ersetzt das Projekt und verwirft die History.
    pub fn load_project(&mut self, project: Project) {
        log::info!(
            "Projekt '{}' geladen: {} Nodes, {} Beams",
            project.name,
            project.node_count(),
            project.beam_count()
        );
        self.project = Arc::new(project);
        self.history = EditHistory::new_with_capacity(self.options.history_depth);
    }

    /// Mutabler Zugriff auf das Projekt (klont nur, wenn ein Snapshot es noch teilt).
    pub fn project_mut(&mut self) -> &mut Project {
        Arc::make_mut(&mut self.project)
    }

    /// Nimmt einen Undo-Snapshot des aktuellen Zustands auf.
    pub fn record_undo_snapshot(&mut self) {
        let snap = Snapshot::from_state(self);
        self.history.record_snapshot(snap);
    }

    /// Gibt zurück, ob Undo verfügbar ist.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob Redo verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
