//! Handler für Aggregat-Edits und strukturelle Änderungen am Projekt.

use crate::app::history::Snapshot;
use crate::app::AppState;
use crate::core::{
    AttributeKey, AttributeValue, BeamAttribute, BeamOption, NodeAttribute, NodeId, NodeOption,
};
use glam::Vec3;
use std::sync::Arc;

// ── Aggregat-Edits (Properties-Panel) ───────────────────────────────

/// Setzt einen Wert im Node-Aggregat (wird erst bei Propagate übernommen).
pub fn set_node_attribute(
    state: &mut AppState,
    attribute: NodeAttribute,
    value: AttributeValue,
) -> anyhow::Result<()> {
    state.project_mut().set_node_attribute(attribute, value)?;
    log::debug!("Node-Aggregat: {} = {}", attribute.label(), value);
    Ok(())
}

pub fn set_node_option(state: &mut AppState, option: NodeOption, value: bool) {
    state.project_mut().set_node_option(option, value);
}

pub fn set_node_name(state: &mut AppState, name: &str) {
    let project = state.project_mut();
    if project.node_selection().count() > 1 {
        log::warn!("Name wird bei Mehrfachselektion nicht übernommen");
    }
    project.set_node_name(name);
}

/// Setzt einen Wert im Beam-Aggregat (wird erst bei Propagate übernommen).
pub fn set_beam_attribute(
    state: &mut AppState,
    attribute: BeamAttribute,
    value: AttributeValue,
) -> anyhow::Result<()> {
    state.project_mut().set_beam_attribute(attribute, value)?;
    log::debug!("Beam-Aggregat: {} = {}", attribute.label(), value);
    Ok(())
}

pub fn set_beam_option(state: &mut AppState, option: BeamOption, value: bool) {
    state.project_mut().set_beam_option(option, value);
}

pub fn set_beam_name(state: &mut AppState, name: &str) {
    let project = state.project_mut();
    if project.beam_selection().count() > 1 {
        log::warn!("Name wird bei Mehrfachselektion nicht übernommen");
    }
    project.set_beam_name(name);
}

/// Schreibt das Node-Aggregat auf alle selektierten Nodes zurück.
pub fn propagate_nodes(state: &mut AppState) {
    if state.project.node_selection().is_empty() {
        log::debug!("Propagate: keine Nodes selektiert");
        return;
    }
    state.record_undo_snapshot();
    let written = state.project_mut().propagate_node_selection();
    log::info!("{} Nodes aktualisiert", written);
}

/// Schreibt das Beam-Aggregat auf alle selektierten Beams zurück.
pub fn propagate_beams(state: &mut AppState) {
    if state.project.beam_selection().is_empty() {
        log::debug!("Propagate: keine Beams selektiert");
        return;
    }
    state.record_undo_snapshot();
    let written = state.project_mut().propagate_beam_selection();
    log::info!("{} Beams aktualisiert", written);
}

// ── Struktur ────────────────────────────────────────────────────────

/// Legt einen neuen Node an.
pub fn add_node(state: &mut AppState, name: &str, position: Vec3) {
    state.record_undo_snapshot();
    let id = state.project_mut().add_node(name, position);
    log::info!("Node {} angelegt bei {}", state.project.describe_node(id), position);
}

/// Legt einen Beam zwischen zwei bestehenden Nodes an.
///
/// Der Snapshot wird erst nach erfolgreichem Anlegen übernommen.
pub fn add_beam(state: &mut AppState, start: NodeId, end: NodeId) -> anyhow::Result<()> {
    let old_project = Arc::clone(&state.project);
    let id = state.project_mut().add_beam(start, end)?;
    state.history.record_snapshot(Snapshot {
        project: old_project,
    });
    log::info!(
        "Beam {} angelegt: {} -> {}",
        id,
        state.project.describe_node(start),
        state.project.describe_node(end)
    );
    Ok(())
}

/// Löscht alle selektierten Nodes samt angehängter Beams.
pub fn delete_selected_nodes(state: &mut AppState) {
    if state.project.node_selection().is_empty() {
        return;
    }
    state.record_undo_snapshot();
    let removed = state.project_mut().delete_selected_nodes();
    log::info!("{} Nodes gelöscht", removed);
}

/// Löscht alle selektierten Beams.
pub fn delete_selected_beams(state: &mut AppState) {
    if state.project.beam_selection().is_empty() {
        return;
    }
    state.record_undo_snapshot();
    let removed = state.project_mut().delete_selected_beams();
    log::info!("{} Beams gelöscht", removed);
}

/// Startet einen Move-Lifecycle (nimmt Undo-Snapshot auf).
///
/// Ohne selektierte Nodes gibt es nichts zu verschieben und keinen Undo-Schritt.
pub fn begin_move(state: &mut AppState) {
    if state.project.node_selection().is_empty() {
        log::debug!("Verschieben ohne Selektion ignoriert");
        return;
    }
    state.record_undo_snapshot();
}

/// Verschiebt alle selektierten Nodes um ein Delta.
pub fn move_selected(state: &mut AppState, delta: Vec3) {
    let moved = state.project_mut().move_selected_nodes(delta);
    log::debug!("{} Nodes verschoben um {}", moved, delta);
}

pub fn end_move(_state: &mut AppState) {
    log::debug!("Verschieben abgeschlossen");
}
