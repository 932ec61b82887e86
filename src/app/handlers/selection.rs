//! Handler für Selektions-Operationen.
//!
//! Jede Selektionsänderung baut das zugehörige Aggregat im Projekt neu auf.
//! Ein Undo-Snapshot wird nur aufgezeichnet, wenn sich die Selektion
//! tatsächlich geändert hat.

use crate::app::history::Snapshot;
use crate::app::AppState;
use crate::core::{BeamId, NodeId, Project};
use std::sync::Arc;

/// Selektierte IDs beider Entity-Arten zum Vergleich vor/nach einer Operation
#[derive(PartialEq)]
struct SelectionKey {
    nodes: Vec<NodeId>,
    beams: Vec<BeamId>,
}

impl SelectionKey {
    fn of(project: &Project) -> Self {
        Self {
            nodes: project.selected_node_ids(),
            beams: project.selected_beam_ids(),
        }
    }
}

/// Führt `op` aus und zeichnet bei geänderter Selektion den alten Stand auf.
fn with_selection_history<F>(state: &mut AppState, op: F) -> anyhow::Result<()>
where
    F: FnOnce(&mut Project) -> anyhow::Result<()>,
{
    let before = SelectionKey::of(&state.project);
    let old_project = Arc::clone(&state.project);

    op(state.project_mut())?;

    let after = SelectionKey::of(&state.project);
    if before != after {
        log::debug!(
            "Selektion: {} Nodes, {} Beams",
            after.nodes.len(),
            after.beams.len()
        );
        if state.options.record_selection_history {
            state.history.record_snapshot(Snapshot {
                project: old_project,
            });
        }
    }
    Ok(())
}

/// Selektiert einen Node (ersetzend oder additiv).
pub fn select_node(state: &mut AppState, node_id: NodeId, additive: bool) -> anyhow::Result<()> {
    with_selection_history(state, |p| p.select_node(node_id, additive))
}

/// Schaltet einen Node in der Selektion um.
pub fn toggle_node(state: &mut AppState, node_id: NodeId) -> anyhow::Result<()> {
    with_selection_history(state, |p| p.toggle_node(node_id))
}

/// Selektiert alle Nodes.
pub fn select_all_nodes(state: &mut AppState) -> anyhow::Result<()> {
    with_selection_history(state, |p| {
        p.select_all_nodes();
        Ok(())
    })
}

/// Invertiert die Node-Selektion.
pub fn invert_nodes(state: &mut AppState) -> anyhow::Result<()> {
    with_selection_history(state, |p| {
        p.invert_node_selection();
        Ok(())
    })
}

/// Hebt die Node-Selektion auf.
pub fn clear_nodes(state: &mut AppState) -> anyhow::Result<()> {
    with_selection_history(state, |p| {
        p.clear_node_selection();
        Ok(())
    })
}

/// Selektiert einen Beam (ersetzend oder additiv).
pub fn select_beam(state: &mut AppState, beam_id: BeamId, additive: bool) -> anyhow::Result<()> {
    with_selection_history(state, |p| p.select_beam(beam_id, additive))
}

/// Schaltet einen Beam in der Selektion um.
pub fn toggle_beam(state: &mut AppState, beam_id: BeamId) -> anyhow::Result<()> {
    with_selection_history(state, |p| p.toggle_beam(beam_id))
}

/// Selektiert alle Beams.
pub fn select_all_beams(state: &mut AppState) -> anyhow::Result<()> {
    with_selection_history(state, |p| {
        p.select_all_beams();
        Ok(())
    })
}

/// Invertiert die Beam-Selektion.
pub fn invert_beams(state: &mut AppState) -> anyhow::Result<()> {
    with_selection_history(state, |p| {
        p.invert_beam_selection();
        Ok(())
    })
}

/// Hebt die Beam-Selektion auf.
pub fn clear_beams(state: &mut AppState) -> anyhow::Result<()> {
    with_selection_history(state, |p| {
        p.clear_beam_selection();
        Ok(())
    })
}
