//! Handler für Node- und Beam-Presets.

use crate::app::AppState;
use crate::core::{BeamPreset, BeamPresetId, NodePreset, NodePresetId};
use anyhow::bail;

pub fn add_node_preset(state: &mut AppState, preset: NodePreset) {
    state.record_undo_snapshot();
    let name = preset.name().to_string();
    let id = state.project_mut().add_node_preset(preset);
    log::info!("Node-Preset '{}' angelegt ({})", name, id);
}

/// Entfernt ein Node-Preset.
///
/// Ohne `detach` wird ein noch referenziertes Preset abgelehnt, auch wenn nur
/// ein offener Panel-Edit darauf zeigt. Mit `detach` werden zuerst alle
/// Referenzen gelöst.
pub fn remove_node_preset(
    state: &mut AppState,
    preset_id: NodePresetId,
    detach: bool,
) -> anyhow::Result<()> {
    if state.project.node_preset(preset_id).is_none() {
        bail!("Node-Preset {preset_id} existiert nicht");
    }
    let usage = state.project.node_preset_usage(preset_id);
    let pending = state.project.node_preset_pending(preset_id);
    if !detach {
        if usage > 0 {
            bail!("Node-Preset {preset_id} wird noch von {usage} Nodes verwendet");
        }
        if pending {
            bail!("Node-Preset {preset_id} ist im Properties-Panel noch gesetzt");
        }
    }

    state.record_undo_snapshot();
    let project = state.project_mut();
    if usage > 0 || pending {
        let detached = project.detach_node_preset(preset_id);
        log::info!("Node-Preset {} von {} Nodes gelöst", preset_id, detached);
    }
    let removed = project.remove_node_preset(preset_id)?;
    log::info!("Node-Preset '{}' entfernt", removed.name());
    Ok(())
}

pub fn add_beam_preset(state: &mut AppState, preset: BeamPreset) {
    state.record_undo_snapshot();
    let name = preset.name().to_string();
    let id = state.project_mut().add_beam_preset(preset);
    log::info!("Beam-Preset '{}' angelegt ({})", name, id);
}

/// Entfernt ein Beam-Preset (Semantik wie bei Node-Presets).
pub fn remove_beam_preset(
    state: &mut AppState,
    preset_id: BeamPresetId,
    detach: bool,
) -> anyhow::Result<()> {
    if state.project.beam_preset(preset_id).is_none() {
        bail!("Beam-Preset {preset_id} existiert nicht");
    }
    let usage = state.project.beam_preset_usage(preset_id);
    let pending = state.project.beam_preset_pending(preset_id);
    if !detach {
        if usage > 0 {
            bail!("Beam-Preset {preset_id} wird noch von {usage} Beams verwendet");
        }
        if pending {
            bail!("Beam-Preset {preset_id} ist im Properties-Panel noch gesetzt");
        }
    }

    state.record_undo_snapshot();
    let project = state.project_mut();
    if usage > 0 || pending {
        let detached = project.detach_beam_preset(preset_id);
        log::info!("Beam-Preset {} von {} Beams gelöst", preset_id, detached);
    }
    let removed = project.remove_beam_preset(preset_id)?;
    log::info!("Beam-Preset '{}' entfernt", removed.name());
    Ok(())
}
