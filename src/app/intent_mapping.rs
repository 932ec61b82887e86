//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    let auto_propagate = state.options.auto_propagate_edits;

    match intent {
        AppIntent::NodeClicked { node_id, additive } => {
            vec![AppCommand::SelectNode { node_id, additive }]
        }
        AppIntent::NodeToggleRequested { node_id } => vec![AppCommand::ToggleNode { node_id }],
        AppIntent::BeamClicked { beam_id, additive } => {
            vec![AppCommand::SelectBeam { beam_id, additive }]
        }
        AppIntent::BeamToggleRequested { beam_id } => vec![AppCommand::ToggleBeam { beam_id }],
        AppIntent::SelectAllNodesRequested => vec![AppCommand::SelectAllNodes],
        AppIntent::InvertNodeSelectionRequested => vec![AppCommand::InvertNodeSelection],
        AppIntent::SelectAllBeamsRequested => vec![AppCommand::SelectAllBeams],
        AppIntent::InvertBeamSelectionRequested => vec![AppCommand::InvertBeamSelection],
        AppIntent::ClearSelectionRequested => vec![
            AppCommand::ClearNodeSelection,
            AppCommand::ClearBeamSelection,
        ],

        AppIntent::NodeAttributeEdited { attribute, value } => with_node_propagate(
            AppCommand::SetNodeAggregateAttribute { attribute, value },
            auto_propagate,
        ),
        AppIntent::NodeOptionEdited { option, value } => with_node_propagate(
            AppCommand::SetNodeAggregateOption { option, value },
            auto_propagate,
        ),
        AppIntent::NodeNameEdited { name } => with_node_propagate(
            AppCommand::SetNodeAggregateName { name },
            auto_propagate,
        ),
        AppIntent::BeamAttributeEdited { attribute, value } => with_beam_propagate(
            AppCommand::SetBeamAggregateAttribute { attribute, value },
            auto_propagate,
        ),
        AppIntent::BeamOptionEdited { option, value } => with_beam_propagate(
            AppCommand::SetBeamAggregateOption { option, value },
            auto_propagate,
        ),
        AppIntent::BeamNameEdited { name } => with_beam_propagate(
            AppCommand::SetBeamAggregateName { name },
            auto_propagate,
        ),
        AppIntent::CommitNodeEditsRequested => vec![AppCommand::PropagateNodeSelection],
        AppIntent::CommitBeamEditsRequested => vec![AppCommand::PropagateBeamSelection],

        AppIntent::AddNodeRequested { name, position } => {
            vec![AppCommand::AddNode { name, position }]
        }
        AppIntent::AddBeamRequested { start, end } => vec![AppCommand::AddBeam { start, end }],
        AppIntent::DeleteSelectedRequested => {
            // Beams vor Nodes
            let mut commands = Vec::with_capacity(2);
            if !state.project.beam_selection().is_empty() {
                commands.push(AppCommand::DeleteSelectedBeams);
            }
            if !state.project.node_selection().is_empty() {
                commands.push(AppCommand::DeleteSelectedNodes);
            }
            commands
        }
        AppIntent::BeginMoveSelectedNodesRequested => vec![AppCommand::BeginMoveSelectedNodes],
        AppIntent::MoveSelectedNodesRequested { delta } => {
            vec![AppCommand::MoveSelectedNodes { delta }]
        }
        AppIntent::EndMoveSelectedNodesRequested => vec![AppCommand::EndMoveSelectedNodes],

        AppIntent::AddNodePresetRequested { preset } => vec![AppCommand::AddNodePreset { preset }],
        AppIntent::RemoveNodePresetRequested { preset_id, detach } => {
            vec![AppCommand::RemoveNodePreset { preset_id, detach }]
        }
        AppIntent::AddBeamPresetRequested { preset } => vec![AppCommand::AddBeamPreset { preset }],
        AppIntent::RemoveBeamPresetRequested { preset_id, detach } => {
            vec![AppCommand::RemoveBeamPreset { preset_id, detach }]
        }

        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
    }
}

fn with_node_propagate(edit: AppCommand, auto_propagate: bool) -> Vec<AppCommand> {
    if auto_propagate {
        vec![edit, AppCommand::PropagateNodeSelection]
    } else {
        vec![edit]
    }
}

fn with_beam_propagate(edit: AppCommand, auto_propagate: bool) -> Vec<AppCommand> {
    if auto_propagate {
        vec![edit, AppCommand::PropagateBeamSelection]
    } else {
        vec![edit]
    }
}
