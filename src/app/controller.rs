//! Application Controller für zentrale Event-Verarbeitung.

use super::properties_view;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::PropertiesView;

/// Orchestriert UI-Events und Handler auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    ///
    /// Alle Commands eines Intents teilen sich einen Undo-Schritt.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        state.history.begin_intent();
        let result = commands
            .into_iter()
            .try_for_each(|command| self.handle_command(state, command));
        state.history.end_intent();
        result
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Selektion ===
            AppCommand::SelectNode { node_id, additive } => {
                handlers::selection::select_node(state, node_id, additive)?
            }
            AppCommand::ToggleNode { node_id } => handlers::selection::toggle_node(state, node_id)?,
            AppCommand::SelectAllNodes => handlers::selection::select_all_nodes(state)?,
            AppCommand::InvertNodeSelection => handlers::selection::invert_nodes(state)?,
            AppCommand::ClearNodeSelection => handlers::selection::clear_nodes(state)?,
            AppCommand::SelectBeam { beam_id, additive } => {
                handlers::selection::select_beam(state, beam_id, additive)?
            }
            AppCommand::ToggleBeam { beam_id } => handlers::selection::toggle_beam(state, beam_id)?,
            AppCommand::SelectAllBeams => handlers::selection::select_all_beams(state)?,
            AppCommand::InvertBeamSelection => handlers::selection::invert_beams(state)?,
            AppCommand::ClearBeamSelection => handlers::selection::clear_beams(state)?,

            // === Properties-Panel ===
            AppCommand::SetNodeAggregateAttribute { attribute, value } => {
                handlers::editing::set_node_attribute(state, attribute, value)?
            }
            AppCommand::SetNodeAggregateOption { option, value } => {
                handlers::editing::set_node_option(state, option, value)
            }
            AppCommand::SetNodeAggregateName { name } => {
                handlers::editing::set_node_name(state, &name)
            }
            AppCommand::PropagateNodeSelection => handlers::editing::propagate_nodes(state),
            AppCommand::SetBeamAggregateAttribute { attribute, value } => {
                handlers::editing::set_beam_attribute(state, attribute, value)?
            }
            AppCommand::SetBeamAggregateOption { option, value } => {
                handlers::editing::set_beam_option(state, option, value)
            }
            AppCommand::SetBeamAggregateName { name } => {
                handlers::editing::set_beam_name(state, &name)
            }
            AppCommand::PropagateBeamSelection => handlers::editing::propagate_beams(state),

            // === Struktur ===
            AppCommand::AddNode { name, position } => {
                handlers::editing::add_node(state, &name, position)
            }
            AppCommand::AddBeam { start, end } => handlers::editing::add_beam(state, start, end)?,
            AppCommand::DeleteSelectedNodes => handlers::editing::delete_selected_nodes(state),
            AppCommand::DeleteSelectedBeams => handlers::editing::delete_selected_beams(state),
            AppCommand::BeginMoveSelectedNodes => handlers::editing::begin_move(state),
            AppCommand::MoveSelectedNodes { delta } => {
                handlers::editing::move_selected(state, delta)
            }
            AppCommand::EndMoveSelectedNodes => handlers::editing::end_move(state),

            // === Presets ===
            AppCommand::AddNodePreset { preset } => handlers::presets::add_node_preset(state, preset),
            AppCommand::RemoveNodePreset { preset_id, detach } => {
                handlers::presets::remove_node_preset(state, preset_id, detach)?
            }
            AppCommand::AddBeamPreset { preset } => handlers::presets::add_beam_preset(state, preset),
            AppCommand::RemoveBeamPreset { preset_id, detach } => {
                handlers::presets::remove_beam_preset(state, preset_id, detach)?
            }

            // === History ===
            AppCommand::Undo => {
                handlers::history::undo(state);
            }
            AppCommand::Redo => {
                handlers::history::redo(state);
            }

            // === Optionen ===
            AppCommand::ApplyOptions { options } => {
                handlers::options::apply_options(state, options)?
            }
            AppCommand::ResetOptions => handlers::options::reset_options(state)?,
        }

        Ok(())
    }

    /// Baut die Properties-Panel-Sicht aus dem aktuellen AppState.
    pub fn build_properties_view(&self, state: &AppState) -> PropertiesView {
        properties_view::build(state)
    }
}
