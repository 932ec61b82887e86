//! Handler für Editor-Optionen.

use crate::app::history::EditHistory;
use crate::app::AppState;
use crate::shared::EditorOptions;

/// Übernimmt neue Optionen und persistiert sie in der Konfigurationsdatei.
pub fn apply_options(state: &mut AppState, options: EditorOptions) -> anyhow::Result<()> {
    set_options(state, options);
    let path = EditorOptions::config_path();
    state.options.save_to_file(&path)
}

/// Setzt Optionen auf Standardwerte zurück und persistiert sie.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    apply_options(state, EditorOptions::default())
}

/// Übernimmt Optionen ohne zu speichern.
///
/// Eine geänderte History-Tiefe verwirft die bestehende History.
pub fn set_options(state: &mut AppState, options: EditorOptions) {
    let options = options.sanitized();
    if options.history_depth != state.options.history_depth {
        log::info!(
            "History-Tiefe {} -> {}, History wird geleert",
            state.options.history_depth,
            options.history_depth
        );
        state.history = EditHistory::new_with_capacity(options.history_depth);
    }
    state.options = options;
}
