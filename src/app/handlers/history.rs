//! Undo/Redo: tauscht das aktuelle Projekt gegen einen gesicherten Stand.

use crate::app::history::Snapshot;
use crate::app::AppState;

#[derive(Debug, Clone, Copy)]
enum Direction {
    Back,
    Forward,
}

impl Direction {
    fn label(self) -> &'static str {
        match self {
            Direction::Back => "Undo",
            Direction::Forward => "Redo",
        }
    }
}

/// Stellt den Stand in `direction` wieder her.
///
/// Beide Aggregate werden dabei aus den Entities neu aufgebaut, offene
/// Panel-Edits gehen verloren. Gibt zurück, ob ein Schritt ausgeführt wurde.
fn restore(state: &mut AppState, direction: Direction) -> bool {
    let current = Snapshot::from_state(state);
    let target = match direction {
        Direction::Back => state.history.step_back(current),
        Direction::Forward => state.history.step_forward(current),
    };
    let Some(target) = target else {
        log::debug!("{}: nichts zu tun", direction.label());
        return false;
    };

    target.apply_to(state);
    log::info!(
        "{}: {} Nodes, {} Beams selektiert ({} Schritte verbleiben)",
        direction.label(),
        state.project.node_selection().count(),
        state.project.beam_selection().count(),
        state.history.undo_len()
    );
    true
}

/// Nimmt den letzten Intent zurück.
pub fn undo(state: &mut AppState) -> bool {
    restore(state, Direction::Back)
}

/// Wiederholt den zuletzt zurückgenommenen Intent.
pub fn redo(state: &mut AppState) -> bool {
    restore(state, Direction::Forward)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn undo_without_history_reports_nothing() {
        let mut state = AppState::new();
        assert!(!undo(&mut state));
        assert!(!redo(&mut state));
    }

    #[test]
    fn undo_restores_selection_and_enables_redo() {
        let mut state = AppState::new();
        let a = state.project_mut().add_node("a", Vec3::ZERO);
        state.record_undo_snapshot();
        state.project_mut().select_node(a, false).expect("Node existiert");

        assert!(undo(&mut state));
        assert!(state.project.node_selection().is_empty());
        assert!(state.can_redo());

        assert!(redo(&mut state));
        assert_eq!(state.project.node_selection().count(), 1);
    }
}
