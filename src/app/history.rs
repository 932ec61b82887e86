//! Undo/Redo über Projekt-Snapshots, gruppiert pro Intent.
//!
//! Ein Intent kann mehrere Commands auslösen (z.B. Nodes und Beams
//! abwählen). Der Controller öffnet dafür eine Gruppe: nur der erste
//! Snapshot innerhalb der Gruppe landet auf dem Undo-Stack, ein Undo
//! nimmt damit den ganzen Intent zurück.

use crate::core::Project;
use std::collections::VecDeque;
use std::sync::Arc;

/// Projektstand vor einer Änderung.
///
/// Arc-Klon (O(1)), die Kopie entsteht erst beim nächsten `Arc::make_mut`.
/// Die Selektion steckt in den Entities und wird mitgesichert.
#[derive(Clone)]
pub struct Snapshot {
    pub project: Arc<Project>,
}

impl Snapshot {
    pub fn from_state(state: &crate::app::AppState) -> Self {
        Self {
            project: Arc::clone(&state.project),
        }
    }

    /// Setzt das Projekt zurück und baut beide Aggregate neu auf.
    ///
    /// Nicht übernommene Panel-Edits aus dem Snapshot gehen dabei verloren.
    pub fn apply_to(self, state: &mut crate::app::AppState) {
        state.project = self.project;
        let project = state.project_mut();
        project.refresh_node_selection();
        project.refresh_beam_selection();
    }
}

/// Zustand der Intent-Gruppierung
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum IntentGroup {
    /// Jeder Snapshot ist ein eigener Undo-Schritt
    #[default]
    Closed,
    /// Gruppe offen, noch nichts aufgezeichnet
    Open,
    /// Gruppe hat ihren Undo-Schritt bereits
    Recorded,
}

/// Begrenzter Undo/Redo-Speicher.
#[derive(Default)]
pub struct EditHistory {
    undo: VecDeque<Snapshot>,
    redo: VecDeque<Snapshot>,
    max_depth: usize,
    group: IntentGroup,
}

/// Legt `snap` oben ab und verwirft bei voller Tiefe den ältesten Eintrag.
fn push_bounded(stack: &mut VecDeque<Snapshot>, snap: Snapshot, max_depth: usize) {
    while !stack.is_empty() && stack.len() >= max_depth {
        stack.pop_front();
    }
    stack.push_back(snap);
}

impl EditHistory {
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            undo: VecDeque::with_capacity(max_depth),
            redo: VecDeque::with_capacity(max_depth),
            max_depth,
            group: IntentGroup::Closed,
        }
    }

    /// Öffnet eine Intent-Gruppe.
    pub fn begin_intent(&mut self) {
        self.group = IntentGroup::Open;
    }

    /// Schließt die aktuelle Intent-Gruppe.
    pub fn end_intent(&mut self) {
        self.group = IntentGroup::Closed;
    }

    /// Zeichnet den Stand vor einer Änderung auf und leert den Redo-Stack.
    ///
    /// Innerhalb einer Gruppe zählt nur der erste Aufruf, spätere Snapshots
    /// liegen zeitlich danach und würden den Intent nur teilweise zurücknehmen.
    /// Gibt zurück, ob ein neuer Undo-Schritt entstanden ist.
    pub fn record_snapshot(&mut self, snap: Snapshot) -> bool {
        match self.group {
            IntentGroup::Recorded => return false,
            IntentGroup::Open => self.group = IntentGroup::Recorded,
            IntentGroup::Closed => {}
        }
        push_bounded(&mut self.undo, snap, self.max_depth);
        self.redo.clear();
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Anzahl verfügbarer Undo-Schritte
    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    /// Tauscht `current` gegen den letzten Undo-Schritt.
    pub fn step_back(&mut self, current: Snapshot) -> Option<Snapshot> {
        let target = self.undo.pop_back()?;
        push_bounded(&mut self.redo, current, self.max_depth);
        Some(target)
    }

    /// Tauscht `current` gegen den letzten Redo-Schritt.
    pub fn step_forward(&mut self, current: Snapshot) -> Option<Snapshot> {
        let target = self.redo.pop_back()?;
        push_bounded(&mut self.undo, current, self.max_depth);
        Some(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppState;
    use crate::core::{AttributeValue, NodeAttribute};
    use glam::Vec3;

    fn rig_with_nodes(count: usize) -> Snapshot {
        let mut project = Project::new("snap");
        for i in 0..count {
            project.add_node(&format!("n{i}"), Vec3::new(i as f32, 0.0, 0.0));
        }
        Snapshot {
            project: Arc::new(project),
        }
    }

    #[test]
    fn empty_history_cannot_step() {
        let mut history = EditHistory::new_with_capacity(10);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert!(history.step_back(rig_with_nodes(1)).is_none());
        assert!(history.step_forward(rig_with_nodes(1)).is_none());
        assert!(!history.can_redo());
    }

    #[test]
    fn step_back_and_forward_swap_snapshots() {
        let mut history = EditHistory::new_with_capacity(10);
        assert!(history.record_snapshot(rig_with_nodes(2)));

        let back = history.step_back(rig_with_nodes(5)).expect("Undo vorhanden");
        assert_eq!(back.project.node_count(), 2);
        assert!(!history.can_undo());

        let forward = history.step_forward(rig_with_nodes(2)).expect("Redo vorhanden");
        assert_eq!(forward.project.node_count(), 5);
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn new_record_clears_redo() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(rig_with_nodes(1));
        history.step_back(rig_with_nodes(3));
        assert!(history.can_redo());

        history.record_snapshot(rig_with_nodes(7));
        assert!(!history.can_redo());
    }

    #[test]
    fn depth_drops_oldest_steps() {
        let mut history = EditHistory::new_with_capacity(3);
        for i in 1..=5 {
            history.record_snapshot(rig_with_nodes(i));
        }
        assert_eq!(history.undo_len(), 3);

        let mut oldest = 0;
        while let Some(snap) = history.step_back(rig_with_nodes(99)) {
            oldest = snap.project.node_count();
        }
        assert_eq!(oldest, 3);
    }

    #[test]
    fn intent_group_keeps_only_first_snapshot() {
        let mut history = EditHistory::new_with_capacity(10);
        history.begin_intent();
        assert!(history.record_snapshot(rig_with_nodes(1)));
        assert!(!history.record_snapshot(rig_with_nodes(2)));
        history.end_intent();
        assert!(history.record_snapshot(rig_with_nodes(3)));

        assert_eq!(history.undo_len(), 2);
        history.step_back(rig_with_nodes(4));
        let first = history.step_back(rig_with_nodes(3)).expect("Gruppenschritt");
        assert_eq!(first.project.node_count(), 1);
    }

    #[test]
    fn apply_to_discards_uncommitted_panel_edits() {
        let mut state = AppState::new();
        let a = state.project_mut().add_node("a", Vec3::ZERO);
        state.project_mut().select_node(a, false).expect("Node existiert");
        state
            .project_mut()
            .set_node_attribute(NodeAttribute::DetacherGroup, AttributeValue::Int(9))
            .expect("Int passt");

        let snap = Snapshot::from_state(&state);
        let mut target = AppState::new();
        snap.apply_to(&mut target);

        assert_eq!(target.project.node_count(), 1);
        assert_eq!(target.project.node_selection().count(), 1);
        assert_eq!(
            target.project.node_selection().value(NodeAttribute::DetacherGroup),
            AttributeValue::Int(0)
        );
    }
}
