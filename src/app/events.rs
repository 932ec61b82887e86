//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.

use crate::core::{
    AttributeValue, BeamAttribute, BeamId, BeamOption, BeamPreset, BeamPresetId, NodeAttribute,
    NodeId, NodeOption, NodePreset, NodePresetId,
};
use crate::shared::EditorOptions;
use glam::Vec3;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Node angeklickt (ersetzt oder erweitert die Selektion)
    NodeClicked { node_id: NodeId, additive: bool },
    /// Node in der Selektion umschalten (Ctrl + Klick)
    NodeToggleRequested { node_id: NodeId },
    /// Beam angeklickt
    BeamClicked { beam_id: BeamId, additive: bool },
    /// Beam in der Selektion umschalten
    BeamToggleRequested { beam_id: BeamId },
    /// Alle Nodes selektieren
    SelectAllNodesRequested,
    /// Node-Selektion invertieren
    InvertNodeSelectionRequested,
    /// Alle Beams selektieren
    SelectAllBeamsRequested,
    /// Beam-Selektion invertieren
    InvertBeamSelectionRequested,
    /// Node- und Beam-Selektion aufheben
    ClearSelectionRequested,

    /// Skalares Feld im Node-Panel geändert
    NodeAttributeEdited {
        attribute: NodeAttribute,
        value: AttributeValue,
    },
    /// Checkbox im Node-Panel geändert
    NodeOptionEdited { option: NodeOption, value: bool },
    /// Namensfeld im Node-Panel geändert
    NodeNameEdited { name: String },
    /// Skalares Feld im Beam-Panel geändert
    BeamAttributeEdited {
        attribute: BeamAttribute,
        value: AttributeValue,
    },
    /// Checkbox im Beam-Panel geändert
    BeamOptionEdited { option: BeamOption, value: bool },
    /// Namensfeld im Beam-Panel geändert
    BeamNameEdited { name: String },
    /// "Übernehmen" im Node-Panel
    CommitNodeEditsRequested,
    /// "Übernehmen" im Beam-Panel
    CommitBeamEditsRequested,

    /// Neuen Node anlegen
    AddNodeRequested { name: String, position: Vec3 },
    /// Beam zwischen zwei Nodes anlegen
    AddBeamRequested { start: NodeId, end: NodeId },
    /// Selektierte Beams und Nodes löschen
    DeleteSelectedRequested,
    /// Move-Lifecycle Start
    BeginMoveSelectedNodesRequested,
    /// Move-Lifecycle Update: selektierte Nodes um Delta verschieben
    MoveSelectedNodesRequested { delta: Vec3 },
    /// Move-Lifecycle Ende
    EndMoveSelectedNodesRequested,

    /// Node-Preset anlegen
    AddNodePresetRequested { preset: NodePreset },
    /// Node-Preset entfernen (optional vorher alle Referenzen lösen)
    RemoveNodePresetRequested { preset_id: NodePresetId, detach: bool },
    /// Beam-Preset anlegen
    AddBeamPresetRequested { preset: BeamPreset },
    /// Beam-Preset entfernen
    RemoveBeamPresetRequested { preset_id: BeamPresetId, detach: bool },

    /// Undo: Letzte Aktion rückgängig machen
    UndoRequested,
    /// Redo: Rückgängig gemachte Aktion wiederherstellen
    RedoRequested,
    /// Optionen wurden geändert (sofortige Anwendung)
    OptionsChanged { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
}

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Node selektieren
    SelectNode { node_id: NodeId, additive: bool },
    /// Node-Selektion umschalten
    ToggleNode { node_id: NodeId },
    /// Alle Nodes selektieren
    SelectAllNodes,
    /// Node-Selektion invertieren
    InvertNodeSelection,
    /// Node-Selektion aufheben
    ClearNodeSelection,
    /// Beam selektieren
    SelectBeam { beam_id: BeamId, additive: bool },
    /// Beam-Selektion umschalten
    ToggleBeam { beam_id: BeamId },
    /// Alle Beams selektieren
    SelectAllBeams,
    /// Beam-Selektion invertieren
    InvertBeamSelection,
    /// Beam-Selektion aufheben
    ClearBeamSelection,

    /// Wert im Node-Aggregat setzen (noch nicht zurückgeschrieben)
    SetNodeAggregateAttribute {
        attribute: NodeAttribute,
        value: AttributeValue,
    },
    /// Option im Node-Aggregat setzen
    SetNodeAggregateOption { option: NodeOption, value: bool },
    /// Namen im Node-Aggregat setzen
    SetNodeAggregateName { name: String },
    /// Node-Aggregat auf alle selektierten Nodes zurückschreiben
    PropagateNodeSelection,
    /// Wert im Beam-Aggregat setzen
    SetBeamAggregateAttribute {
        attribute: BeamAttribute,
        value: AttributeValue,
    },
    /// Option im Beam-Aggregat setzen
    SetBeamAggregateOption { option: BeamOption, value: bool },
    /// Namen im Beam-Aggregat setzen
    SetBeamAggregateName { name: String },
    /// Beam-Aggregat auf alle selektierten Beams zurückschreiben
    PropagateBeamSelection,

    /// Node anlegen
    AddNode { name: String, position: Vec3 },
    /// Beam anlegen
    AddBeam { start: NodeId, end: NodeId },
    /// Selektierte Nodes löschen (inkl. angehängter Beams)
    DeleteSelectedNodes,
    /// Selektierte Beams löschen
    DeleteSelectedBeams,
    /// Move-Lifecycle: Verschieben starten (Undo-Snapshot)
    BeginMoveSelectedNodes,
    /// Selektierte Nodes um Delta verschieben
    MoveSelectedNodes { delta: Vec3 },
    /// Move-Lifecycle: Verschieben beenden
    EndMoveSelectedNodes,

    /// Node-Preset anlegen
    AddNodePreset { preset: NodePreset },
    /// Node-Preset entfernen
    RemoveNodePreset { preset_id: NodePresetId, detach: bool },
    /// Beam-Preset anlegen
    AddBeamPreset { preset: BeamPreset },
    /// Beam-Preset entfernen
    RemoveBeamPreset { preset_id: BeamPresetId, detach: bool },

    /// Undo: Letzte Aktion rückgängig machen
    Undo,
    /// Redo: Rückgängig gemachte Aktion wiederherstellen
    Redo,
    /// Optionen anwenden und speichern
    ApplyOptions { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
}
