//! Softbody-Rig-Editor Library.
//!
//! Selektions-Aggregation für Node/Beam-Rigs: mehrere selektierte Entities
//! werden in einem Properties-Panel gemeinsam bearbeitet, Edits werden
//! anschließend auf jede selektierte Entity zurückgeschrieben.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod aggregate;
pub mod app;
pub mod core;
pub mod demo;
pub mod shared;

pub use aggregate::{BeamSelection, NodeSelection, SelectionAggregate};
pub use app::{AppCommand, AppController, AppIntent, AppState};
pub use core::{
    AttributeKey, AttributeValue, Beam, BeamAttribute, BeamId, BeamKind, BeamOption, BeamPreset,
    BeamPresetId, Editable, Node, NodeAttribute, NodeId, NodeOption, NodePreset, NodePresetId,
    OptionFlag, OptionSet, Project,
};
pub use shared::{EditorOptions, EntityPanel, FieldRow, FieldState, OptionRow, PropertiesView};
