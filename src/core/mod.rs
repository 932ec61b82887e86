//! Core-Domänentypen: Nodes, Beams, Presets und das Projekt als Besitzer.

pub mod attribute;
pub mod beam;
pub mod ids;
pub mod node;
pub mod preset;
pub mod project;

pub use attribute::{
    bounded_name, AttributeKey, AttributeValue, Editable, OptionFlag, OptionSet,
    ENTITY_NAME_MAX_LEN,
};
pub use beam::{Beam, BeamAttribute, BeamKind, BeamOption};
pub use ids::{BeamId, BeamPresetId, NodeId, NodePresetId};
pub use node::{Node, NodeAttribute, NodeOption};
pub use preset::{BeamPreset, NodePreset};
pub use project::Project;
