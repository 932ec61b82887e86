//! Softbody-Node: Massepunkt mit Position, Gewicht und Optionen.

use super::attribute::{bounded_name, warn_kind_mismatch};
use super::{AttributeKey, AttributeValue, Editable, NodeId, NodePresetId, OptionFlag, OptionSet};
use glam::Vec3;

/// Boolesche Node-Optionen (Truckfile-Optionszeichen in Klammern)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeOption {
    /// Maus kann den Node nicht greifen (`m`)
    NoMouseGrab,
    /// Keine Funken bei Bodenkontakt (`f`)
    NoSparks,
    /// Abgasquelle (`x`)
    ExhaustSource,
    /// Abgasrichtung (`y`)
    ExhaustDirection,
    /// Kein Bodenkontakt (`c`)
    NoGroundContact,
    /// Hakenpunkt (`h`)
    HookPoint,
    /// Terrain-Edit-Punkt (`e`)
    TerrainEditPoint,
    /// Auftrieb im Wasser (`b`)
    Buoyant,
    /// Keine Partikel (`p`)
    NoParticles,
    /// Eigenes Ladegewicht statt globaler Verteilung (`l`)
    LoadWeightOverride,
}

impl NodeOption {
    /// Optionszeichen im Truckfile
    pub fn code(self) -> char {
        match self {
            NodeOption::NoMouseGrab => 'm',
            NodeOption::NoSparks => 'f',
            NodeOption::ExhaustSource => 'x',
            NodeOption::ExhaustDirection => 'y',
            NodeOption::NoGroundContact => 'c',
            NodeOption::HookPoint => 'h',
            NodeOption::TerrainEditPoint => 'e',
            NodeOption::Buoyant => 'b',
            NodeOption::NoParticles => 'p',
            NodeOption::LoadWeightOverride => 'l',
        }
    }

    /// Sucht die Option zu einem Truckfile-Zeichen
    pub fn from_code(code: char) -> Option<NodeOption> {
        Self::ALL.iter().copied().find(|o| o.code() == code)
    }
}

impl OptionFlag for NodeOption {
    const ALL: &'static [Self] = &[
        NodeOption::NoMouseGrab,
        NodeOption::NoSparks,
        NodeOption::ExhaustSource,
        NodeOption::ExhaustDirection,
        NodeOption::NoGroundContact,
        NodeOption::HookPoint,
        NodeOption::TerrainEditPoint,
        NodeOption::Buoyant,
        NodeOption::NoParticles,
        NodeOption::LoadWeightOverride,
    ];

    fn bit(self) -> u32 {
        self as u32
    }

    fn label(self) -> &'static str {
        match self {
            NodeOption::NoMouseGrab => "No mouse grab",
            NodeOption::NoSparks => "No sparks",
            NodeOption::ExhaustSource => "Exhaust source",
            NodeOption::ExhaustDirection => "Exhaust direction",
            NodeOption::NoGroundContact => "No ground contact",
            NodeOption::HookPoint => "Hook point",
            NodeOption::TerrainEditPoint => "Terrain edit point",
            NodeOption::Buoyant => "Buoyant",
            NodeOption::NoParticles => "No particles",
            NodeOption::LoadWeightOverride => "Load weight override",
        }
    }
}

/// Skalare, im Properties-Panel editierbare Node-Attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeAttribute {
    /// Ladegewicht in kg
    LoadWeight,
    /// Detacher-Gruppe (0 = keine)
    DetacherGroup,
    /// Zugewiesenes Node-Preset
    Preset,
}

impl AttributeKey for NodeAttribute {
    const ALL: &'static [Self] = &[
        NodeAttribute::LoadWeight,
        NodeAttribute::DetacherGroup,
        NodeAttribute::Preset,
    ];

    fn label(self) -> &'static str {
        match self {
            NodeAttribute::LoadWeight => "Load weight",
            NodeAttribute::DetacherGroup => "Detacher group",
            NodeAttribute::Preset => "Preset",
        }
    }

    fn default_value(self) -> AttributeValue {
        match self {
            NodeAttribute::LoadWeight => AttributeValue::Float(0.0),
            NodeAttribute::DetacherGroup => AttributeValue::Int(0),
            NodeAttribute::Preset => AttributeValue::NodePreset(None),
        }
    }
}

/// Ein Softbody-Node
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Stabiles Handle im Projekt
    pub id: NodeId,
    name: String,
    /// Position in Fahrzeug-Koordinaten (Meter)
    pub position: Vec3,
    /// Ladegewicht in kg (nur wirksam mit `LoadWeightOverride`)
    pub load_weight: f32,
    /// Detacher-Gruppe (0 = keine)
    pub detacher_group: i32,
    /// Referenziertes Preset (nicht besessen)
    pub preset: Option<NodePresetId>,
    /// Boolesche Optionen
    pub options: OptionSet<NodeOption>,
    /// Transientes Selektions-Flag
    pub selected: bool,
}

impl Node {
    /// Erstellt einen neuen, unselektierten Node ohne Preset
    pub fn new(id: NodeId, name: &str, position: Vec3) -> Self {
        Self {
            id,
            name: bounded_name(name),
            position,
            load_weight: 0.0,
            detacher_group: 0,
            preset: None,
            options: OptionSet::empty(),
            selected: false,
        }
    }

    /// Builder: setzt eine Option
    pub fn with_option(mut self, option: NodeOption) -> Self {
        self.options.set(option, true);
        self
    }

    /// Builder: setzt ein eigenes Ladegewicht inklusive `LoadWeightOverride`
    pub fn with_load_weight(mut self, load_weight: f32) -> Self {
        self.load_weight = load_weight;
        self.options.set(NodeOption::LoadWeightOverride, true);
        self
    }

    /// Optionen als Truckfile-Optionszeichenkette (z.B. `"hl"`)
    pub fn option_codes(&self) -> String {
        self.options.enabled().map(NodeOption::code).collect()
    }
}

impl Editable for Node {
    type Attribute = NodeAttribute;
    type Flag = NodeOption;

    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: &str) {
        self.name = bounded_name(name);
    }

    fn is_selected(&self) -> bool {
        self.selected
    }

    fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    fn attribute(&self, key: NodeAttribute) -> AttributeValue {
        match key {
            NodeAttribute::LoadWeight => AttributeValue::Float(self.load_weight),
            NodeAttribute::DetacherGroup => AttributeValue::Int(self.detacher_group),
            NodeAttribute::Preset => AttributeValue::NodePreset(self.preset),
        }
    }

    fn set_attribute(&mut self, key: NodeAttribute, value: AttributeValue) {
        match (key, value) {
            (NodeAttribute::LoadWeight, AttributeValue::Float(v)) => self.load_weight = v,
            (NodeAttribute::DetacherGroup, AttributeValue::Int(v)) => self.detacher_group = v,
            (NodeAttribute::Preset, AttributeValue::NodePreset(v)) => self.preset = v,
            (key, value) => warn_kind_mismatch(key, value),
        }
    }

    fn options(&self) -> OptionSet<NodeOption> {
        self.options
    }

    fn options_mut(&mut self) -> &mut OptionSet<NodeOption> {
        &mut self.options
    }
}
