//! Softbody-Beam: Feder-Dämpfer-Verbindung zwischen zwei Nodes.
//!
//! Ein Beam trägt immer den vollständigen Parametersatz aller Beam-Arten,
//! `kind` entscheidet, welche Teilmenge im Export wirksam ist.

use super::attribute::{bounded_name, warn_kind_mismatch};
use super::{
    AttributeKey, AttributeValue, BeamId, BeamPresetId, Editable, NodeId, OptionFlag, OptionSet,
};

/// Art des Beams (bestimmt Sektion im Truckfile)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BeamKind {
    /// Einfacher Beam (`beams`)
    #[default]
    Plain,
    /// Lenkungs-Hydraulik (`hydros`)
    Hydro,
    /// Tastengesteuerter Zylinder (`commands2`)
    Command,
    /// Stoßdämpfer (`shocks`)
    Shock,
    /// Progressiver Stoßdämpfer (`shocks2`)
    Shock2,
    /// Schalter-Beam (`triggers`)
    Trigger,
}

impl BeamKind {
    pub const ALL: &'static [BeamKind] = &[
        BeamKind::Plain,
        BeamKind::Hydro,
        BeamKind::Command,
        BeamKind::Shock,
        BeamKind::Shock2,
        BeamKind::Trigger,
    ];
}

/// Boolesche Beam-Optionen, gruppiert nach Beam-Art
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BeamOption {
    // ── Plain ───────────────────────────────────────────────────
    Invisible,
    Rope,
    Support,
    // ── Hydro ───────────────────────────────────────────────────
    HydroDisableAtHighSpeed,
    HydroAileron,
    HydroRudder,
    HydroElevator,
    HydroReverseAileronElevator,
    // ── Command ─────────────────────────────────────────────────
    CommandAutoCenter,
    CommandNotFaster,
    CommandPressOnce,
    CommandPressOnceCenter,
    // ── Shock ───────────────────────────────────────────────────
    ShockLeftOnly,
    ShockRightOnly,
    ShockMetric,
    // ── Shock2 ──────────────────────────────────────────────────
    Shock2SoftBump,
    Shock2Metric,
    Shock2AbsoluteMetric,
    // ── Trigger ─────────────────────────────────────────────────
    TriggerStartOff,
    TriggerHookToggle,
    TriggerContinuous,
}

impl BeamOption {
    /// Beam-Art, zu deren Sektion die Option gehört
    pub fn kind(self) -> BeamKind {
        use BeamOption::*;
        match self {
            Invisible | Rope | Support => BeamKind::Plain,
            HydroDisableAtHighSpeed | HydroAileron | HydroRudder | HydroElevator
            | HydroReverseAileronElevator => BeamKind::Hydro,
            CommandAutoCenter | CommandNotFaster | CommandPressOnce | CommandPressOnceCenter => {
                BeamKind::Command
            }
            ShockLeftOnly | ShockRightOnly | ShockMetric => BeamKind::Shock,
            Shock2SoftBump | Shock2Metric | Shock2AbsoluteMetric => BeamKind::Shock2,
            TriggerStartOff | TriggerHookToggle | TriggerContinuous => BeamKind::Trigger,
        }
    }

    /// Alle Optionen einer Beam-Art
    pub fn of_kind(kind: BeamKind) -> impl Iterator<Item = BeamOption> {
        Self::ALL.iter().copied().filter(move |o| o.kind() == kind)
    }
}

impl OptionFlag for BeamOption {
    const ALL: &'static [Self] = &[
        BeamOption::Invisible,
        BeamOption::Rope,
        BeamOption::Support,
        BeamOption::HydroDisableAtHighSpeed,
        BeamOption::HydroAileron,
        BeamOption::HydroRudder,
        BeamOption::HydroElevator,
        BeamOption::HydroReverseAileronElevator,
        BeamOption::CommandAutoCenter,
        BeamOption::CommandNotFaster,
        BeamOption::CommandPressOnce,
        BeamOption::CommandPressOnceCenter,
        BeamOption::ShockLeftOnly,
        BeamOption::ShockRightOnly,
        BeamOption::ShockMetric,
        BeamOption::Shock2SoftBump,
        BeamOption::Shock2Metric,
        BeamOption::Shock2AbsoluteMetric,
        BeamOption::TriggerStartOff,
        BeamOption::TriggerHookToggle,
        BeamOption::TriggerContinuous,
    ];

    fn bit(self) -> u32 {
        self as u32
    }

    fn label(self) -> &'static str {
        use BeamOption::*;
        match self {
            Invisible => "Invisible",
            Rope => "Rope",
            Support => "Support",
            HydroDisableAtHighSpeed => "Disable at high speed",
            HydroAileron => "Aileron",
            HydroRudder => "Rudder",
            HydroElevator => "Elevator",
            HydroReverseAileronElevator => "Reverse aileron/elevator",
            CommandAutoCenter => "Auto center",
            CommandNotFaster => "Not faster",
            CommandPressOnce => "Press once",
            CommandPressOnceCenter => "Press once (center)",
            ShockLeftOnly => "Left only",
            ShockRightOnly => "Right only",
            ShockMetric => "Metric",
            Shock2SoftBump => "Soft bump",
            Shock2Metric => "Metric",
            Shock2AbsoluteMetric => "Absolute metric",
            TriggerStartOff => "Start off",
            TriggerHookToggle => "Hook toggle",
            TriggerContinuous => "Continuous",
        }
    }
}

/// Skalare, im Properties-Panel editierbare Beam-Attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BeamAttribute {
    Kind,
    DetacherGroup,
    ExtensionBreakLimit,
    Preset,
    HydroExtensionFactor,
    CommandShortenRate,
    CommandLengthenRate,
    CommandMaxContraction,
    CommandMaxExtension,
    ShockSpringRate,
    ShockDamping,
    ShockPrecompression,
    TriggerContractionLimit,
    TriggerExtensionLimit,
}

impl AttributeKey for BeamAttribute {
    const ALL: &'static [Self] = &[
        BeamAttribute::Kind,
        BeamAttribute::DetacherGroup,
        BeamAttribute::ExtensionBreakLimit,
        BeamAttribute::Preset,
        BeamAttribute::HydroExtensionFactor,
        BeamAttribute::CommandShortenRate,
        BeamAttribute::CommandLengthenRate,
        BeamAttribute::CommandMaxContraction,
        BeamAttribute::CommandMaxExtension,
        BeamAttribute::ShockSpringRate,
        BeamAttribute::ShockDamping,
        BeamAttribute::ShockPrecompression,
        BeamAttribute::TriggerContractionLimit,
        BeamAttribute::TriggerExtensionLimit,
    ];

    fn label(self) -> &'static str {
        use BeamAttribute::*;
        match self {
            Kind => "Type",
            DetacherGroup => "Detacher group",
            ExtensionBreakLimit => "Extension break limit",
            Preset => "Preset",
            HydroExtensionFactor => "Extension factor",
            CommandShortenRate => "Shorten rate",
            CommandLengthenRate => "Lengthen rate",
            CommandMaxContraction => "Max. contraction",
            CommandMaxExtension => "Max. extension",
            ShockSpringRate => "Spring rate",
            ShockDamping => "Damping",
            ShockPrecompression => "Precompression",
            TriggerContractionLimit => "Contraction limit",
            TriggerExtensionLimit => "Extension limit",
        }
    }

    fn default_value(self) -> AttributeValue {
        use BeamAttribute::*;
        match self {
            Kind => AttributeValue::BeamKind(BeamKind::Plain),
            DetacherGroup => AttributeValue::Int(0),
            Preset => AttributeValue::BeamPreset(None),
            ExtensionBreakLimit
            | HydroExtensionFactor
            | CommandShortenRate
            | CommandLengthenRate
            | CommandMaxContraction
            | CommandMaxExtension
            | ShockSpringRate
            | ShockDamping
            | ShockPrecompression
            | TriggerContractionLimit
            | TriggerExtensionLimit => AttributeValue::Float(0.0),
        }
    }
}

/// Ein Softbody-Beam zwischen zwei Nodes
#[derive(Debug, Clone, PartialEq)]
pub struct Beam {
    /// Stabiles Handle im Projekt
    pub id: BeamId,
    name: String,
    /// Erster Node
    pub start: NodeId,
    /// Zweiter Node
    pub end: NodeId,
    /// Beam-Art
    pub kind: BeamKind,
    /// Detacher-Gruppe (0 = keine)
    pub detacher_group: i32,
    /// Relative Verlängerung, ab der der Beam reißt (0 = unbegrenzt)
    pub extension_break_limit: f32,
    /// Referenziertes Preset (nicht besessen)
    pub preset: Option<BeamPresetId>,
    pub hydro_extension_factor: f32,
    pub command_shorten_rate: f32,
    pub command_lengthen_rate: f32,
    pub command_max_contraction: f32,
    pub command_max_extension: f32,
    pub shock_spring_rate: f32,
    pub shock_damping: f32,
    pub shock_precompression: f32,
    pub trigger_contraction_limit: f32,
    pub trigger_extension_limit: f32,
    /// Boolesche Optionen aller Beam-Arten
    pub options: OptionSet<BeamOption>,
    /// Transientes Selektions-Flag
    pub selected: bool,
}

impl Beam {
    /// Erstellt einen neuen, unselektierten Plain-Beam
    pub fn new(id: BeamId, start: NodeId, end: NodeId) -> Self {
        Self {
            id,
            name: String::new(),
            start,
            end,
            kind: BeamKind::Plain,
            detacher_group: 0,
            extension_break_limit: 0.0,
            preset: None,
            hydro_extension_factor: 0.0,
            command_shorten_rate: 0.0,
            command_lengthen_rate: 0.0,
            command_max_contraction: 0.0,
            command_max_extension: 0.0,
            shock_spring_rate: 0.0,
            shock_damping: 0.0,
            shock_precompression: 0.0,
            trigger_contraction_limit: 0.0,
            trigger_extension_limit: 0.0,
            options: OptionSet::empty(),
            selected: false,
        }
    }

    /// Builder: setzt die Beam-Art
    pub fn with_kind(mut self, kind: BeamKind) -> Self {
        self.kind = kind;
        self
    }

    /// Builder: setzt eine Option
    pub fn with_option(mut self, option: BeamOption) -> Self {
        self.options.set(option, true);
        self
    }

    /// Prüft ob der Beam an `node` hängt
    pub fn touches(&self, node: NodeId) -> bool {
        self.start == node || self.end == node
    }
}

impl Editable for Beam {
    type Attribute = BeamAttribute;
    type Flag = BeamOption;

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

    fn attribute(&self, key: BeamAttribute) -> AttributeValue {
        use AttributeValue::Float;
        match key {
            BeamAttribute::Kind => AttributeValue::BeamKind(self.kind),
            BeamAttribute::DetacherGroup => AttributeValue::Int(self.detacher_group),
            BeamAttribute::ExtensionBreakLimit => Float(self.extension_break_limit),
            BeamAttribute::Preset => AttributeValue::BeamPreset(self.preset),
            BeamAttribute::HydroExtensionFactor => Float(self.hydro_extension_factor),
            BeamAttribute::CommandShortenRate => Float(self.command_shorten_rate),
            BeamAttribute::CommandLengthenRate => Float(self.command_lengthen_rate),
            BeamAttribute::CommandMaxContraction => Float(self.command_max_contraction),
            BeamAttribute::CommandMaxExtension => Float(self.command_max_extension),
            BeamAttribute::ShockSpringRate => Float(self.shock_spring_rate),
            BeamAttribute::ShockDamping => Float(self.shock_damping),
            BeamAttribute::ShockPrecompression => Float(self.shock_precompression),
            BeamAttribute::TriggerContractionLimit => Float(self.trigger_contraction_limit),
            BeamAttribute::TriggerExtensionLimit => Float(self.trigger_extension_limit),
        }
    }

    fn set_attribute(&mut self, key: BeamAttribute, value: AttributeValue) {
        use AttributeValue::Float;
        match (key, value) {
            (BeamAttribute::Kind, AttributeValue::BeamKind(v)) => self.kind = v,
            (BeamAttribute::DetacherGroup, AttributeValue::Int(v)) => self.detacher_group = v,
            (BeamAttribute::ExtensionBreakLimit, Float(v)) => self.extension_break_limit = v,
            (BeamAttribute::Preset, AttributeValue::BeamPreset(v)) => self.preset = v,
            (BeamAttribute::HydroExtensionFactor, Float(v)) => self.hydro_extension_factor = v,
            (BeamAttribute::CommandShortenRate, Float(v)) => self.command_shorten_rate = v,
            (BeamAttribute::CommandLengthenRate, Float(v)) => self.command_lengthen_rate = v,
            (BeamAttribute::CommandMaxContraction, Float(v)) => self.command_max_contraction = v,
            (BeamAttribute::CommandMaxExtension, Float(v)) => self.command_max_extension = v,
            (BeamAttribute::ShockSpringRate, Float(v)) => self.shock_spring_rate = v,
            (BeamAttribute::ShockDamping, Float(v)) => self.shock_damping = v,
            (BeamAttribute::ShockPrecompression, Float(v)) => self.shock_precompression = v,
            (BeamAttribute::TriggerContractionLimit, Float(v)) => {
                self.trigger_contraction_limit = v
            }
            (BeamAttribute::TriggerExtensionLimit, Float(v)) => self.trigger_extension_limit = v,
            (key, value) => warn_kind_mismatch(key, value),
        }
    }

    fn options(&self) -> OptionSet<BeamOption> {
        self.options
    }

    fn options_mut(&mut self) -> &mut OptionSet<BeamOption> {
        &mut self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn beam_option_table_has_21_flags_in_six_categories() {
        assert_eq!(BeamOption::ALL.len(), 21);
        let bits: std::collections::HashSet<u32> =
            BeamOption::ALL.iter().map(|o| o.bit()).collect();
        assert_eq!(bits.len(), 21);

        let per_kind: Vec<usize> = BeamKind::ALL
            .iter()
            .map(|&k| BeamOption::of_kind(k).count())
            .collect();
        assert_eq!(per_kind, vec![3, 5, 4, 3, 3, 3]);
    }

    #[test]
    fn every_attribute_roundtrips_through_setter() {
        let mut beam = Beam::new(BeamId(0), NodeId(0), NodeId(1));
        for (i, &key) in BeamAttribute::ALL.iter().enumerate() {
            let value = match key.default_value() {
                AttributeValue::Float(_) => AttributeValue::Float(i as f32 + 0.5),
                AttributeValue::Int(_) => AttributeValue::Int(i as i32),
                AttributeValue::BeamPreset(_) => {
                    AttributeValue::BeamPreset(Some(BeamPresetId(i as u32)))
                }
                AttributeValue::BeamKind(_) => AttributeValue::BeamKind(BeamKind::Shock2),
                other => other,
            };
            beam.set_attribute(key, value);
            assert_eq!(beam.attribute(key), value, "Attribut {key:?}");
        }
    }

    #[test]
    fn touches_checks_both_ends() {
        let beam = Beam::new(BeamId(0), NodeId(4), NodeId(9));
        assert!(beam.touches(NodeId(4)));
        assert!(beam.touches(NodeId(9)));
        assert!(!beam.touches(NodeId(5)));
    }
}
