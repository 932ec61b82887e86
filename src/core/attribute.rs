//! Statische Attribut-Tabellen für editierbare Entities.
//!
//! Jede Entity-Art (Node, Beam) beschreibt ihre editierbaren Werte über zwei
//! Aufzählungen:
//! - `AttributeKey`: skalare Attribute (Float, Int, Preset-Referenz, Typ-Tag)
//! - `OptionFlag`: boolesche Optionen, gebündelt in einem `OptionSet`
//!
//! Merge, Push und SetAll iterieren ausschließlich über `ALL` dieser Tabellen.
//! Getter und Setter sind erschöpfende `match`es, neue Schlüssel ohne
//! Behandlung in beiden Richtungen kompilieren nicht.

use super::{BeamKind, BeamPresetId, NodePresetId};
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

/// Maximale Länge eines Entity-Namens in Zeichen.
pub const ENTITY_NAME_MAX_LEN: usize = 100;

/// Kürzt einen Namen auf `ENTITY_NAME_MAX_LEN` Zeichen (char-sicher).
pub fn bounded_name(name: &str) -> String {
    name.chars().take(ENTITY_NAME_MAX_LEN).collect()
}

/// Skalarer Wert eines Entity-Attributs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttributeValue {
    /// Gleitkommawert (exakter Vergleich, kein Epsilon)
    Float(f32),
    /// Ganzzahl
    Int(i32),
    /// Referenz auf ein Node-Preset
    NodePreset(Option<NodePresetId>),
    /// Referenz auf ein Beam-Preset
    BeamPreset(Option<BeamPresetId>),
    /// Beam-Typ-Tag
    BeamKind(BeamKind),
}

impl AttributeValue {
    /// Prüft ob beide Werte dieselbe Variante haben (Inhalt egal).
    pub fn same_kind(&self, other: &AttributeValue) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    pub fn as_float(&self) -> Option<f32> {
        match *self {
            AttributeValue::Float(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match *self {
            AttributeValue::Int(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_node_preset(&self) -> Option<Option<NodePresetId>> {
        match *self {
            AttributeValue::NodePreset(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_beam_preset(&self) -> Option<Option<BeamPresetId>> {
        match *self {
            AttributeValue::BeamPreset(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_beam_kind(&self) -> Option<BeamKind> {
        match *self {
            AttributeValue::BeamKind(v) => Some(v),
            _ => None,
        }
    }

    /// Kurzer Name der Variante für Logs und Fehlermeldungen.
    pub fn kind_name(&self) -> &'static str {
        match self {
            AttributeValue::Float(_) => "Float",
            AttributeValue::Int(_) => "Int",
            AttributeValue::NodePreset(_) => "NodePreset",
            AttributeValue::BeamPreset(_) => "BeamPreset",
            AttributeValue::BeamKind(_) => "BeamKind",
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Float(v) => write!(f, "{v}"),
            AttributeValue::Int(v) => write!(f, "{v}"),
            AttributeValue::NodePreset(Some(id)) => write!(f, "{id}"),
            AttributeValue::BeamPreset(Some(id)) => write!(f, "{id}"),
            AttributeValue::NodePreset(None) | AttributeValue::BeamPreset(None) => {
                write!(f, "-")
            }
            AttributeValue::BeamKind(kind) => write!(f, "{kind:?}"),
        }
    }
}

/// Schlüssel eines skalaren Attributs einer Entity-Art.
pub trait AttributeKey: Copy + Eq + Hash + fmt::Debug + 'static {
    /// Alle Attribute in Anzeige-Reihenfolge
    const ALL: &'static [Self];

    /// Anzeigename im Properties-Panel
    fn label(self) -> &'static str;

    /// Wert nach `reset()` (legt zugleich die erlaubte Variante fest)
    fn default_value(self) -> AttributeValue;
}

/// Boolesche Option einer Entity-Art.
pub trait OptionFlag: Copy + Eq + Hash + fmt::Debug + 'static {
    /// Alle Optionen in Anzeige-Reihenfolge (maximal 32)
    const ALL: &'static [Self];

    /// Bit-Position innerhalb eines `OptionSet`
    fn bit(self) -> u32;

    /// Anzeigename im Properties-Panel
    fn label(self) -> &'static str;
}

/// Bitmenge über genau eine Options-Aufzählung.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct OptionSet<F> {
    bits: u32,
    _flag: PhantomData<F>,
}

impl<F: OptionFlag> Default for OptionSet<F> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<F: OptionFlag> OptionSet<F> {
    /// Leere Menge (alle Optionen aus)
    pub fn empty() -> Self {
        Self {
            bits: 0,
            _flag: PhantomData,
        }
    }

    /// Menge mit allen Optionen auf `value`
    pub fn all(value: bool) -> Self {
        let mut set = Self::empty();
        set.set_all(value);
        set
    }

    /// Baut eine Menge aus einer Liste aktiver Optionen.
    pub fn from_flags(flags: &[F]) -> Self {
        flags.iter().fold(Self::empty(), |set, &flag| set.with(flag, true))
    }

    pub fn get(&self, flag: F) -> bool {
        self.bits & (1 << flag.bit()) != 0
    }

    pub fn set(&mut self, flag: F, value: bool) {
        if value {
            self.bits |= 1 << flag.bit();
        } else {
            self.bits &= !(1 << flag.bit());
        }
    }

    /// Builder-Variante von `set`
    pub fn with(mut self, flag: F, value: bool) -> Self {
        self.set(flag, value);
        self
    }

    /// Setzt jede Option der Tabelle auf denselben Wert.
    pub fn set_all(&mut self, value: bool) {
        for &flag in F::ALL {
            self.set(flag, value);
        }
    }

    /// Iterator über alle aktiven Optionen in Tabellen-Reihenfolge
    pub fn enabled(&self) -> impl Iterator<Item = F> + '_ {
        F::ALL.iter().copied().filter(move |&flag| self.get(flag))
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Anzahl aktiver Optionen
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }
}

impl<F: OptionFlag> fmt::Debug for OptionSet<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.enabled()).finish()
    }
}

/// Gemeinsame Sicht auf eine editierbare Entity (Node oder Beam).
pub trait Editable {
    /// Skalare Attribut-Schlüssel dieser Entity-Art
    type Attribute: AttributeKey;
    /// Options-Flags dieser Entity-Art
    type Flag: OptionFlag;

    fn name(&self) -> &str;

    /// Setzt den Namen (gekürzt auf `ENTITY_NAME_MAX_LEN`)
    fn set_name(&mut self, name: &str);

    fn is_selected(&self) -> bool;

    fn set_selected(&mut self, selected: bool);

    /// Liest ein skalares Attribut
    fn attribute(&self, key: Self::Attribute) -> AttributeValue;

    /// Schreibt ein skalares Attribut. Werte falscher Variante werden ignoriert.
    fn set_attribute(&mut self, key: Self::Attribute, value: AttributeValue);

    fn options(&self) -> OptionSet<Self::Flag>;

    fn options_mut(&mut self) -> &mut OptionSet<Self::Flag>;
}

/// Protokolliert einen ignorierten Schreibzugriff mit falscher Variante.
pub(crate) fn warn_kind_mismatch(key: impl fmt::Debug, value: AttributeValue) {
    log::warn!(
        "Attribut {:?}: Wert vom Typ {} passt nicht, ignoriert",
        key,
        value.kind_name()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BeamKind, NodeOption};

    #[test]
    fn same_kind_ignores_payload() {
        assert!(AttributeValue::Float(1.0).same_kind(&AttributeValue::Float(2.0)));
        assert!(!AttributeValue::Float(1.0).same_kind(&AttributeValue::Int(1)));
        assert!(AttributeValue::NodePreset(None)
            .same_kind(&AttributeValue::NodePreset(Some(NodePresetId(4)))));
        assert!(!AttributeValue::NodePreset(None).same_kind(&AttributeValue::BeamPreset(None)));
    }

    #[test]
    fn typed_accessors_match_variant_only() {
        let v = AttributeValue::BeamKind(BeamKind::Hydro);
        assert_eq!(v.as_beam_kind(), Some(BeamKind::Hydro));
        assert_eq!(v.as_float(), None);
        assert_eq!(AttributeValue::Int(-3).as_int(), Some(-3));
    }

    #[test]
    fn option_set_set_get_and_all() {
        let mut set = OptionSet::<NodeOption>::empty();
        assert!(set.is_empty());
        set.set(NodeOption::HookPoint, true);
        set.set(NodeOption::Buoyant, true);
        assert!(set.get(NodeOption::HookPoint));
        assert!(!set.get(NodeOption::NoSparks));
        assert_eq!(set.len(), 2);

        set.set(NodeOption::HookPoint, false);
        assert_eq!(set.enabled().collect::<Vec<_>>(), vec![NodeOption::Buoyant]);

        let full = OptionSet::<NodeOption>::all(true);
        assert_eq!(full.len(), NodeOption::ALL.len());
        assert!(OptionSet::<NodeOption>::all(false).is_empty());
    }

    #[test]
    fn bounded_name_truncates_on_char_boundary() {
        let long: String = "ä".repeat(ENTITY_NAME_MAX_LEN + 20);
        let bounded = bounded_name(&long);
        assert_eq!(bounded.chars().count(), ENTITY_NAME_MAX_LEN);
        assert_eq!(bounded_name("n12"), "n12");
    }
}
