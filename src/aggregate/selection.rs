//! Selektions-Aggregat: zusammengeführte Sicht auf alle selektierten Entities
//! einer Art.
//!
//! Das Properties-Panel liest pro Attribut Wert und Uniform-Flag, schreibt
//! Benutzer-Edits direkt ins Aggregat (Uniform wird dabei erzwungen) und
//! lässt sie anschließend per `push` auf jede selektierte Entity zurückschreiben.
//!
//! Zustände:
//! - `count == 0`: kein Flag ist uniform, Werte ohne Bedeutung
//! - `count == 1`: alle Flags uniform, Werte = Werte der einen Entity
//! - `count > 1`: uniform gdw. alle Entities übereinstimmen; bei Divergenz
//!   steht der Wert der zuletzt gefalteten Entity im Aggregat

use super::merge::Aggregated;
use super::options::{merge_options, push_options, set_all_options};
use crate::core::{AttributeKey, AttributeValue, Beam, Editable, Node, OptionSet};
use indexmap::IndexMap;

/// Aggregat über die Selektion einer Entity-Art `E`.
#[derive(Debug, Clone)]
pub struct SelectionAggregate<E: Editable> {
    count: usize,
    name: String,
    values: IndexMap<E::Attribute, Aggregated<AttributeValue>>,
    options: OptionSet<E::Flag>,
    options_uniform: OptionSet<E::Flag>,
}

/// Aggregat über selektierte Nodes
pub type NodeSelection = SelectionAggregate<Node>;
/// Aggregat über selektierte Beams
pub type BeamSelection = SelectionAggregate<Beam>;

impl<E: Editable> Default for SelectionAggregate<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Editable> SelectionAggregate<E> {
    /// Erstellt ein leeres Aggregat (Zustand nach `reset`)
    pub fn new() -> Self {
        let values = <E::Attribute as AttributeKey>::ALL
            .iter()
            .map(|&key| (key, Aggregated::cleared(key.default_value())))
            .collect();
        Self {
            count: 0,
            name: String::new(),
            values,
            options: OptionSet::empty(),
            options_uniform: OptionSet::empty(),
        }
    }

    /// Setzt das Aggregat auf "nichts selektiert" zurück.
    ///
    /// Alle Uniform-Flags werden `false`, damit ein `push` ohne vorheriges
    /// `merge` nichts schreibt.
    pub fn reset(&mut self) {
        self.count = 0;
        self.name.clear();
        for (key, slot) in self.values.iter_mut() {
            *slot = Aggregated::cleared(key.default_value());
        }
        set_all_options(&mut self.options, false);
        set_all_options(&mut self.options_uniform, false);
    }

    /// Übernimmt genau eine Entity: alle Werte aus `entity`, alles uniform.
    pub fn set_single(&mut self, entity: &E) {
        self.count = 1;
        self.name.clear();
        self.name.push_str(entity.name());
        for (&key, slot) in self.values.iter_mut() {
            slot.seed(entity.attribute(key));
        }
        self.options = entity.options();
        set_all_options(&mut self.options_uniform, true);
    }

    /// Faltet eine weitere selektierte Entity ein.
    pub fn merge(&mut self, entity: &E) {
        if self.count == 0 {
            self.set_single(entity);
            return;
        }

        self.count += 1;
        // Ein zusammengeführter Name hat keinen sinnvollen Einzelwert
        self.name.clear();
        for (&key, slot) in self.values.iter_mut() {
            slot.merge(entity.attribute(key));
        }
        merge_options(
            &mut self.options,
            &mut self.options_uniform,
            &entity.options(),
        );
    }

    /// Schreibt alle uniformen Werte auf `entity` zurück.
    ///
    /// Divergente Attribute bleiben unberührt. Der Name wird nur bei
    /// Einzelselektion zurückgeschrieben.
    pub fn push(&self, entity: &mut E) {
        if self.count == 0 {
            return;
        }

        for (&key, slot) in self.values.iter() {
            if slot.is_uniform {
                entity.set_attribute(key, slot.value);
            }
        }
        push_options(entity.options_mut(), &self.options, &self.options_uniform);

        if self.count == 1 {
            entity.set_name(&self.name);
        }
    }

    /// Anzahl der eingefalteten Entities
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Name der Entity bei Einzelselektion, sonst leer
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Benutzer-Edit des Namens (wirksam nur bei Einzelselektion)
    pub fn set_name(&mut self, name: &str) {
        if self.count > 1 {
            log::debug!(
                "Name-Edit bei {} selektierten Entities wird nicht übernommen",
                self.count
            );
        }
        self.name.clear();
        self.name.push_str(name);
    }

    /// Wert-/Uniform-Paar eines Attributs
    pub fn slot(&self, key: E::Attribute) -> Aggregated<AttributeValue> {
        self.values
            .get(&key)
            .copied()
            .unwrap_or_else(|| Aggregated::cleared(key.default_value()))
    }

    /// Angezeigter Wert eines Attributs (nur bei `is_uniform` verlässlich)
    pub fn value(&self, key: E::Attribute) -> AttributeValue {
        self.slot(key).value
    }

    pub fn is_uniform(&self, key: E::Attribute) -> bool {
        self.slot(key).is_uniform
    }

    /// Benutzer-Edit eines Attributs: Wert setzen und Uniform erzwingen.
    ///
    /// Lehnt Werte ab, deren Variante nicht zum Attribut passt.
    pub fn set_value(&mut self, key: E::Attribute, value: AttributeValue) -> anyhow::Result<()> {
        let expected = key.default_value();
        if !expected.same_kind(&value) {
            anyhow::bail!(
                "Attribut {:?} erwartet {}, erhalten {}",
                key,
                expected.kind_name(),
                value.kind_name()
            );
        }
        self.values
            .entry(key)
            .or_insert_with(|| Aggregated::cleared(expected))
            .edit(value);
        Ok(())
    }

    /// Angezeigter Zustand einer Option (divergent = `false`)
    pub fn option(&self, flag: E::Flag) -> bool {
        self.options.get(flag)
    }

    pub fn is_option_uniform(&self, flag: E::Flag) -> bool {
        self.options_uniform.get(flag)
    }

    /// Benutzer-Edit einer Option: Wert setzen und Uniform erzwingen.
    pub fn set_option(&mut self, flag: E::Flag, value: bool) {
        self.options.set(flag, value);
        self.options_uniform.set(flag, true);
    }

    /// Angezeigte Options-Werte
    pub fn options(&self) -> OptionSet<E::Flag> {
        self.options
    }

    /// Uniform-Flags der Optionen
    pub fn options_uniform(&self) -> OptionSet<E::Flag> {
        self.options_uniform
    }

    /// Alle Attribute in Tabellen-Reihenfolge mit ihrem Wert-/Uniform-Paar
    pub fn slots(&self) -> impl Iterator<Item = (E::Attribute, Aggregated<AttributeValue>)> + '_ {
        self.values.iter().map(|(&key, &slot)| (key, slot))
    }

    /// Attribute, in denen sich die Selektion unterscheidet
    pub fn divergent_attributes(&self) -> Vec<E::Attribute> {
        if self.count == 0 {
            return Vec::new();
        }
        self.slots()
            .filter(|(_, slot)| !slot.is_uniform)
            .map(|(key, _)| key)
            .collect()
    }
}
