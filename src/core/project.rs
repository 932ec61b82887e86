//! Das Projekt: besitzt Nodes, Beams, Presets und die beiden Selektions-Aggregate.
//!
//! Alle Sammlungen sind `IndexMap`s mit stabilen Handles, die Iteration folgt
//! der Einfügereihenfolge. Entities referenzieren Presets nur über Handles;
//! ein referenziertes Preset kann erst nach `detach_*_preset` gelöscht werden.

use super::{
    AttributeValue, Beam, BeamAttribute, BeamId, BeamOption, BeamPreset, BeamPresetId, Editable,
    Node, NodeAttribute, NodeId, NodeOption, NodePreset, NodePresetId,
};
use crate::aggregate::{propagate_selection, refresh_selection, BeamSelection, NodeSelection};
use anyhow::{anyhow, bail};
use glam::Vec3;
use indexmap::IndexMap;
use std::collections::HashSet;

/// Ein geöffnetes Softbody-Projekt (ein Fahrzeug)
#[derive(Debug, Clone, Default)]
pub struct Project {
    /// Anzeigename des Fahrzeugs
    pub name: String,
    nodes: IndexMap<NodeId, Node>,
    beams: IndexMap<BeamId, Beam>,
    node_presets: IndexMap<NodePresetId, NodePreset>,
    beam_presets: IndexMap<BeamPresetId, BeamPreset>,
    next_node_id: u32,
    next_beam_id: u32,
    next_node_preset_id: u32,
    next_beam_preset_id: u32,
    node_selection: NodeSelection,
    beam_selection: BeamSelection,
}

impl Project {
    /// Erstellt ein leeres Projekt
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    // ── Nodes ───────────────────────────────────────────────────

    /// Fügt einen neuen, unselektierten Node hinzu
    pub fn add_node(&mut self, name: &str, position: Vec3) -> NodeId {
        let id = NodeId(self.next_node_id);
        self.next_node_id += 1;
        self.nodes.insert(id, Node::new(id, name, position));
        id
    }

    /// Entfernt einen Node inklusive aller daran hängenden Beams
    pub fn remove_node(&mut self, id: NodeId) -> Option<Node> {
        let removed = self.nodes.shift_remove(&id)?;
        let beams_before = self.beams.len();
        self.beams.retain(|_, beam| !beam.touches(id));
        let removed_beams = beams_before - self.beams.len();
        if removed_beams > 0 {
            log::debug!("Node {} entfernt, {} Beams mitgelöscht", id, removed_beams);
        }

        if removed.selected {
            self.refresh_node_selection();
        }
        if removed_beams > 0 {
            self.refresh_beam_selection();
        }
        Some(removed)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Direkter Schreibzugriff. Nach Änderung von `selected` muss
    /// `refresh_node_selection` aufgerufen werden.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(&id)
    }

    /// Alle Nodes in gespeicherter Reihenfolge
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    // ── Beams ───────────────────────────────────────────────────

    /// Fügt einen Plain-Beam zwischen zwei existierenden Nodes hinzu
    pub fn add_beam(&mut self, start: NodeId, end: NodeId) -> anyhow::Result<BeamId> {
        if start == end {
            bail!("Beam benötigt zwei verschiedene Nodes (beide {start})");
        }
        for node in [start, end] {
            if !self.nodes.contains_key(&node) {
                bail!("Node {node} existiert nicht");
            }
        }

        let id = BeamId(self.next_beam_id);
        self.next_beam_id += 1;
        self.beams.insert(id, Beam::new(id, start, end));
        Ok(id)
    }

    pub fn remove_beam(&mut self, id: BeamId) -> Option<Beam> {
        let removed = self.beams.shift_remove(&id)?;
        if removed.selected {
            self.refresh_beam_selection();
        }
        Some(removed)
    }

    pub fn beam(&self, id: BeamId) -> Option<&Beam> {
        self.beams.get(&id)
    }

    /// Direkter Schreibzugriff. Nach Änderung von `selected` muss
    /// `refresh_beam_selection` aufgerufen werden.
    pub fn beam_mut(&mut self, id: BeamId) -> Option<&mut Beam> {
        self.beams.get_mut(&id)
    }

    /// Alle Beams in gespeicherter Reihenfolge
    pub fn beams(&self) -> impl Iterator<Item = &Beam> {
        self.beams.values()
    }

    pub fn beam_count(&self) -> usize {
        self.beams.len()
    }

    // ── Presets ─────────────────────────────────────────────────

    pub fn add_node_preset(&mut self, preset: NodePreset) -> NodePresetId {
        let id = NodePresetId(self.next_node_preset_id);
        self.next_node_preset_id += 1;
        self.node_presets.insert(id, preset);
        id
    }

    pub fn node_preset(&self, id: NodePresetId) -> Option<&NodePreset> {
        self.node_presets.get(&id)
    }

    pub fn node_presets(&self) -> impl Iterator<Item = (NodePresetId, &NodePreset)> {
        self.node_presets.iter().map(|(&id, preset)| (id, preset))
    }

    /// Anzahl der Nodes, die das Preset referenzieren
    pub fn node_preset_usage(&self, id: NodePresetId) -> usize {
        self.nodes.values().filter(|n| n.preset == Some(id)).count()
    }

    /// Prüft, ob ein noch nicht übernommener Panel-Edit das Preset setzen würde
    pub fn node_preset_pending(&self, id: NodePresetId) -> bool {
        let selection = &self.node_selection;
        !selection.is_empty()
            && selection.is_uniform(NodeAttribute::Preset)
            && selection.value(NodeAttribute::Preset) == AttributeValue::NodePreset(Some(id))
    }

    /// Entfernt ein Node-Preset.
    ///
    /// Schlägt fehl, solange Nodes oder das Node-Aggregat es referenzieren.
    pub fn remove_node_preset(&mut self, id: NodePresetId) -> anyhow::Result<NodePreset> {
        let usage = self.node_preset_usage(id);
        if usage > 0 {
            bail!("Node-Preset {id} wird noch von {usage} Nodes referenziert");
        }
        if self.node_preset_pending(id) {
            bail!("Node-Preset {id} ist im Properties-Panel gesetzt");
        }
        self.node_presets
            .shift_remove(&id)
            .ok_or_else(|| anyhow!("Node-Preset {id} existiert nicht"))
    }

    /// Löst alle Referenzen auf ein Node-Preset. Gibt die Anzahl betroffener Nodes zurück.
    ///
    /// Ein offener Panel-Edit auf dieses Preset wird durch Neuaufbau des
    /// Aggregats verworfen.
    pub fn detach_node_preset(&mut self, id: NodePresetId) -> usize {
        let mut detached = 0;
        let mut touched_selection = self.node_preset_pending(id);
        for node in self.nodes.values_mut().filter(|n| n.preset == Some(id)) {
            node.preset = None;
            detached += 1;
            touched_selection |= node.selected;
        }
        if touched_selection {
            self.refresh_node_selection();
        }
        detached
    }

    pub fn add_beam_preset(&mut self, preset: BeamPreset) -> BeamPresetId {
        let id = BeamPresetId(self.next_beam_preset_id);
        self.next_beam_preset_id += 1;
        self.beam_presets.insert(id, preset);
        id
    }

    pub fn beam_preset(&self, id: BeamPresetId) -> Option<&BeamPreset> {
        self.beam_presets.get(&id)
    }

    pub fn beam_presets(&self) -> impl Iterator<Item = (BeamPresetId, &BeamPreset)> {
        self.beam_presets.iter().map(|(&id, preset)| (id, preset))
    }

    /// Anzahl der Beams, die das Preset referenzieren
    pub fn beam_preset_usage(&self, id: BeamPresetId) -> usize {
        self.beams.values().filter(|b| b.preset == Some(id)).count()
    }

    /// Prüft, ob ein noch nicht übernommener Panel-Edit das Preset setzen würde
    pub fn beam_preset_pending(&self, id: BeamPresetId) -> bool {
        let selection = &self.beam_selection;
        !selection.is_empty()
            && selection.is_uniform(BeamAttribute::Preset)
            && selection.value(BeamAttribute::Preset) == AttributeValue::BeamPreset(Some(id))
    }

    /// Entfernt ein Beam-Preset.
    ///
    /// Schlägt fehl, solange Beams oder das Beam-Aggregat es referenzieren.
    pub fn remove_beam_preset(&mut self, id: BeamPresetId) -> anyhow::Result<BeamPreset> {
        let usage = self.beam_preset_usage(id);
        if usage > 0 {
            bail!("Beam-Preset {id} wird noch von {usage} Beams referenziert");
        }
        if self.beam_preset_pending(id) {
            bail!("Beam-Preset {id} ist im Properties-Panel gesetzt");
        }
        self.beam_presets
            .shift_remove(&id)
            .ok_or_else(|| anyhow!("Beam-Preset {id} existiert nicht"))
    }

    /// Löst alle Referenzen auf ein Beam-Preset. Gibt die Anzahl betroffener Beams zurück.
    ///
    /// Ein offener Panel-Edit auf dieses Preset wird durch Neuaufbau des
    /// Aggregats verworfen.
    pub fn detach_beam_preset(&mut self, id: BeamPresetId) -> usize {
        let mut detached = 0;
        let mut touched_selection = self.beam_preset_pending(id);
        for beam in self.beams.values_mut().filter(|b| b.preset == Some(id)) {
            beam.preset = None;
            detached += 1;
            touched_selection |= beam.selected;
        }
        if touched_selection {
            self.refresh_beam_selection();
        }
        detached
    }

    // ── Selektion: Nodes ────────────────────────────────────────

    /// Selektiert einen Node; ohne `additive` wird die bisherige Selektion ersetzt.
    pub fn select_node(&mut self, id: NodeId, additive: bool) -> anyhow::Result<()> {
        if !self.nodes.contains_key(&id) {
            bail!("Node {id} existiert nicht");
        }
        for node in self.nodes.values_mut() {
            if node.id == id {
                node.selected = true;
            } else if !additive {
                node.selected = false;
            }
        }
        self.refresh_node_selection();
        Ok(())
    }

    /// Kehrt den Selektionszustand eines Nodes um
    pub fn toggle_node(&mut self, id: NodeId) -> anyhow::Result<()> {
        let node = self
            .nodes
            .get_mut(&id)
            .ok_or_else(|| anyhow!("Node {id} existiert nicht"))?;
        node.selected = !node.selected;
        self.refresh_node_selection();
        Ok(())
    }

    pub fn clear_node_selection(&mut self) {
        for node in self.nodes.values_mut() {
            node.selected = false;
        }
        self.refresh_node_selection();
    }

    pub fn select_all_nodes(&mut self) {
        for node in self.nodes.values_mut() {
            node.selected = true;
        }
        self.refresh_node_selection();
    }

    pub fn invert_node_selection(&mut self) {
        for node in self.nodes.values_mut() {
            node.selected = !node.selected;
        }
        self.refresh_node_selection();
    }

    /// IDs aller selektierten Nodes in gespeicherter Reihenfolge
    pub fn selected_node_ids(&self) -> Vec<NodeId> {
        self.nodes
            .values()
            .filter(|n| n.selected)
            .map(|n| n.id)
            .collect()
    }

    // ── Selektion: Beams ────────────────────────────────────────

    /// Selektiert einen Beam; ohne `additive` wird die bisherige Selektion ersetzt.
    pub fn select_beam(&mut self, id: BeamId, additive: bool) -> anyhow::Result<()> {
        if !self.beams.contains_key(&id) {
            bail!("Beam {id} existiert nicht");
        }
        for beam in self.beams.values_mut() {
            if beam.id == id {
                beam.selected = true;
            } else if !additive {
                beam.selected = false;
            }
        }
        self.refresh_beam_selection();
        Ok(())
    }

    /// Kehrt den Selektionszustand eines Beams um
    pub fn toggle_beam(&mut self, id: BeamId) -> anyhow::Result<()> {
        let beam = self
            .beams
            .get_mut(&id)
            .ok_or_else(|| anyhow!("Beam {id} existiert nicht"))?;
        beam.selected = !beam.selected;
        self.refresh_beam_selection();
        Ok(())
    }

    pub fn clear_beam_selection(&mut self) {
        for beam in self.beams.values_mut() {
            beam.selected = false;
        }
        self.refresh_beam_selection();
    }

    pub fn select_all_beams(&mut self) {
        for beam in self.beams.values_mut() {
            beam.selected = true;
        }
        self.refresh_beam_selection();
    }

    pub fn invert_beam_selection(&mut self) {
        for beam in self.beams.values_mut() {
            beam.selected = !beam.selected;
        }
        self.refresh_beam_selection();
    }

    /// IDs aller selektierten Beams in gespeicherter Reihenfolge
    pub fn selected_beam_ids(&self) -> Vec<BeamId> {
        self.beams
            .values()
            .filter(|b| b.selected)
            .map(|b| b.id)
            .collect()
    }

    // ── Aggregate ───────────────────────────────────────────────

    /// Aggregat über die selektierten Nodes
    pub fn node_selection(&self) -> &NodeSelection {
        &self.node_selection
    }

    /// Aggregat über die selektierten Beams
    pub fn beam_selection(&self) -> &BeamSelection {
        &self.beam_selection
    }

    /// Baut das Node-Aggregat aus allen selektierten Nodes neu auf
    pub fn refresh_node_selection(&mut self) {
        refresh_selection(self.nodes.values(), &mut self.node_selection);
        log::debug!("Node-Selektion: {} selektiert", self.node_selection.count());
    }

    /// Baut das Beam-Aggregat aus allen selektierten Beams neu auf
    pub fn refresh_beam_selection(&mut self) {
        refresh_selection(self.beams.values(), &mut self.beam_selection);
        log::debug!("Beam-Selektion: {} selektiert", self.beam_selection.count());
    }

    /// Schreibt das Node-Aggregat auf alle selektierten Nodes zurück
    pub fn propagate_node_selection(&mut self) -> usize {
        propagate_selection(self.nodes.values_mut(), &self.node_selection)
    }

    /// Schreibt das Beam-Aggregat auf alle selektierten Beams zurück
    pub fn propagate_beam_selection(&mut self) -> usize {
        propagate_selection(self.beams.values_mut(), &self.beam_selection)
    }

    /// Benutzer-Edit eines Node-Attributs im Aggregat.
    ///
    /// Prüft zusätzlich, dass ein referenziertes Preset existiert.
    pub fn set_node_attribute(
        &mut self,
        key: NodeAttribute,
        value: AttributeValue,
    ) -> anyhow::Result<()> {
        if let AttributeValue::NodePreset(Some(id)) = value {
            if !self.node_presets.contains_key(&id) {
                bail!("Node-Preset {id} existiert nicht");
            }
        }
        self.node_selection.set_value(key, value)
    }

    /// Benutzer-Edit eines Beam-Attributs im Aggregat.
    ///
    /// Prüft zusätzlich, dass ein referenziertes Preset existiert.
    pub fn set_beam_attribute(
        &mut self,
        key: BeamAttribute,
        value: AttributeValue,
    ) -> anyhow::Result<()> {
        if let AttributeValue::BeamPreset(Some(id)) = value {
            if !self.beam_presets.contains_key(&id) {
                bail!("Beam-Preset {id} existiert nicht");
            }
        }
        self.beam_selection.set_value(key, value)
    }

    pub fn set_node_option(&mut self, flag: NodeOption, value: bool) {
        self.node_selection.set_option(flag, value);
    }

    pub fn set_beam_option(&mut self, flag: BeamOption, value: bool) {
        self.beam_selection.set_option(flag, value);
    }

    pub fn set_node_name(&mut self, name: &str) {
        self.node_selection.set_name(name);
    }

    pub fn set_beam_name(&mut self, name: &str) {
        self.beam_selection.set_name(name);
    }

    // ── Bulk-Operationen auf der Selektion ──────────────────────

    /// Verschiebt alle selektierten Nodes. Gibt die Anzahl verschobener Nodes zurück.
    pub fn move_selected_nodes(&mut self, delta: Vec3) -> usize {
        if delta == Vec3::ZERO {
            return 0;
        }
        let mut moved = 0;
        for node in self.nodes.values_mut().filter(|n| n.selected) {
            node.position += delta;
            moved += 1;
        }
        moved
    }

    /// Löscht alle selektierten Nodes samt angehängter Beams
    pub fn delete_selected_nodes(&mut self) -> usize {
        let removed: HashSet<NodeId> = self
            .nodes
            .values()
            .filter(|n| n.selected)
            .map(|n| n.id)
            .collect();
        if removed.is_empty() {
            return 0;
        }
        self.nodes.retain(|_, node| !node.selected);
        self.beams
            .retain(|_, beam| !removed.contains(&beam.start) && !removed.contains(&beam.end));
        self.refresh_node_selection();
        self.refresh_beam_selection();
        removed.len()
    }

    /// Löscht alle selektierten Beams
    pub fn delete_selected_beams(&mut self) -> usize {
        let before = self.beams.len();
        self.beams.retain(|_, beam| !beam.selected);
        self.refresh_beam_selection();
        before - self.beams.len()
    }

    /// Lesbare Bezeichnung eines Nodes für Logs
    pub fn describe_node(&self, id: NodeId) -> String {
        match self.nodes.get(&id) {
            Some(node) if !node.name().is_empty() => format!("{} ({})", node.name(), id),
            _ => id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests;
