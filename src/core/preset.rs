//! Presets: benannte Vorgabewerte, die von Nodes/Beams referenziert werden.
//!
//! Presets gehören dem `Project` und sind nach dem Anlegen unveränderlich.
//! Entities halten nur Handles, nie Besitz.

use super::attribute::bounded_name;
use super::{NodeOption, OptionSet};

/// Vorgabewerte für Nodes (`set_node_defaults` im Truckfile)
#[derive(Debug, Clone, PartialEq)]
pub struct NodePreset {
    name: String,
    load_weight: f32,
    friction: f32,
    volume: f32,
    surface: f32,
    options: OptionSet<NodeOption>,
}

impl NodePreset {
    pub fn new(
        name: &str,
        load_weight: f32,
        friction: f32,
        volume: f32,
        surface: f32,
        options: OptionSet<NodeOption>,
    ) -> Self {
        Self {
            name: bounded_name(name),
            load_weight,
            friction,
            volume,
            surface,
            options,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn load_weight(&self) -> f32 {
        self.load_weight
    }

    pub fn friction(&self) -> f32 {
        self.friction
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn surface(&self) -> f32 {
        self.surface
    }

    pub fn options(&self) -> OptionSet<NodeOption> {
        self.options
    }
}

/// Vorgabewerte für Beams (`set_beam_defaults` im Truckfile)
#[derive(Debug, Clone, PartialEq)]
pub struct BeamPreset {
    name: String,
    spring: f32,
    damping: f32,
    deform: f32,
    break_threshold: f32,
    diameter: f32,
}

impl BeamPreset {
    pub fn new(
        name: &str,
        spring: f32,
        damping: f32,
        deform: f32,
        break_threshold: f32,
        diameter: f32,
    ) -> Self {
        Self {
            name: bounded_name(name),
            spring,
            damping,
            deform,
            break_threshold,
            diameter,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Federrate in N/m
    pub fn spring(&self) -> f32 {
        self.spring
    }

    /// Dämpfung in N/(m/s)
    pub fn damping(&self) -> f32 {
        self.damping
    }

    /// Verformungsschwelle
    pub fn deform(&self) -> f32 {
        self.deform
    }

    /// Bruchschwelle
    pub fn break_threshold(&self) -> f32 {
        self.break_threshold
    }

    /// Sichtbarer Durchmesser in Metern
    pub fn diameter(&self) -> f32 {
        self.diameter
    }
}
