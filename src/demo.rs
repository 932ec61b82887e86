//! Demo-Rig und skriptgesteuerte Editor-Sitzung für den Headless-Betrieb.
//!
//! Das Rig ist ein vereinfachtes LKW-Chassis: zwei Längsträger mit
//! Querträgern, eine Vorderachse an Stoßdämpfern und ein Lenk-Hydro.

use crate::app::AppIntent;
use crate::core::{
    AttributeValue, BeamAttribute, BeamId, BeamKind, BeamOption, BeamPreset, BeamPresetId,
    Editable, NodeAttribute, NodeId, NodeOption, NodePreset, NodePresetId, OptionSet, Project,
};
use glam::Vec3;

/// Anzahl Stützstellen pro Längsträger
const RAIL_SEGMENTS: usize = 4;
/// Abstand der Stützstellen entlang der Fahrzeugachse (m)
const RAIL_SPACING: f32 = 1.5;
/// Spurbreite des Rahmens (m)
const FRAME_WIDTH: f32 = 1.0;

/// Demo-Projekt samt Handles, die das Sitzungs-Skript benötigt
#[derive(Debug, Clone)]
pub struct DemoRig {
    pub project: Project,
    /// Linker Längsträger, vorne nach hinten
    pub left_rail: Vec<NodeId>,
    /// Rechter Längsträger, vorne nach hinten
    pub right_rail: Vec<NodeId>,
    /// Radaufnahmen der Vorderachse (links, rechts)
    pub axle: [NodeId; 2],
    /// Stoßdämpfer der Vorderachse (links, rechts)
    pub shocks: [BeamId; 2],
    /// Lenk-Hydro zwischen den Radaufnahmen
    pub steering: BeamId,
    pub heavy_preset: NodePresetId,
    pub frame_preset: BeamPresetId,
}

/// Baut das Demo-Chassis.
pub fn build_demo_rig() -> anyhow::Result<DemoRig> {
    let mut project = Project::new("demo_truck");

    let heavy_preset = project.add_node_preset(NodePreset::new(
        "chassis_heavy",
        40.0,
        0.8,
        1.0,
        1.0,
        OptionSet::from_flags(&[NodeOption::NoSparks]),
    ));
    let frame_preset = project.add_beam_preset(BeamPreset::new(
        "frame",
        9_000_000.0,
        12_000.0,
        400_000.0,
        1_000_000.0,
        0.05,
    ));

    let mut left_rail = Vec::with_capacity(RAIL_SEGMENTS);
    let mut right_rail = Vec::with_capacity(RAIL_SEGMENTS);
    for i in 0..RAIL_SEGMENTS {
        let x = i as f32 * RAIL_SPACING;
        let half = FRAME_WIDTH / 2.0;
        left_rail.push(project.add_node(&format!("rail_l{i}"), Vec3::new(x, 0.6, half)));
        right_rail.push(project.add_node(&format!("rail_r{i}"), Vec3::new(x, 0.6, -half)));
    }

    // Längsträger, Querträger und Diagonalen
    let mut frame_beams = Vec::new();
    for rail in [&left_rail, &right_rail] {
        for pair in rail.windows(2) {
            frame_beams.push(project.add_beam(pair[0], pair[1])?);
        }
    }
    for i in 0..RAIL_SEGMENTS {
        frame_beams.push(project.add_beam(left_rail[i], right_rail[i])?);
        if i + 1 < RAIL_SEGMENTS {
            frame_beams.push(project.add_beam(left_rail[i], right_rail[i + 1])?);
        }
    }
    for id in frame_beams {
        if let Some(beam) = project.beam_mut(id) {
            beam.preset = Some(frame_preset);
        }
    }

    let axle = [
        project.add_node("wheel_fl", Vec3::new(0.0, 0.3, FRAME_WIDTH)),
        project.add_node("wheel_fr", Vec3::new(0.0, 0.3, -FRAME_WIDTH)),
    ];
    for &id in &axle {
        if let Some(node) = project.node_mut(id) {
            node.load_weight = 80.0;
            node.options.set(NodeOption::LoadWeightOverride, true);
            node.options.set(NodeOption::NoGroundContact, true);
        }
    }

    let shocks = [
        project.add_beam(left_rail[0], axle[0])?,
        project.add_beam(right_rail[0], axle[1])?,
    ];
    for (id, name) in shocks.iter().zip(["shock_fl", "shock_fr"]) {
        if let Some(beam) = project.beam_mut(*id) {
            beam.set_name(name);
            beam.kind = BeamKind::Shock;
            beam.shock_spring_rate = 180_000.0;
            beam.shock_damping = 2_500.0;
            beam.shock_precompression = 1.0;
        }
    }
    // Rechter Dämpfer weicht ab, das Panel zeigt "Mixed"
    if let Some(beam) = project.beam_mut(shocks[1]) {
        beam.shock_damping = 2_800.0;
        beam.options.set(BeamOption::ShockMetric, true);
    }

    let steering = project.add_beam(axle[0], axle[1])?;
    if let Some(beam) = project.beam_mut(steering) {
        beam.set_name("steering");
        beam.kind = BeamKind::Hydro;
        beam.hydro_extension_factor = 0.1;
        beam.options.set(BeamOption::HydroDisableAtHighSpeed, true);
    }

    log::info!(
        "Demo-Rig '{}' erstellt: {} Nodes, {} Beams",
        project.name,
        project.node_count(),
        project.beam_count()
    );

    Ok(DemoRig {
        project,
        left_rail,
        right_rail,
        axle,
        shocks,
        steering,
        heavy_preset,
        frame_preset,
    })
}

/// Intent-Folge einer typischen Bearbeitungssitzung am Demo-Rig.
pub fn scripted_session(rig: &DemoRig) -> Vec<AppIntent> {
    let mut intents = vec![AppIntent::NodeClicked {
        node_id: rig.left_rail[0],
        additive: false,
    }];
    intents.extend(
        rig.left_rail[1..]
            .iter()
            .chain(rig.right_rail.iter())
            .map(|&node_id| AppIntent::NodeClicked {
                node_id,
                additive: true,
            }),
    );
    intents.extend([
        AppIntent::NodeAttributeEdited {
            attribute: NodeAttribute::Preset,
            value: AttributeValue::NodePreset(Some(rig.heavy_preset)),
        },
        AppIntent::NodeOptionEdited {
            option: NodeOption::NoSparks,
            value: true,
        },
        AppIntent::CommitNodeEditsRequested,
        AppIntent::BeamClicked {
            beam_id: rig.shocks[0],
            additive: false,
        },
        AppIntent::BeamClicked {
            beam_id: rig.shocks[1],
            additive: true,
        },
        AppIntent::BeamAttributeEdited {
            attribute: BeamAttribute::ShockDamping,
            value: AttributeValue::Float(3_000.0),
        },
        AppIntent::CommitBeamEditsRequested,
        AppIntent::UndoRequested,
        AppIntent::RedoRequested,
        AppIntent::BeamClicked {
            beam_id: rig.steering,
            additive: false,
        },
        AppIntent::BeamNameEdited {
            name: "steering_main".to_string(),
        },
        AppIntent::CommitBeamEditsRequested,
        AppIntent::InvertNodeSelectionRequested,
        AppIntent::ClearSelectionRequested,
        AppIntent::RemoveNodePresetRequested {
            preset_id: rig.heavy_preset,
            detach: true,
        },
    ]);
    intents
}
