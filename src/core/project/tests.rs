use super::*;
use crate::core::OptionSet;
use approx::assert_relative_eq;

/// Drei Nodes in einer Reihe, verbunden durch zwei Beams (a - b - c)
fn project_a_b_c() -> (Project, [NodeId; 3], [BeamId; 2]) {
    let mut project = Project::new("test");
    let a = project.add_node("a", Vec3::new(0.0, 0.0, 0.0));
    let b = project.add_node("b", Vec3::new(1.0, 0.0, 0.0));
    let c = project.add_node("c", Vec3::new(2.0, 0.0, 0.0));
    let ab = project.add_beam(a, b).expect("a-b gültig");
    let bc = project.add_beam(b, c).expect("b-c gültig");
    (project, [a, b, c], [ab, bc])
}

#[test]
fn test_project_creation() {
    let (project, _, _) = project_a_b_c();
    assert_eq!(project.node_count(), 3);
    assert_eq!(project.beam_count(), 2);
    assert!(project.node_selection().is_empty());
    assert!(project.beam_selection().is_empty());
}

#[test]
fn test_handles_are_not_reused_after_delete() {
    let (mut project, [a, _, _], _) = project_a_b_c();
    project.remove_node(a);
    let d = project.add_node("d", Vec3::ZERO);
    assert_ne!(d, a);
    assert!(project.node(a).is_none());
}

#[test]
fn test_add_beam_rejects_invalid_nodes() {
    let (mut project, [a, _, _], _) = project_a_b_c();
    assert!(project.add_beam(a, a).is_err());
    let err = project
        .add_beam(a, NodeId(99))
        .expect_err("unbekannter Node");
    assert!(err.to_string().contains("n99"));
}

#[test]
fn test_remove_node_removes_attached_beams_and_refreshes() {
    let (mut project, [_, b, _], [ab, _]) = project_a_b_c();
    project.select_beam(ab, false).expect("Beam existiert");
    project.select_node(b, false).expect("Node existiert");
    assert_eq!(project.beam_selection().count(), 1);

    project.remove_node(b);

    assert_eq!(project.beam_count(), 0);
    assert!(project.node_selection().is_empty());
    assert!(project.beam_selection().is_empty());
}

#[test]
fn test_nodes_iterate_in_insertion_order_after_removal() {
    let (mut project, [a, b, c], _) = project_a_b_c();
    let d = project.add_node("d", Vec3::ZERO);
    project.remove_node(b);
    let ids: Vec<NodeId> = project.nodes().map(|n| n.id).collect();
    assert_eq!(ids, vec![a, c, d]);
}

#[test]
fn test_select_replace_additive_toggle() {
    let (mut project, [a, b, c], _) = project_a_b_c();

    project.select_node(a, false).expect("ok");
    project.select_node(b, true).expect("ok");
    assert_eq!(project.selected_node_ids(), vec![a, b]);
    assert_eq!(project.node_selection().count(), 2);

    project.select_node(c, false).expect("ok");
    assert_eq!(project.selected_node_ids(), vec![c]);
    assert_eq!(project.node_selection().name(), "c");

    project.toggle_node(c).expect("ok");
    assert!(project.selected_node_ids().is_empty());
    assert!(project.node_selection().is_empty());

    assert!(project.select_node(NodeId(42), false).is_err());
    assert!(project.toggle_node(NodeId(42)).is_err());
}

#[test]
fn test_select_all_and_invert() {
    let (mut project, [a, b, c], [ab, bc]) = project_a_b_c();
    project.select_node(b, false).expect("ok");
    project.invert_node_selection();
    assert_eq!(project.selected_node_ids(), vec![a, c]);

    project.select_all_nodes();
    assert_eq!(project.node_selection().count(), 3);
    project.clear_node_selection();
    assert!(project.node_selection().is_empty());

    project.select_all_beams();
    assert_eq!(project.selected_beam_ids(), vec![ab, bc]);
    project.invert_beam_selection();
    assert!(project.beam_selection().is_empty());
}

#[test]
fn test_refresh_edit_propagate_roundtrip() {
    let (mut project, [a, b, c], _) = project_a_b_c();
    for id in [a, b, c] {
        project.node_mut(id).expect("Node existiert").detacher_group = 5;
    }
    project.node_mut(c).expect("Node existiert").load_weight = 30.0;

    project.select_node(a, false).expect("ok");
    project.select_node(b, true).expect("ok");
    assert_eq!(
        project.node_selection().value(NodeAttribute::DetacherGroup),
        AttributeValue::Int(5)
    );

    project
        .set_node_attribute(NodeAttribute::DetacherGroup, AttributeValue::Int(7))
        .expect("Int passt");
    assert_eq!(project.propagate_node_selection(), 2);

    assert_eq!(project.node(a).map(|n| n.detacher_group), Some(7));
    assert_eq!(project.node(b).map(|n| n.detacher_group), Some(7));
    assert_eq!(project.node(c).map(|n| n.detacher_group), Some(5));
    assert_eq!(project.node(c).map(|n| n.load_weight), Some(30.0));
}

#[test]
fn test_propagate_without_selection_changes_nothing() {
    let (mut project, _, _) = project_a_b_c();
    let before: Vec<Node> = project.nodes().cloned().collect();
    project.set_node_option(NodeOption::Buoyant, true);
    assert_eq!(project.propagate_node_selection(), 0);
    let after: Vec<Node> = project.nodes().cloned().collect();
    assert_eq!(before, after);
}

#[test]
fn test_set_node_attribute_validates_preset() {
    let (mut project, [a, _, _], _) = project_a_b_c();
    project.select_node(a, false).expect("ok");
    let err = project
        .set_node_attribute(
            NodeAttribute::Preset,
            AttributeValue::NodePreset(Some(NodePresetId(3))),
        )
        .expect_err("Preset existiert nicht");
    assert!(err.to_string().contains("np3"));

    let preset = project.add_node_preset(NodePreset::new(
        "heavy",
        100.0,
        1.0,
        1.0,
        1.0,
        OptionSet::empty(),
    ));
    project
        .set_node_attribute(NodeAttribute::Preset, AttributeValue::NodePreset(Some(preset)))
        .expect("Preset existiert");
    project.propagate_node_selection();
    assert_eq!(project.node(a).and_then(|n| n.preset), Some(preset));
}

#[test]
fn test_referenced_preset_cannot_be_removed_until_detached() {
    let (mut project, [a, b, _], [ab, _]) = project_a_b_c();
    let preset = project.add_node_preset(NodePreset::new(
        "light",
        10.0,
        1.0,
        1.0,
        1.0,
        OptionSet::empty(),
    ));
    project.node_mut(a).expect("ok").preset = Some(preset);
    project.node_mut(b).expect("ok").preset = Some(preset);

    assert_eq!(project.node_preset_usage(preset), 2);
    assert!(project.remove_node_preset(preset).is_err());
    assert!(project.node_preset(preset).is_some());

    assert_eq!(project.detach_node_preset(preset), 2);
    let removed = project.remove_node_preset(preset).expect("nicht mehr referenziert");
    assert_eq!(removed.name(), "light");
    assert!(project.remove_node_preset(preset).is_err());

    let beam_preset =
        project.add_beam_preset(BeamPreset::new("stiff", 9_000_000.0, 12_000.0, 400_000.0, 1e6, 0.05));
    project.beam_mut(ab).expect("ok").preset = Some(beam_preset);
    assert!(project.remove_beam_preset(beam_preset).is_err());
    assert_eq!(project.detach_beam_preset(beam_preset), 1);
    assert!(project.remove_beam_preset(beam_preset).is_ok());
}

#[test]
fn test_detach_refreshes_selected_aggregate() {
    let (mut project, [a, _, _], _) = project_a_b_c();
    let preset = project.add_node_preset(NodePreset::new("p", 1.0, 1.0, 1.0, 1.0, OptionSet::empty()));
    project.node_mut(a).expect("ok").preset = Some(preset);
    project.select_node(a, false).expect("ok");
    assert_eq!(
        project.node_selection().value(NodeAttribute::Preset),
        AttributeValue::NodePreset(Some(preset))
    );

    project.detach_node_preset(preset);
    assert_eq!(
        project.node_selection().value(NodeAttribute::Preset),
        AttributeValue::NodePreset(None)
    );
}

#[test]
fn test_move_selected_nodes() {
    let (mut project, [a, b, c], _) = project_a_b_c();
    project.select_node(a, false).expect("ok");
    project.select_node(c, true).expect("ok");

    assert_eq!(project.move_selected_nodes(Vec3::ZERO), 0);
    assert_eq!(project.move_selected_nodes(Vec3::new(0.25, 0.5, -1.0)), 2);

    let pos_a = project.node(a).expect("ok").position;
    assert_relative_eq!(pos_a.x, 0.25);
    assert_relative_eq!(pos_a.z, -1.0);
    let pos_c = project.node(c).expect("ok").position;
    assert_relative_eq!(pos_c.x, 2.25);
    assert_relative_eq!(project.node(b).expect("ok").position.x, 1.0);
}

#[test]
fn test_delete_selected_nodes_and_beams() {
    let (mut project, [a, b, c], [_, bc]) = project_a_b_c();
    project.select_node(a, false).expect("ok");
    assert_eq!(project.delete_selected_nodes(), 1);
    assert_eq!(project.beam_count(), 1);
    assert!(project.node_selection().is_empty());

    project.select_beam(bc, false).expect("ok");
    assert_eq!(project.delete_selected_beams(), 1);
    assert_eq!(project.beam_count(), 0);
    assert!(project.beam_selection().is_empty());
    assert_eq!(project.node_count(), 2);
    assert!(project.node(b).is_some() && project.node(c).is_some());

    assert_eq!(project.delete_selected_nodes(), 0);
}

#[test]
fn test_beam_option_edit_propagates_to_selected_beams() {
    let (mut project, _, [ab, bc]) = project_a_b_c();
    project.select_all_beams();
    project.set_beam_option(BeamOption::Rope, true);
    project
        .set_beam_attribute(BeamAttribute::Kind, AttributeValue::BeamKind(crate::core::BeamKind::Shock))
        .expect("Kind passt");
    assert_eq!(project.propagate_beam_selection(), 2);

    for id in [ab, bc] {
        let beam = project.beam(id).expect("ok");
        assert!(beam.options.get(BeamOption::Rope));
        assert_eq!(beam.kind, crate::core::BeamKind::Shock);
    }
}

#[test]
fn test_single_selection_name_edit_renames_node() {
    let (mut project, [a, _, _], _) = project_a_b_c();
    project.select_node(a, false).expect("ok");
    project.set_node_name("front_axle");
    project.propagate_node_selection();
    assert_eq!(project.node(a).map(|n| n.name().to_string()), Some("front_axle".into()));
    assert_eq!(project.describe_node(a), "front_axle (n0)");
}

#[test]
fn test_pending_preset_edit_blocks_removal() {
    let (mut project, [a, b, _], _) = project_a_b_c();
    let preset = project.add_node_preset(NodePreset::new("p", 1.0, 1.0, 1.0, 1.0, OptionSet::empty()));
    project.select_node(a, false).expect("ok");
    project.select_node(b, true).expect("ok");
    project
        .set_node_attribute(NodeAttribute::Preset, AttributeValue::NodePreset(Some(preset)))
        .expect("Preset existiert");

    assert_eq!(project.node_preset_usage(preset), 0);
    assert!(project.node_preset_pending(preset));
    assert!(project.remove_node_preset(preset).is_err());

    project.propagate_node_selection();
    for id in [a, b] {
        let referenced = project.node(id).and_then(|n| n.preset);
        assert_eq!(referenced, Some(preset));
        assert!(project.node_preset(preset).is_some());
    }
}

#[test]
fn test_detach_discards_pending_preset_edit() {
    let (mut project, [a, _, _], [ab, _]) = project_a_b_c();
    let preset = project.add_node_preset(NodePreset::new("p", 1.0, 1.0, 1.0, 1.0, OptionSet::empty()));
    project.select_node(a, false).expect("ok");
    project
        .set_node_attribute(NodeAttribute::Preset, AttributeValue::NodePreset(Some(preset)))
        .expect("Preset existiert");

    assert_eq!(project.detach_node_preset(preset), 0);
    assert!(!project.node_preset_pending(preset));
    project.remove_node_preset(preset).expect("kein Verweis mehr");
    project.propagate_node_selection();
    assert_eq!(project.node(a).and_then(|n| n.preset), None);

    let beam_preset =
        project.add_beam_preset(BeamPreset::new("stiff", 9_000_000.0, 12_000.0, 400_000.0, 1e6, 0.05));
    project.select_beam(ab, false).expect("ok");
    project
        .set_beam_attribute(BeamAttribute::Preset, AttributeValue::BeamPreset(Some(beam_preset)))
        .expect("Preset existiert");
    assert!(project.remove_beam_preset(beam_preset).is_err());
    project.detach_beam_preset(beam_preset);
    assert!(project.remove_beam_preset(beam_preset).is_ok());
    project.propagate_beam_selection();
    assert_eq!(project.beam(ab).and_then(|b| b.preset), None);
}

#[test]
fn test_delete_selected_nodes_drops_every_attached_beam() {
    let (mut project, [a, b, c], _) = project_a_b_c();
    let ac = project.add_beam(a, c).expect("a-c gültig");
    project.select_node(a, false).expect("ok");
    project.select_node(c, true).expect("ok");

    assert_eq!(project.delete_selected_nodes(), 2);
    assert_eq!(project.beam_count(), 0);
    assert!(project.beam(ac).is_none());
    assert_eq!(project.nodes().map(|n| n.id).collect::<Vec<_>>(), vec![b]);
}
