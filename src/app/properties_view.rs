//! Builder für die Properties-Panel-Sicht aus dem AppState.

use crate::aggregate::SelectionAggregate;
use crate::app::AppState;
use crate::core::{AttributeKey, Editable, OptionFlag};
use crate::shared::{EntityPanel, FieldRow, FieldState, OptionRow, PropertiesView};

/// Baut beide Panels aus den Selektions-Aggregaten des Projekts.
pub fn build(state: &AppState) -> PropertiesView {
    PropertiesView {
        nodes: build_panel(state.project.node_selection()),
        beams: build_panel(state.project.beam_selection()),
    }
}

fn field_state(uniform: bool) -> FieldState {
    if uniform {
        FieldState::Uniform
    } else {
        FieldState::Mixed
    }
}

/// Panel einer Entity-Art; `None` bei leerer Selektion.
fn build_panel<E: Editable>(aggregate: &SelectionAggregate<E>) -> Option<EntityPanel> {
    if aggregate.is_empty() {
        return None;
    }

    let fields = aggregate
        .slots()
        .map(|(key, slot)| FieldRow {
            label: key.label(),
            value: slot.value,
            state: field_state(slot.is_uniform),
        })
        .collect();

    let options = <E::Flag as OptionFlag>::ALL
        .iter()
        .map(|&flag| OptionRow {
            label: flag.label(),
            checked: aggregate.option(flag),
            state: field_state(aggregate.is_option_uniform(flag)),
        })
        .collect();

    Some(EntityPanel {
        count: aggregate.count(),
        name: (aggregate.count() == 1).then(|| aggregate.name().to_string()),
        fields,
        options,
    })
}
