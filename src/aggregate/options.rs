//! Merge/Push über ein komplettes Options-Bündel.
//!
//! Jede Funktion iteriert `OptionFlag::ALL`, es gibt keine handgepflegten
//! Optionslisten.

use super::merge::merge_flag;
use crate::core::{OptionFlag, OptionSet};

/// Faltet die Optionen einer weiteren Entity in `values`/`uniform` ein.
pub fn merge_options<F: OptionFlag>(
    values: &mut OptionSet<F>,
    uniform: &mut OptionSet<F>,
    incoming: &OptionSet<F>,
) {
    for &flag in F::ALL {
        let (value, is_uniform) = merge_flag(values.get(flag), uniform.get(flag), incoming.get(flag));
        values.set(flag, value);
        uniform.set(flag, is_uniform);
    }
}

/// Schreibt alle uniformen Optionen aus `values` nach `target`.
///
/// Nicht-uniforme Optionen bleiben auf `target` unverändert.
pub fn push_options<F: OptionFlag>(
    target: &mut OptionSet<F>,
    values: &OptionSet<F>,
    uniform: &OptionSet<F>,
) {
    for &flag in F::ALL {
        if uniform.get(flag) {
            target.set(flag, values.get(flag));
        }
    }
}

/// Setzt jede Option des Bündels auf `value`.
pub fn set_all_options<F: OptionFlag>(bundle: &mut OptionSet<F>, value: bool) {
    bundle.set_all(value);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NodeOption;

    #[test]
    fn merge_marks_only_differing_flags_mixed() {
        let mut values = OptionSet::from_flags(&[NodeOption::HookPoint, NodeOption::Buoyant]);
        let mut uniform = OptionSet::all(true);
        let incoming = OptionSet::from_flags(&[NodeOption::HookPoint]);

        merge_options(&mut values, &mut uniform, &incoming);

        assert!(values.get(NodeOption::HookPoint));
        assert!(uniform.get(NodeOption::HookPoint));
        assert!(!values.get(NodeOption::Buoyant));
        assert!(!uniform.get(NodeOption::Buoyant));
        assert!(uniform.get(NodeOption::NoSparks));
    }

    #[test]
    fn push_leaves_mixed_flags_untouched() {
        let mut target = OptionSet::from_flags(&[NodeOption::Buoyant]);
        let values = OptionSet::from_flags(&[NodeOption::NoSparks]);
        let mut uniform = OptionSet::all(true);
        uniform.set(NodeOption::Buoyant, false);

        push_options(&mut target, &values, &uniform);

        assert!(target.get(NodeOption::NoSparks));
        assert!(target.get(NodeOption::Buoyant));
        assert_eq!(target.len(), 2);
    }

    #[test]
    fn push_with_nothing_uniform_is_noop() {
        let mut target = OptionSet::from_flags(&[NodeOption::HookPoint]);
        let before = target;
        push_options(&mut target, &OptionSet::all(true), &OptionSet::empty());
        assert_eq!(target, before);
    }

    #[test]
    fn set_all_options_toggles_every_flag() {
        let mut bundle = OptionSet::<NodeOption>::empty();
        set_all_options(&mut bundle, true);
        assert_eq!(bundle.len(), NodeOption::ALL.len());
        set_all_options(&mut bundle, false);
        assert!(bundle.is_empty());
    }
}
