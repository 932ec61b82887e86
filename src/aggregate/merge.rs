//! Merge-Primitive für ein einzelnes Attribut gegen ein laufendes Uniform-Flag.

/// Faltet `incoming` in das laufende Paar `(value, uniform)`.
///
/// Uniform bleibt nur erhalten, wenn `value == incoming` (exakter Vergleich,
/// auch für Floats). Der Wert wird immer durch `incoming` ersetzt, nach einer
/// Divergenz zeigt das Aggregat also den Wert der zuletzt gefalteten Entity.
pub fn merge_value<T: PartialEq>(value: T, uniform: bool, incoming: T) -> (T, bool) {
    let uniform = uniform && value == incoming;
    (incoming, uniform)
}

/// Wie `merge_value`, aber ein divergentes Flag wird als `false` angezeigt.
pub fn merge_flag(value: bool, uniform: bool, incoming: bool) -> (bool, bool) {
    let (value, uniform) = merge_value(value, uniform, incoming);
    (value && uniform, uniform)
}

/// Laufendes `(Wert, Uniform)`-Paar eines Attributs im Selektions-Aggregat.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aggregated<T> {
    /// Zuletzt gefalteter bzw. vom Benutzer gesetzter Wert
    pub value: T,
    /// `true` gdw. alle bisher gefalteten Entities denselben Wert hatten
    pub is_uniform: bool,
}

impl<T: PartialEq + Copy> Aggregated<T> {
    /// Zustand ohne Selektion: Wert ohne Bedeutung, nicht uniform
    pub fn cleared(value: T) -> Self {
        Self {
            value,
            is_uniform: false,
        }
    }

    /// Startwert aus der ersten selektierten Entity
    pub fn seed(&mut self, value: T) {
        self.value = value;
        self.is_uniform = true;
    }

    /// Faltet den Wert einer weiteren Entity ein
    pub fn merge(&mut self, incoming: T) {
        let (value, is_uniform) = merge_value(self.value, self.is_uniform, incoming);
        self.value = value;
        self.is_uniform = is_uniform;
    }

    /// Benutzer-Edit: Wert übernehmen und als uniform markieren
    pub fn edit(&mut self, value: T) {
        self.value = value;
        self.is_uniform = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_values_stay_uniform() {
        assert_eq!(merge_value(5, true, 5), (5, true));
        assert_eq!(merge_value(1.5_f32, true, 1.5), (1.5, true));
    }

    #[test]
    fn divergence_keeps_last_value() {
        assert_eq!(merge_value(5, true, 7), (7, false));
        // Einmal divergent bleibt divergent, auch bei späterer Übereinstimmung
        assert_eq!(merge_value(7, false, 7), (7, false));
    }

    #[test]
    fn float_comparison_is_exact() {
        assert!(!merge_value(1.0_f32, true, 1.0 + f32::EPSILON).1);
    }

    #[test]
    fn divergent_flag_displays_unchecked_in_both_orders() {
        assert_eq!(merge_flag(true, true, false), (false, false));
        assert_eq!(merge_flag(false, true, true), (false, false));
        assert_eq!(merge_flag(true, true, true), (true, true));
        assert_eq!(merge_flag(false, false, true), (false, false));
    }

    #[test]
    fn aggregated_seed_merge_edit() {
        let mut slot = Aggregated::cleared(0);
        assert!(!slot.is_uniform);

        slot.seed(3);
        assert_eq!(slot, Aggregated { value: 3, is_uniform: true });

        slot.merge(4);
        assert_eq!(slot, Aggregated { value: 4, is_uniform: false });

        slot.edit(9);
        assert_eq!(slot, Aggregated { value: 9, is_uniform: true });
    }
}
