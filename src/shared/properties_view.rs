//! Properties-Panel-Sicht als expliziter Übergabevertrag zwischen App und UI.
//!
//! Lebt im shared-Modul, da `app` sie baut und eine beliebige UI sie rendert.
//! Nicht-uniforme Felder werden als `Mixed` geliefert, die UI zeigt sie als
//! unbestimmt an und darf `value` dann nicht als gemeinsamen Wert darstellen.

use crate::core::AttributeValue;

/// Zustand eines Feldes über die Selektion hinweg
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldState {
    /// Alle selektierten Entities stimmen überein
    Uniform,
    /// Mindestens zwei selektierte Entities unterscheiden sich
    Mixed,
}

/// Ein skalares Feld im Panel
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRow {
    /// Anzeigename
    pub label: &'static str,
    /// Angezeigter Wert (bei `Mixed` der zuletzt gefaltete)
    pub value: AttributeValue,
    pub state: FieldState,
}

/// Eine Checkbox im Panel
#[derive(Debug, Clone, PartialEq)]
pub struct OptionRow {
    /// Anzeigename
    pub label: &'static str,
    /// Angezeigter Haken (bei `Mixed` immer `false`)
    pub checked: bool,
    pub state: FieldState,
}

/// Panel für eine Entity-Art
#[derive(Debug, Clone, PartialEq)]
pub struct EntityPanel {
    /// Anzahl selektierter Entities
    pub count: usize,
    /// Name bei Einzelselektion
    pub name: Option<String>,
    pub fields: Vec<FieldRow>,
    pub options: Vec<OptionRow>,
}

impl EntityPanel {
    /// Anzahl der Felder und Optionen im Zustand `Mixed`
    pub fn mixed_count(&self) -> usize {
        self.fields
            .iter()
            .filter(|f| f.state == FieldState::Mixed)
            .count()
            + self
                .options
                .iter()
                .filter(|o| o.state == FieldState::Mixed)
                .count()
    }

    /// Sucht ein Feld über seinen Anzeigenamen
    pub fn field(&self, label: &str) -> Option<&FieldRow> {
        self.fields.iter().find(|f| f.label == label)
    }

    /// Sucht eine Option über ihren Anzeigenamen
    pub fn option(&self, label: &str) -> Option<&OptionRow> {
        self.options.iter().find(|o| o.label == label)
    }
}

/// Read-only Daten beider Properties-Panels (None = nichts selektiert)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertiesView {
    pub nodes: Option<EntityPanel>,
    pub beams: Option<EntityPanel>,
}
