//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und einer UI geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod properties_view;

pub use options::EditorOptions;
pub use options::{HISTORY_DEPTH, OPTIONS_FILE_NAME};
pub use properties_view::{EntityPanel, FieldRow, FieldState, OptionRow, PropertiesView};
