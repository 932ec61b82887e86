//! Selektions-Aggregation und Rückschreiben von Properties-Panel-Edits.
//!
//! Aufgeteilt in:
//! - `merge`: Merge-Primitive für ein einzelnes Attribut
//! - `options`: Merge/Push über komplette Options-Bündel
//! - `selection`: `SelectionAggregate` pro Entity-Art
//! - `refresh`: Neuaufbau und Propagation über eine Entity-Sammlung

pub mod merge;
pub mod options;
pub mod refresh;
pub mod selection;

pub use merge::{merge_flag, merge_value, Aggregated};
pub use options::{merge_options, push_options, set_all_options};
pub use refresh::{propagate_selection, refresh_selection};
pub use selection::{BeamSelection, NodeSelection, SelectionAggregate};
