//! Stabile Handles für Entities und Presets im Projekt.
//!
//! Handles werden vom `Project` vergeben und nach dem Löschen nie wiederverwendet.

use std::fmt;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub u32);

        impl $name {
            /// Roher Index des Handles
            pub fn index(self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "{}"), self.0)
            }
        }
    };
}

define_id!(
    /// Handle eines Softbody-Nodes
    NodeId,
    "n"
);
define_id!(
    /// Handle eines Softbody-Beams
    BeamId,
    "b"
);
define_id!(
    /// Handle eines Node-Presets
    NodePresetId,
    "np"
);
define_id!(
    /// Handle eines Beam-Presets
    BeamPresetId,
    "bp"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_kind_prefix() {
        assert_eq!(NodeId(3).to_string(), "n3");
        assert_eq!(BeamId(12).to_string(), "b12");
        assert_eq!(NodePresetId(1).to_string(), "np1");
        assert_eq!(BeamPresetId(0).to_string(), "bp0");
    }
}
