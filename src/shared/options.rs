//! Zentrale Konfiguration für den Softbody-Rig-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

/// Dateiname der Optionen-Datei neben der Binary.
pub const OPTIONS_FILE_NAME: &str = "softbody_rig_editor.toml";

// ── History ─────────────────────────────────────────────────────────

/// Standard-Tiefe der Undo/Redo-History.
pub const HISTORY_DEPTH: usize = 200;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `softbody_rig_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorOptions {
    // ── Properties-Panel ────────────────────────────────────────
    /// Edits im Properties-Panel sofort auf die Selektion zurückschreiben
    /// (sonst erst bei explizitem Commit)
    #[serde(default)]
    pub auto_propagate_edits: bool,

    // ── History ─────────────────────────────────────────────────
    /// Maximale Anzahl Undo-Schritte
    #[serde(default = "default_history_depth")]
    pub history_depth: usize,
    /// Auch reine Selektionsänderungen als Undo-Schritt aufzeichnen
    #[serde(default = "default_record_selection_history")]
    pub record_selection_history: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            auto_propagate_edits: false,
            history_depth: HISTORY_DEPTH,
            record_selection_history: true,
        }
    }
}

/// Serde-Default für `history_depth` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_history_depth() -> usize {
    HISTORY_DEPTH
}

/// Serde-Default für `record_selection_history`.
fn default_record_selection_history() -> bool {
    true
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("softbody_rig_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join(OPTIONS_FILE_NAME)
    }

    /// Korrigiert unzulässige Werte (History-Tiefe mindestens 1).
    pub fn sanitized(mut self) -> Self {
        if self.history_depth == 0 {
            log::warn!("history_depth = 0 ist unzulässig, verwende 1");
            self.history_depth = 1;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let opts: EditorOptions = toml::from_str("auto_propagate_edits = true").expect("gültiges TOML");
        assert!(opts.auto_propagate_edits);
        assert_eq!(opts.history_depth, HISTORY_DEPTH);
        assert!(opts.record_selection_history);
    }

    #[test]
    fn toml_roundtrip_preserves_values() {
        let opts = EditorOptions {
            auto_propagate_edits: true,
            history_depth: 12,
            record_selection_history: false,
        };
        let text = toml::to_string_pretty(&opts).expect("serialisierbar");
        let back: EditorOptions = toml::from_str(&text).expect("lesbar");
        assert_eq!(back, opts);
    }

    #[test]
    fn load_from_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("softbody_rig_editor_missing_options.toml");
        let _ = std::fs::remove_file(&path);
        assert_eq!(EditorOptions::load_from_file(&path), EditorOptions::default());
    }

    #[test]
    fn save_then_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "softbody_rig_editor_options_{}.toml",
            std::process::id()
        ));
        let opts = EditorOptions {
            history_depth: 5,
            ..EditorOptions::default()
        };
        opts.save_to_file(&path).expect("schreibbar");
        assert_eq!(EditorOptions::load_from_file(&path), opts);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn sanitized_clamps_history_depth() {
        let opts = EditorOptions {
            history_depth: 0,
            ..EditorOptions::default()
        }
        .sanitized();
        assert_eq!(opts.history_depth, 1);
    }
}
