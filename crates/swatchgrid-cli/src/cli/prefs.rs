//! Remembered selections - base unit and color mode across invocations.
//!
//! Stored as JSON under the platform config directory. Loading falls back
//! to defaults for a missing or unreadable file; saving is best-effort and
//! never interrupts the UI.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use swatchgrid::DEFAULT_BASE_UNIT;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Prefs {
    /// Last-chosen design-grid base unit in px.
    pub base_unit: f64,
    /// Whether the rotating palette was active.
    pub multicolor: bool,
}

impl Default for Prefs {
    fn default() -> Self {
        Prefs {
            base_unit: DEFAULT_BASE_UNIT,
            multicolor: false,
        }
    }
}

/// Path to the preference file.
pub fn prefs_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join("swatchgrid").join("prefs.json"))
}

/// Load preferences from disk, returning defaults if absent or invalid.
pub fn load_prefs() -> Prefs {
    let path = match prefs_path() {
        Some(p) => p,
        None => return Prefs::default(),
    };
    match std::fs::read_to_string(&path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => Prefs::default(),
    }
}

/// Persist preferences, ignoring any I/O failure.
pub fn save_prefs(prefs: &Prefs) {
    let path = match prefs_path() {
        Some(p) => p,
        None => return,
    };
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    if let Ok(json) = serde_json::to_string_pretty(prefs) {
        let _ = std::fs::write(&path, json);
    }
}
