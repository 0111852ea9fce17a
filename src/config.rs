//! Optional tuning knobs
//!
//! Loaded from a small JSON file next to the binary. Missing or malformed
//! configuration silently falls back to the documented defaults; it is never
//! an error.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// External balance knobs for a run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Enemy collection pre-sizing hint; concurrency itself is governed by
    /// the per-wave cap curve
    pub max_enemies: usize,
    /// Base enemy speed in units/sec before the per-wave ramp
    pub enemy_speed: f32,
    /// Base spawn interval in seconds before the per-wave decay
    pub spawn_interval: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            max_enemies: 20,
            enemy_speed: 90.0,
            spawn_interval: 1.0,
        }
    }
}

impl Tuning {
    /// Load tuning from a JSON file, falling back to defaults on any failure
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_json(&text),
            Err(_) => {
                log::info!("no tuning file at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Parse tuning JSON; unparseable input yields the defaults
    pub fn from_json(text: &str) -> Self {
        match serde_json::from_str(text) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::info!("ignoring malformed tuning ({e}), using defaults");
                Self::default()
            }
        }
    }
}
