//! Host-facing options with TOML preset support.
//!
//! Only non-semantic knobs live here. The animation itself - the 4000 ms
//! cycle, the phase formulas, the palette, the dot count - is fixed by the
//! indicator's contract and deliberately not configurable.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::WhorlError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[pacing]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Options {
    /// Redraw cadence parameters.
    pub pacing: PacingOptions,
}

/// Redraw cadence parameters for hosts that cap their frame rate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PacingOptions {
    /// Target ticks per second for the host's redraw loop. `0` means
    /// uncapped - tick as fast as the host's native frame clock runs.
    pub target_fps: u32,
}

impl Default for PacingOptions {
    fn default() -> Self {
        Self { target_fps: 0 }
    }
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, WhorlError> {
        let content = std::fs::read_to_string(path).map_err(WhorlError::Io)?;
        toml::from_str(&content)
            .map_err(|e| WhorlError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), WhorlError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| WhorlError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(WhorlError::Io)?;
        }
        std::fs::write(path, content).map_err(WhorlError::Io)
    }
}
