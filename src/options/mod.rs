//! Centralized engine options with TOML preset support.
//!
//! All tweakable settings (layout geometry, machine pacing, motion
//! smoothing) are consolidated here. Options serialize to/from TOML so a
//! host can ship speed/layout presets.

mod animation;
mod layout;
mod timing;

use std::path::Path;

pub use animation::AnimationOptions;
pub use layout::LayoutOptions;
use serde::{Deserialize, Serialize};
pub use timing::TimingOptions;

use crate::error::BstvizError;

/// Top-level options container. All sub-structs use `#[serde(default)]`
/// so partial TOML files (e.g. only overriding `[timing]`) work
/// correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Tree placement parameters.
    pub layout: LayoutOptions,
    /// Machine pacing and dwell intervals.
    pub timing: TimingOptions,
    /// Position smoothing parameters.
    pub animation: AnimationOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`BstvizError`] when the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, BstvizError> {
        let content = std::fs::read_to_string(path).map_err(BstvizError::Io)?;
        toml::from_str(&content)
            .map_err(|e| BstvizError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`BstvizError`] when serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<(), BstvizError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| BstvizError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(BstvizError::Io)?;
        }
        std::fs::write(path, content).map_err(BstvizError::Io)
    }
}
