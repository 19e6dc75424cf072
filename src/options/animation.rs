//! Per-frame motion smoothing parameters.

use serde::{Deserialize, Serialize};

/// Controls the interpolator that eases display positions toward their
/// layout targets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnimationOptions {
    /// Exponential decay rate toward the target. Higher converges
    /// faster; 5.0 settles visibly within a few hundred milliseconds at
    /// 60 ticks per second.
    pub smoothing_rate: f32,
    /// Once within this distance of the target (pixels), the position
    /// snaps exactly, bounding the otherwise asymptotic approach.
    pub snap_epsilon: f32,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            smoothing_rate: 5.0,
            snap_epsilon: 0.5,
        }
    }
}
