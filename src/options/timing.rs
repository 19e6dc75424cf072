//! Pacing and dwell intervals for the frame-paced state machines.

use serde::{Deserialize, Serialize};

/// All timers that gate machine phases, in seconds unless noted.
/// Every suspension in the engine is logical — a machine defers its next
/// phase until one of these intervals elapses; nothing blocks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TimingOptions {
    /// Step-broadcaster label advance interval.
    pub step_pacing: f32,
    /// Minimum dwell between search cursor hops.
    pub search_dwell: f32,
    /// Minimum dwell between traversal phases.
    pub traversal_dwell: f32,
    /// Delete flash color-toggle interval.
    pub flash_interval: f32,
    /// Number of flash toggles before the drop phase starts.
    pub flash_toggles: u32,
    /// Drop phase fall speed, pixels per second.
    pub drop_velocity: f32,
    /// Drop ends once the node's y passes this threshold (below the
    /// visible area).
    pub drop_threshold: f32,
    /// Fade phase linear alpha decay, per second.
    pub fade_rate: f32,
}

impl Default for TimingOptions {
    fn default() -> Self {
        Self {
            step_pacing: 0.5,
            search_dwell: 0.6,
            traversal_dwell: 0.8,
            flash_interval: 0.12,
            flash_toggles: 7,
            drop_velocity: 300.0,
            drop_threshold: 900.0,
            fade_rate: 3.0,
        }
    }
}
