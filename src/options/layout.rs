//! Tree placement parameters.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Where nodes sit and spawn, in screen pixels. Coordinates are kept as
/// integers because the per-depth offset halving truncates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LayoutOptions {
    /// Root target x.
    pub root_x: i32,
    /// Root target y.
    pub root_y: i32,
    /// Vertical distance between depth levels.
    pub row_height: i32,
    /// Horizontal child offset at the root; halves per depth level.
    pub initial_offset: i32,
    /// Off-screen y where freshly inserted nodes spawn before the layout
    /// pass pulls them into place.
    pub spawn_y: i32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            root_x: 350,
            root_y: 80,
            row_height: 80,
            initial_offset: 200,
            spawn_y: -100,
        }
    }
}

impl LayoutOptions {
    /// Fixed off-screen spawn point for new nodes.
    #[must_use]
    pub fn spawn_point(&self) -> Vec2 {
        Vec2::new(self.root_x as f32, self.spawn_y as f32)
    }
}
