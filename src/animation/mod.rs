//! Per-frame position smoothing toward layout targets.
//!
//! Runs unconditionally every frame over every live node, independent of
//! whichever operation machine (if any) is active. The walk is re-derived
//! from the live tree each frame over a growth-unbounded stack, so it
//! tolerates nodes deleted since the previous frame and never overflows
//! on deep degenerate trees.

pub mod interpolation;

use crate::options::AnimationOptions;
use crate::tree::Tree;

/// Advance every node's display position toward its target by one frame.
pub fn advance_nodes(tree: &mut Tree, opts: &AnimationOptions, dt: f32) {
    let rate = opts.smoothing_rate;
    let epsilon = opts.snap_epsilon;
    tree.for_each_node_mut(|_, node| {
        node.pos = interpolation::approach(node.pos, node.target, rate, dt, epsilon);
    });
}
