//! Tree node data: key, structural links, and visual state.

use glam::Vec2;

/// Stable handle to a node slot in the [`NodeStore`](super::NodeStore).
///
/// Handles are plain arena indices. A handle held across a structural
/// delete observes an empty slot rather than dangling — lookups return
/// `None` once the node is freed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Slot index backing this handle.
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Visualization color tag. Purely observational — a renderer maps tags
/// to its own palette; the tag never affects tree semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeColor {
    /// Resting color.
    #[default]
    Base,
    /// Marked by a traversal's visit phase.
    Visited,
    /// Flash accent used while a node is slated for deletion.
    Alert,
}

/// One key in the tree, together with its animated visual state.
///
/// Structural links are exclusive: a node owns its children through the
/// store; there are no parent or sibling references.
#[derive(Debug, Clone)]
pub struct Node {
    /// Integer key. Unique within the tree — duplicate inserts are no-ops.
    pub value: i32,
    /// Left child (all values strictly less than `value`).
    pub left: Option<NodeId>,
    /// Right child (all values strictly greater than `value`).
    pub right: Option<NodeId>,
    /// Current display position.
    pub pos: Vec2,
    /// Target position, assigned only by the layout pass (and by the
    /// delete machine's drop phase, which pins the target to the fall).
    pub target: Vec2,
    /// Display opacity, 1.0 = opaque.
    pub alpha: f32,
    /// Visualization color tag.
    pub color: NodeColor,
}

impl Node {
    /// Leaf node spawned at `spawn`; the next layout pass assigns its
    /// real target.
    #[must_use]
    pub fn new(value: i32, spawn: Vec2) -> Self {
        Self {
            value,
            left: None,
            right: None,
            pos: spawn,
            target: spawn,
            alpha: 1.0,
            color: NodeColor::Base,
        }
    }
}
