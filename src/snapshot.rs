//! Per-frame render output.
//!
//! The engine is headless; each frame a renderer captures a
//! [`RenderSnapshot`] and draws it however it likes. The snapshot is a
//! consistent copy — it can never observe a tree mid-mutation, because
//! all structural changes commit atomically inside
//! [`BstEngine::update`](crate::engine::BstEngine::update).

use glam::Vec2;

use crate::engine::BstEngine;
use crate::tree::{NodeColor, NodeId};

/// Which child link an edge represents. Renderers typically color the
/// two sides differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildSide {
    /// Parent-to-left-child edge.
    Left,
    /// Parent-to-right-child edge.
    Right,
}

/// One drawable node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeSprite {
    /// Handle, for matching against [`RenderSnapshot::cursor`].
    pub id: NodeId,
    /// The node's key, for label text.
    pub value: i32,
    /// Current display position.
    pub pos: Vec2,
    /// Layout target (useful for debug overlays).
    pub target: Vec2,
    /// Opacity, 1.0 = opaque.
    pub alpha: f32,
    /// Visualization color tag.
    pub color: NodeColor,
}

/// One drawable parent-to-child edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeSprite {
    /// Parent endpoint (current display position).
    pub from: Vec2,
    /// Child endpoint (current display position).
    pub to: Vec2,
    /// Which child link this is.
    pub side: ChildSide,
    /// Whether the active operation is walking this edge right now.
    pub highlighted: bool,
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, Default)]
pub struct RenderSnapshot {
    /// Every live node.
    pub nodes: Vec<NodeSprite>,
    /// Every structural edge, endpoints resolved to display positions.
    pub edges: Vec<EdgeSprite>,
    /// The active/cursor node, if any.
    pub cursor: Option<NodeId>,
    /// Whether the last search landed on its target.
    pub found: bool,
    /// Step labels of the current (or last) operation.
    pub step_labels: &'static [&'static str],
    /// Index of the current step label; labels up to and including this
    /// index have been reached.
    pub step_cursor: usize,
}

impl RenderSnapshot {
    /// Capture the engine's observable state for this frame.
    #[must_use]
    pub fn capture(engine: &BstEngine) -> Self {
        let tree = engine.tree();
        let highlight = engine.highlight();
        let mut nodes = Vec::with_capacity(tree.len());
        let mut edges = Vec::with_capacity(tree.len().saturating_sub(1));

        tree.for_each_node(|id, node| {
            nodes.push(NodeSprite {
                id,
                value: node.value,
                pos: node.pos,
                target: node.target,
                alpha: node.alpha,
                color: node.color,
            });
            for (child, side) in [
                (node.left, ChildSide::Left),
                (node.right, ChildSide::Right),
            ] {
                let Some(child_id) = child else { continue };
                let Some(child_node) = tree.node(child_id) else {
                    continue;
                };
                edges.push(EdgeSprite {
                    from: node.pos,
                    to: child_node.pos,
                    side,
                    highlighted: highlight.edge == Some((id, child_id)),
                });
            }
        });

        Self {
            nodes,
            edges,
            cursor: highlight.cursor,
            found: highlight.found,
            step_labels: engine.step_labels(),
            step_cursor: engine.step_cursor(),
        }
    }
}
