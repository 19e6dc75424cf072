//! Whole-tree iterative walks.
//!
//! These are the engine-internal walks (interpolation, color reset,
//! snapshot capture), distinct from the user-visible frame-paced
//! traversal machine. The stack is a growth-unbounded `Vec` sized by
//! actual tree depth, so deep degenerate trees walk safely.

use super::node::{Node, NodeColor, NodeId};
use super::Tree;

impl Tree {
    /// Visit every live node reachable from the root, pre-order,
    /// handle first. Handles whose slot has been freed mid-walk are
    /// skipped.
    pub fn for_each_node<F: FnMut(NodeId, &Node)>(&self, mut f: F) {
        let mut stack: Vec<NodeId> = Vec::new();
        if let Some(root) = self.root() {
            stack.push(root);
        }
        while let Some(id) = stack.pop() {
            let Some(node) = self.node(id) else {
                continue;
            };
            if let Some(l) = node.left {
                stack.push(l);
            }
            if let Some(r) = node.right {
                stack.push(r);
            }
            f(id, node);
        }
    }

    /// Mutable variant of [`for_each_node`](Self::for_each_node). The
    /// walk order is re-derived from the live structure every call —
    /// nothing is cached across mutations.
    pub fn for_each_node_mut<F: FnMut(NodeId, &mut Node)>(&mut self, mut f: F) {
        let mut stack: Vec<NodeId> = Vec::new();
        if let Some(root) = self.root() {
            stack.push(root);
        }
        while let Some(id) = stack.pop() {
            let Some(node) = self.node_mut(id) else {
                continue;
            };
            if let Some(l) = node.left {
                stack.push(l);
            }
            if let Some(r) = node.right {
                stack.push(r);
            }
            f(id, node);
        }
    }

    /// Restore every node to the resting color tag.
    pub fn reset_colors(&mut self) {
        self.for_each_node_mut(|_, n| n.color = NodeColor::Base);
    }

    /// Restore every node to full opacity.
    pub fn reset_alpha(&mut self) {
        self.for_each_node_mut(|_, n| n.alpha = 1.0);
    }
}
