//! Arena-backed node ownership.

use super::node::{Node, NodeId};

/// Owns every node in the tree. Slots of freed nodes are recycled via a
/// free list, so handles are only valid until their node is freed; stale
/// lookups return `None`.
///
/// Only the mutation engine and the delete machine's commit phase may
/// allocate or free nodes.
#[derive(Debug, Default)]
pub struct NodeStore {
    slots: Vec<Option<Node>>,
    free: Vec<NodeId>,
    len: usize,
}

impl NodeStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live nodes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the store holds no live nodes.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Allocate a slot for `node`, reusing a freed slot when available.
    pub fn alloc(&mut self, node: Node) -> NodeId {
        self.len += 1;
        if let Some(id) = self.free.pop() {
            self.slots[id.index()] = Some(node);
            id
        } else {
            let id = NodeId(self.slots.len() as u32);
            self.slots.push(Some(node));
            id
        }
    }

    /// Free the slot behind `id`, returning the node if it was live.
    pub fn free(&mut self, id: NodeId) -> Option<Node> {
        let node = self.slots.get_mut(id.index()).and_then(Option::take);
        if node.is_some() {
            self.len -= 1;
            self.free.push(id);
        }
        node
    }

    /// Look up a live node.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    /// Look up a live node mutably.
    #[inline]
    #[must_use]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.slots.get_mut(id.index()).and_then(Option::as_mut)
    }

    /// Drop all nodes and recycled slots.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.len = 0;
    }
}
