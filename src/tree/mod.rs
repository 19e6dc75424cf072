//! Logical tree: arena-backed node ownership plus the exact BST mutation
//! algorithms (insert, delete) that the animated machines commit through.
//!
//! The mutation engine is deliberately instantaneous and total — the
//! frame-paced visual phases live in [`crate::engine`]; by the time a
//! structural change lands here it is a plain, atomic tree rewrite.

mod layout;
mod node;
mod store;
mod walk;

use glam::Vec2;
pub use node::{Node, NodeColor, NodeId};
pub use store::NodeStore;

/// A binary search tree: single optional root over a [`NodeStore`].
///
/// Ordering invariant: for every node, all values in the left subtree are
/// strictly less than the node's value, and all values in the right
/// subtree strictly greater. Duplicate inserts are silent no-ops, so the
/// invariant never needs a tie-break.
#[derive(Debug, Default)]
pub struct Tree {
    store: NodeStore,
    root: Option<NodeId>,
}

impl Tree {
    /// Empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Root handle, if the tree is non-empty.
    #[inline]
    #[must_use]
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Number of live nodes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether the tree holds no nodes.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Look up a node by handle.
    #[inline]
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.store.get(id)
    }

    /// Look up a node by handle, mutably.
    #[inline]
    #[must_use]
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.store.get_mut(id)
    }

    /// Insert `value`, spawning the new node at `spawn` (off-screen; the
    /// next layout pass assigns its real target). Returns `false` when the
    /// value is already present — duplicates are ignored, not replaced.
    pub fn insert(&mut self, value: i32, spawn: Vec2) -> bool {
        let Some(mut cur) = self.root else {
            self.root = Some(self.store.alloc(Node::new(value, spawn)));
            return true;
        };
        loop {
            let Some((node_value, left, right)) =
                self.store.get(cur).map(|n| (n.value, n.left, n.right))
            else {
                return false;
            };
            if value < node_value {
                match left {
                    Some(l) => cur = l,
                    None => {
                        let id = self.store.alloc(Node::new(value, spawn));
                        if let Some(n) = self.store.get_mut(cur) {
                            n.left = Some(id);
                        }
                        return true;
                    }
                }
            } else if value > node_value {
                match right {
                    Some(r) => cur = r,
                    None => {
                        let id = self.store.alloc(Node::new(value, spawn));
                        if let Some(n) = self.store.get_mut(cur) {
                            n.right = Some(id);
                        }
                        return true;
                    }
                }
            } else {
                return false;
            }
        }
    }

    /// Standard BST descent. `None` when the value is absent.
    #[must_use]
    pub fn find(&self, value: i32) -> Option<NodeId> {
        let mut cur = self.root;
        while let Some(id) = cur {
            let node = self.store.get(id)?;
            if value == node.value {
                return Some(id);
            }
            cur = if value < node.value { node.left } else { node.right };
        }
        None
    }

    /// Minimum-valued node of the subtree rooted at `id` (the in-order
    /// successor when `id` is a deleted node's right child).
    #[must_use]
    pub fn subtree_min(&self, id: NodeId) -> NodeId {
        let mut cur = id;
        while let Some(l) = self.store.get(cur).and_then(|n| n.left) {
            cur = l;
        }
        cur
    }

    /// Remove `value` from the tree. Returns `false` (tree untouched) when
    /// the value is absent.
    ///
    /// Structural cases:
    /// - leaf: the parent link becomes absent;
    /// - one child: that child takes the node's place;
    /// - two children: the node's value is overwritten with its in-order
    ///   successor's (minimum of the right subtree), then the successor's
    ///   original node is deleted by value from the right subtree. The
    ///   copy-then-delete ordering avoids any transient duplicate key;
    ///   successor-from-right-subtree is the fixed convention here.
    pub fn delete(&mut self, value: i32) -> bool {
        let (new_root, removed) = self.remove_value(self.root, value);
        self.root = new_root;
        removed
    }

    fn remove_value(
        &mut self,
        link: Option<NodeId>,
        value: i32,
    ) -> (Option<NodeId>, bool) {
        let Some(id) = link else {
            return (None, false);
        };
        let Some((node_value, left, right)) =
            self.store.get(id).map(|n| (n.value, n.left, n.right))
        else {
            return (None, false);
        };

        if value < node_value {
            let (new_left, removed) = self.remove_value(left, value);
            if let Some(n) = self.store.get_mut(id) {
                n.left = new_left;
            }
            (Some(id), removed)
        } else if value > node_value {
            let (new_right, removed) = self.remove_value(right, value);
            if let Some(n) = self.store.get_mut(id) {
                n.right = new_right;
            }
            (Some(id), removed)
        } else {
            match (left, right) {
                (None, None) => {
                    let _ = self.store.free(id);
                    (None, true)
                }
                (None, Some(child)) | (Some(child), None) => {
                    let _ = self.store.free(id);
                    (Some(child), true)
                }
                (Some(_), Some(r)) => {
                    let succ = self.subtree_min(r);
                    let succ_value =
                        self.store.get(succ).map_or(node_value, |n| n.value);
                    if let Some(n) = self.store.get_mut(id) {
                        n.value = succ_value;
                    }
                    let (new_right, _) = self.remove_value(Some(r), succ_value);
                    if let Some(n) = self.store.get_mut(id) {
                        n.right = new_right;
                    }
                    (Some(id), true)
                }
            }
        }
    }

    /// Drop every node, returning the tree to its empty baseline.
    pub fn clear(&mut self) {
        self.store.clear();
        self.root = None;
    }

    /// All values in ascending order (classic iterative in-order walk).
    #[must_use]
    pub fn values_in_order(&self) -> Vec<i32> {
        let mut out = Vec::with_capacity(self.len());
        let mut stack: Vec<NodeId> = Vec::new();
        let mut cur = self.root;
        while cur.is_some() || !stack.is_empty() {
            while let Some(id) = cur {
                stack.push(id);
                cur = self.store.get(id).and_then(|n| n.left);
            }
            if let Some(id) = stack.pop() {
                if let Some(n) = self.store.get(id) {
                    out.push(n.value);
                    cur = n.right;
                }
            }
        }
        out
    }

    /// Whether the ordering invariant holds for the whole tree.
    #[must_use]
    pub fn is_valid_bst(&self) -> bool {
        self.values_in_order().windows(2).all(|w| w[0] < w[1])
    }
}
