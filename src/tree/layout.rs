//! Deterministic target placement from tree shape.

use glam::Vec2;

use super::node::NodeId;
use super::Tree;
use crate::options::LayoutOptions;

impl Tree {
    /// Assign every node's target coordinate from the current shape.
    ///
    /// Root sits at the configured start; each left child is placed at
    /// `parent.x - offset`, each right child at `parent.x + offset`, one
    /// row down, with the offset halving per depth level. Halving is
    /// integer-truncating, so sufficiently deep or unbalanced trees can
    /// produce overlapping targets — a resolution limit, not a failure.
    ///
    /// Shape-only and position-independent: identical shapes always get
    /// identical targets. Must be re-run after every structural commit.
    pub fn assign_targets(&mut self, layout: &LayoutOptions) {
        let mut stack: Vec<(NodeId, i32, i32, i32)> = Vec::new();
        if let Some(root) = self.root() {
            stack.push((root, layout.root_x, layout.root_y, layout.initial_offset));
        }
        while let Some((id, x, y, offset)) = stack.pop() {
            let Some(node) = self.node_mut(id) else {
                continue;
            };
            node.target = Vec2::new(x as f32, y as f32);
            let child_y = y + layout.row_height;
            if let Some(l) = node.left {
                stack.push((l, x - offset, child_y, offset / 2));
            }
            if let Some(r) = node.right {
                stack.push((r, x + offset, child_y, offset / 2));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laid_out(values: &[i32]) -> Tree {
        let opts = LayoutOptions::default();
        let mut tree = Tree::new();
        for &v in values {
            let _ = tree.insert(v, opts.spawn_point());
        }
        tree.assign_targets(&opts);
        tree
    }

    fn target_of(tree: &Tree, value: i32) -> Vec2 {
        tree.node(tree.find(value).unwrap()).unwrap().target
    }

    #[test]
    fn root_gets_start_coordinate() {
        let tree = laid_out(&[50]);
        assert_eq!(target_of(&tree, 50), Vec2::new(350.0, 80.0));
    }

    #[test]
    fn children_offset_and_row_height() {
        let tree = laid_out(&[50, 30, 70, 20, 40]);
        assert_eq!(target_of(&tree, 30), Vec2::new(150.0, 160.0));
        assert_eq!(target_of(&tree, 70), Vec2::new(550.0, 160.0));
        // Grandchildren use the halved offset.
        assert_eq!(target_of(&tree, 20), Vec2::new(50.0, 240.0));
        assert_eq!(target_of(&tree, 40), Vec2::new(250.0, 240.0));
    }

    #[test]
    fn layout_is_shape_only() {
        // Same shape from different insertion histories.
        let a = laid_out(&[50, 30, 70, 20, 40]);
        let mut b = {
            let opts = LayoutOptions::default();
            let mut tree = Tree::new();
            for v in [50, 70, 30, 40, 20, 60, 10] {
                let _ = tree.insert(v, opts.spawn_point());
            }
            // Remove the extras so shapes match exactly.
            let _ = tree.delete(60);
            let _ = tree.delete(10);
            tree.assign_targets(&opts);
            tree
        };
        b.assign_targets(&LayoutOptions::default());
        for v in [50, 30, 70, 20, 40] {
            assert_eq!(target_of(&a, v), target_of(&b, v));
        }
    }

    #[test]
    fn offset_halving_truncates() {
        let opts = LayoutOptions {
            initial_offset: 5,
            ..LayoutOptions::default()
        };
        let mut tree = Tree::new();
        for v in [50, 30, 20, 10] {
            let _ = tree.insert(v, opts.spawn_point());
        }
        tree.assign_targets(&opts);
        // 5 -> 2 -> 1: 350-5=345, 345-2=343, 343-1=342
        assert_eq!(target_of(&tree, 30).x, 345.0);
        assert_eq!(target_of(&tree, 20).x, 343.0);
        assert_eq!(target_of(&tree, 10).x, 342.0);
    }

    #[test]
    fn relayout_after_delete_moves_survivors() {
        let opts = LayoutOptions::default();
        let mut tree = Tree::new();
        for v in [50, 30, 20] {
            let _ = tree.insert(v, opts.spawn_point());
        }
        tree.assign_targets(&opts);
        assert_eq!(target_of(&tree, 20), Vec2::new(50.0, 240.0));
        let _ = tree.delete(30);
        tree.assign_targets(&opts);
        // 20 is now the root's direct left child.
        assert_eq!(target_of(&tree, 20), Vec2::new(150.0, 160.0));
    }
}
