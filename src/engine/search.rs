//! Resumable value lookup with per-frame pacing.

use super::{Highlight, MachineStatus};
use crate::options::TimingOptions;
use crate::tree::Tree;

/// Step labels broadcast while a search runs.
pub(crate) const SEARCH_STEPS: &[&str] = &[
    "Start at root",
    "Compare target",
    "Move left or right",
    "Repeat until found or NULL",
];

/// One BST descent, advanced one comparison per dwell interval.
///
/// Lifecycle: `Active` from start; an absent cursor finishes as
/// not-found, an equal comparison finishes as found (raising the
/// highlight's `found` flag), otherwise the cursor hops to a child and
/// the machine stays active.
#[derive(Debug)]
pub(crate) struct SearchMachine {
    target: i32,
    cursor: Option<crate::tree::NodeId>,
    dwell: f32,
}

impl SearchMachine {
    /// Start a search at the root.
    pub(crate) fn new(tree: &Tree, target: i32) -> Self {
        Self {
            target,
            cursor: tree.root(),
            dwell: 0.0,
        }
    }

    /// Advance by at most one comparison.
    pub(crate) fn update(
        &mut self,
        dt: f32,
        tree: &Tree,
        highlight: &mut Highlight,
        timing: &TimingOptions,
    ) -> MachineStatus {
        highlight.cursor = self.cursor;

        let Some(cursor) = self.cursor else {
            log::debug!("search: {} not found", self.target);
            highlight.edge = None;
            return MachineStatus::Finished;
        };

        self.dwell += dt;
        if self.dwell < timing.search_dwell {
            return MachineStatus::Running;
        }
        self.dwell = 0.0;

        let Some(node) = tree.node(cursor) else {
            return MachineStatus::Finished;
        };

        if self.target == node.value {
            log::debug!("search: found {}", self.target);
            highlight.found = true;
            highlight.edge = None;
            return MachineStatus::Finished;
        }

        let next = if self.target < node.value {
            node.left
        } else {
            node.right
        };
        highlight.edge = next.map(|child| (cursor, child));
        self.cursor = next;
        highlight.cursor = self.cursor;
        MachineStatus::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::LayoutOptions;

    const DT_60HZ: f32 = 1.0 / 60.0;

    fn tree_of(values: &[i32]) -> Tree {
        let layout = LayoutOptions::default();
        let mut tree = Tree::new();
        for &v in values {
            let _ = tree.insert(v, layout.spawn_point());
        }
        tree
    }

    fn run_to_completion(
        tree: &Tree,
        target: i32,
    ) -> (Highlight, u32) {
        let timing = TimingOptions::default();
        let mut machine = SearchMachine::new(tree, target);
        let mut highlight = Highlight::default();
        let mut ticks = 0u32;
        loop {
            ticks += 1;
            assert!(ticks < 10_000, "search did not terminate");
            if machine.update(DT_60HZ, tree, &mut highlight, &timing)
                == MachineStatus::Finished
            {
                return (highlight, ticks);
            }
        }
    }

    #[test]
    fn finds_every_inserted_value() {
        let tree = tree_of(&[50, 30, 70, 20, 40, 60, 80]);
        for v in [50, 30, 70, 20, 40, 60, 80] {
            let (highlight, _) = run_to_completion(&tree, v);
            assert!(highlight.found, "expected to find {v}");
            let cursor = highlight.cursor.and_then(|id| tree.node(id));
            assert_eq!(cursor.map(|n| n.value), Some(v));
        }
    }

    #[test]
    fn absent_value_finishes_not_found() {
        let tree = tree_of(&[50, 30, 70]);
        let (highlight, _) = run_to_completion(&tree, 99);
        assert!(!highlight.found);
        assert!(highlight.cursor.is_none());
    }

    #[test]
    fn empty_tree_finishes_immediately() {
        let tree = Tree::new();
        let (highlight, ticks) = run_to_completion(&tree, 5);
        assert!(!highlight.found);
        assert_eq!(ticks, 1);
    }

    #[test]
    fn dwell_gates_each_hop() {
        let tree = tree_of(&[50, 30]);
        let timing = TimingOptions::default();
        let mut machine = SearchMachine::new(&tree, 30);
        let mut highlight = Highlight::default();

        // 0.6s dwell at 60Hz = 36 frames before the first comparison.
        for _ in 0..35 {
            let status =
                machine.update(DT_60HZ, &tree, &mut highlight, &timing);
            assert_eq!(status, MachineStatus::Running);
            let cursor = highlight.cursor.and_then(|id| tree.node(id));
            assert_eq!(cursor.map(|n| n.value), Some(50));
        }
    }

    #[test]
    fn edge_highlight_tracks_descent() {
        let tree = tree_of(&[50, 30]);
        let timing = TimingOptions::default();
        let mut machine = SearchMachine::new(&tree, 30);
        let mut highlight = Highlight::default();

        // Tick past the first dwell: cursor hops 50 -> 30.
        for _ in 0..37 {
            let _ = machine.update(DT_60HZ, &tree, &mut highlight, &timing);
        }
        let (from, to) = highlight.edge.expect("edge should be highlighted");
        assert_eq!(tree.node(from).map(|n| n.value), Some(50));
        assert_eq!(tree.node(to).map(|n| n.value), Some(30));
    }
}
