//! Explicit-stack resumable traversal engine.
//!
//! One state machine covers the three traversal orders; each kind only
//! differs in how it orders the four frame phases. The explicit stack
//! replaces the call stack of the recursive walk, which is what lets the
//! walk pause between any two phases and resume on a later tick — a
//! native recursive traversal cannot be suspended mid-descent.

use super::{Highlight, MachineStatus};
use crate::options::TimingOptions;
use crate::tree::{NodeColor, NodeId, Tree};

/// Which traversal order to animate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalKind {
    /// Left subtree, node, right subtree.
    InOrder,
    /// Node, left subtree, right subtree.
    PreOrder,
    /// Left subtree, right subtree, node.
    PostOrder,
}

/// What a frame does at one of its four stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TraversalPhase {
    GoLeft,
    Visit,
    GoRight,
    Return,
}

impl TraversalKind {
    /// Phase ordering that reproduces this kind's recursive definition.
    fn phases(self) -> [TraversalPhase; 4] {
        use TraversalPhase::{GoLeft, GoRight, Return, Visit};
        match self {
            Self::InOrder => [GoLeft, Visit, GoRight, Return],
            Self::PreOrder => [Visit, GoLeft, GoRight, Return],
            Self::PostOrder => [GoLeft, GoRight, Visit, Return],
        }
    }

    /// Step labels broadcast while this traversal runs.
    #[must_use]
    pub fn step_labels(self) -> &'static [&'static str] {
        match self {
            Self::InOrder => {
                &["In-order traversal:", "Go Left", "Visit Node", "Go Right"]
            }
            Self::PreOrder => {
                &["Pre-order traversal:", "Visit Node", "Go Left", "Go Right"]
            }
            Self::PostOrder => {
                &["Post-order traversal:", "Go Left", "Go Right", "Visit Node"]
            }
        }
    }
}

/// Resumable substitute for one recursive call frame.
#[derive(Debug, Clone, Copy)]
struct TraversalFrame {
    node: NodeId,
    /// Index into the kind's phase ordering.
    stage: usize,
}

/// Frame-paced walker over the whole tree.
#[derive(Debug)]
pub(crate) struct TraversalMachine {
    kind: TraversalKind,
    stack: Vec<TraversalFrame>,
    dwell: f32,
    visited: Vec<i32>,
}

impl TraversalMachine {
    /// Start a traversal at the root. An empty tree yields an empty
    /// stack, which finishes on the first tick.
    pub(crate) fn new(tree: &Tree, kind: TraversalKind) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = tree.root() {
            stack.push(TraversalFrame {
                node: root,
                stage: 0,
            });
        }
        Self {
            kind,
            stack,
            dwell: 0.0,
            visited: Vec::with_capacity(tree.len()),
        }
    }

    /// Which order this machine walks.
    pub(crate) fn kind(&self) -> TraversalKind {
        self.kind
    }

    /// Values visited so far, in visitation order.
    pub(crate) fn visited(&self) -> &[i32] {
        &self.visited
    }

    /// Consume the machine, keeping the visit log.
    pub(crate) fn into_visited(self) -> Vec<i32> {
        self.visited
    }

    /// Advance the top frame by exactly one phase once the dwell
    /// interval has elapsed.
    pub(crate) fn update(
        &mut self,
        dt: f32,
        tree: &mut Tree,
        highlight: &mut Highlight,
        timing: &TimingOptions,
    ) -> MachineStatus {
        if self.stack.is_empty() {
            highlight.cursor = None;
            highlight.edge = None;
            log::debug!(
                "traversal: {:?} complete, visited {} nodes",
                self.kind,
                self.visited.len()
            );
            return MachineStatus::Finished;
        }

        self.dwell += dt;
        if self.dwell < timing.traversal_dwell {
            return MachineStatus::Running;
        }
        self.dwell = 0.0;

        highlight.edge = None;

        let top = self.stack.len() - 1;
        let frame = self.stack[top];
        let Some((value, left, right)) =
            tree.node(frame.node).map(|n| (n.value, n.left, n.right))
        else {
            let _ = self.stack.pop();
            return MachineStatus::Running;
        };

        match self.kind.phases()[frame.stage] {
            TraversalPhase::GoLeft => {
                highlight.cursor = Some(frame.node);
                self.stack[top].stage += 1;
                if let Some(child) = left {
                    highlight.edge = Some((frame.node, child));
                    self.stack.push(TraversalFrame {
                        node: child,
                        stage: 0,
                    });
                }
            }
            TraversalPhase::GoRight => {
                highlight.cursor = Some(frame.node);
                self.stack[top].stage += 1;
                if let Some(child) = right {
                    highlight.edge = Some((frame.node, child));
                    self.stack.push(TraversalFrame {
                        node: child,
                        stage: 0,
                    });
                }
            }
            TraversalPhase::Visit => {
                highlight.cursor = Some(frame.node);
                if let Some(node) = tree.node_mut(frame.node) {
                    node.color = NodeColor::Visited;
                }
                self.visited.push(value);
                self.stack[top].stage += 1;
            }
            TraversalPhase::Return => {
                let _ = self.stack.pop();
            }
        }
        MachineStatus::Running
    }
}
