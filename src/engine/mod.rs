//! The animated BST engine: command execution, the single active
//! state-machine slot, and the per-frame update loop.

mod accessors;
mod command;
mod delete;
mod search;
mod traversal;

pub use command::EngineCommand;
pub use traversal::TraversalKind;

use self::delete::{DeleteMachine, DELETE_STEPS};
use self::search::{SearchMachine, SEARCH_STEPS};
use self::traversal::TraversalMachine;
use crate::animation;
use crate::options::Options;
use crate::steps::StepTracker;
use crate::tree::{NodeId, Tree};

/// Step labels broadcast while an insert settles.
pub(crate) const INSERT_STEPS: &[&str] = &[
    "Start at root",
    "Compare values",
    "Move left / right",
    "Insert at leaf",
    "Recalculate layout",
];

/// Whether a machine wants more ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MachineStatus {
    /// More phases remain.
    Running,
    /// The machine is done; the engine returns to idle.
    Finished,
}

/// Operation-scoped highlight state for the renderer.
///
/// Cleared whenever an operation starts or is cancelled; left in place
/// when a machine finishes so a host can keep showing the result (e.g.
/// the found node) until the next command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Highlight {
    /// The active/cursor node, if any.
    pub cursor: Option<NodeId>,
    /// Directed parent-to-child edge being walked, if any.
    pub edge: Option<(NodeId, NodeId)>,
    /// Raised when a search lands on its target.
    pub found: bool,
}

/// Public observable operation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// No operation active.
    #[default]
    Idle,
    /// An insert's step labels are still playing out.
    Inserting,
    /// A search machine is descending.
    Searching,
    /// A delete machine is mid-phase.
    Deleting,
    /// A traversal machine is walking.
    Traversing(TraversalKind),
}

/// The single active-machine slot. At most one operation owns the
/// engine at a time, which rules out concurrent-mutation races by
/// construction.
enum ActiveOp {
    Inserting,
    Searching(SearchMachine),
    Deleting(DeleteMachine),
    Traversing(TraversalMachine),
}

/// The animated BST engine.
///
/// # Frame loop
///
/// Each frame, forward any host input via [`execute`](Self::execute),
/// call [`update`](Self::update) with the elapsed frame time, then read
/// [`snapshot`](Self::snapshot) (or the fine-grained accessors) to draw.
/// The renderer always observes a consistent, not-mid-mutation tree:
/// all structural changes commit atomically inside `update`.
pub struct BstEngine {
    tree: Tree,
    options: Options,
    value: i32,
    op: Option<ActiveOp>,
    steps: StepTracker,
    highlight: Highlight,
    visit_log: Vec<i32>,
}

impl BstEngine {
    /// Engine with default options and an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    /// Engine with the given options.
    #[must_use]
    pub fn with_options(options: Options) -> Self {
        Self {
            tree: Tree::new(),
            options,
            value: 10,
            op: None,
            steps: StepTracker::new(),
            highlight: Highlight::default(),
            visit_log: Vec::new(),
        }
    }

    /// Execute one command.
    ///
    /// Value adjustment, [`EngineCommand::Cancel`], and
    /// [`EngineCommand::Reset`] are always honored. Operation commands
    /// are ignored while another operation is active — one high-level
    /// mode at a time.
    pub fn execute(&mut self, command: EngineCommand) {
        match command {
            EngineCommand::AdjustValue { delta } => {
                self.value = self.value.saturating_add(delta);
            }
            EngineCommand::SetValue { value } => self.value = value,
            EngineCommand::Cancel => self.cancel(),
            EngineCommand::Reset => self.reset(),
            EngineCommand::Insert
            | EngineCommand::Search
            | EngineCommand::Delete
            | EngineCommand::Traverse { .. } => {
                if self.op.is_some() {
                    log::debug!("ignoring {command:?}: operation in progress");
                    return;
                }
                self.start(command);
            }
        }
    }

    fn start(&mut self, command: EngineCommand) {
        let pacing = self.options.timing.step_pacing;
        self.highlight = Highlight::default();
        match command {
            EngineCommand::Insert => {
                let inserted = self
                    .tree
                    .insert(self.value, self.options.layout.spawn_point());
                self.tree.assign_targets(&self.options.layout);
                self.steps.bind(INSERT_STEPS, pacing);
                self.op = Some(ActiveOp::Inserting);
                log::info!(
                    "insert {} ({})",
                    self.value,
                    if inserted { "new" } else { "duplicate, ignored" }
                );
            }
            EngineCommand::Search => {
                self.steps.bind(SEARCH_STEPS, pacing);
                self.op = Some(ActiveOp::Searching(SearchMachine::new(
                    &self.tree, self.value,
                )));
                log::info!("search {}", self.value);
            }
            EngineCommand::Delete => {
                self.steps.bind(DELETE_STEPS, pacing);
                match DeleteMachine::locate(&self.tree, self.value) {
                    Some(machine) => {
                        self.op = Some(ActiveOp::Deleting(machine));
                        log::info!("delete {}", self.value);
                    }
                    None => {
                        log::info!("delete {}: absent, no-op", self.value);
                    }
                }
            }
            EngineCommand::Traverse { kind } => {
                self.tree.reset_colors();
                self.visit_log.clear();
                self.steps.bind(kind.step_labels(), pacing);
                self.op = Some(ActiveOp::Traversing(TraversalMachine::new(
                    &self.tree, kind,
                )));
                log::info!("traverse {kind:?}");
            }
            _ => {}
        }
    }

    /// Abort any in-progress machine and restore visual baselines,
    /// keeping the tree.
    fn cancel(&mut self) {
        if self.op.is_some() {
            log::info!("cancelled active operation");
        }
        self.op = None;
        self.steps.clear();
        self.highlight = Highlight::default();
        self.tree.reset_colors();
        self.tree.reset_alpha();
        // A cancelled drop leaves its target pinned below the screen;
        // relayout snaps every target back to the tree shape.
        self.tree.assign_targets(&self.options.layout);
    }

    /// [`cancel`](Self::cancel), then clear the tree to empty.
    fn reset(&mut self) {
        self.cancel();
        self.tree.clear();
        self.visit_log.clear();
        log::info!("reset to empty tree");
    }

    /// Advance the engine by one frame of `dt` seconds.
    ///
    /// The position interpolator and the step broadcaster run
    /// unconditionally; the active machine (if any) advances once its
    /// own pacing allows.
    pub fn update(&mut self, dt: f32) {
        animation::advance_nodes(&mut self.tree, &self.options.animation, dt);
        self.steps.update(dt);

        let finished = match &mut self.op {
            None => false,
            Some(ActiveOp::Inserting) => self.steps.is_complete(),
            Some(ActiveOp::Searching(machine)) => {
                machine.update(
                    dt,
                    &self.tree,
                    &mut self.highlight,
                    &self.options.timing,
                ) == MachineStatus::Finished
            }
            Some(ActiveOp::Deleting(machine)) => {
                machine.update(
                    dt,
                    &mut self.tree,
                    &self.options.layout,
                    &self.options.timing,
                ) == MachineStatus::Finished
            }
            Some(ActiveOp::Traversing(machine)) => {
                machine.update(
                    dt,
                    &mut self.tree,
                    &mut self.highlight,
                    &self.options.timing,
                ) == MachineStatus::Finished
            }
        };

        if finished {
            if let Some(ActiveOp::Traversing(machine)) = self.op.take() {
                self.visit_log = machine.into_visited();
            }
        }
    }
}

impl Default for BstEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::NodeColor;

    const DT_60HZ: f32 = 1.0 / 60.0;

    /// Tick the engine for `seconds` of 60Hz frames.
    fn tick(engine: &mut BstEngine, seconds: f32) {
        let frames = (seconds * 60.0).ceil() as u32;
        for _ in 0..frames {
            engine.update(DT_60HZ);
        }
    }

    fn engine_with(values: &[i32]) -> BstEngine {
        let mut engine = BstEngine::new();
        for &v in values {
            engine.execute(EngineCommand::SetValue { value: v });
            engine.execute(EngineCommand::Insert);
            tick(&mut engine, 3.0);
        }
        assert!(engine.is_idle());
        engine
    }

    #[test]
    fn insert_returns_to_idle_when_steps_finish() {
        let mut engine = BstEngine::new();
        engine.execute(EngineCommand::SetValue { value: 50 });
        engine.execute(EngineCommand::Insert);
        assert_eq!(engine.mode(), Mode::Inserting);
        // 5 labels at 0.5s pacing -> complete within 3 seconds.
        tick(&mut engine, 3.0);
        assert_eq!(engine.mode(), Mode::Idle);
        assert_eq!(engine.node_count(), 1);
    }

    #[test]
    fn value_adjustment_commands() {
        let mut engine = BstEngine::new();
        assert_eq!(engine.value(), 10);
        engine.execute(EngineCommand::AdjustValue { delta: 5 });
        engine.execute(EngineCommand::AdjustValue { delta: -2 });
        assert_eq!(engine.value(), 13);
        engine.execute(EngineCommand::SetValue { value: 42 });
        assert_eq!(engine.value(), 42);
    }

    #[test]
    fn operation_commands_ignored_while_busy() {
        let mut engine = engine_with(&[50, 30, 70]);
        engine.execute(EngineCommand::Traverse {
            kind: TraversalKind::InOrder,
        });
        assert_eq!(engine.mode(), Mode::Traversing(TraversalKind::InOrder));

        engine.execute(EngineCommand::SetValue { value: 99 });
        engine.execute(EngineCommand::Insert);
        assert_eq!(engine.node_count(), 3, "insert must be ignored mid-op");
        engine.execute(EngineCommand::Search);
        assert_eq!(engine.mode(), Mode::Traversing(TraversalKind::InOrder));
    }

    #[test]
    fn search_end_to_end_sets_found() {
        let mut engine = engine_with(&[50, 30, 70]);
        engine.execute(EngineCommand::SetValue { value: 70 });
        engine.execute(EngineCommand::Search);
        assert_eq!(engine.mode(), Mode::Searching);
        tick(&mut engine, 5.0);
        assert_eq!(engine.mode(), Mode::Idle);
        assert!(engine.highlight().found);
        let cursor = engine.highlight().cursor.unwrap();
        assert_eq!(engine.tree().node(cursor).map(|n| n.value), Some(70));
    }

    #[test]
    fn search_absent_value_ends_not_found() {
        let mut engine = engine_with(&[50, 30, 70]);
        engine.execute(EngineCommand::SetValue { value: 99 });
        engine.execute(EngineCommand::Search);
        tick(&mut engine, 5.0);
        assert_eq!(engine.mode(), Mode::Idle);
        assert!(!engine.highlight().found);
    }

    #[test]
    fn delete_end_to_end_removes_node() {
        let mut engine = engine_with(&[50, 30, 70, 20, 40]);
        engine.execute(EngineCommand::SetValue { value: 30 });
        engine.execute(EngineCommand::Delete);
        assert_eq!(engine.mode(), Mode::Deleting);
        // Flash (~0.84s) + drop (to y=900 at 300px/s) + fade + commit.
        tick(&mut engine, 10.0);
        assert_eq!(engine.mode(), Mode::Idle);
        assert_eq!(engine.node_count(), 4);
        assert_eq!(engine.tree().values_in_order(), vec![20, 40, 50, 70]);
        assert!(engine.tree().is_valid_bst());
    }

    #[test]
    fn delete_absent_value_stays_idle() {
        let mut engine = engine_with(&[50]);
        engine.execute(EngineCommand::SetValue { value: 99 });
        engine.execute(EngineCommand::Delete);
        assert_eq!(engine.mode(), Mode::Idle);
        assert_eq!(engine.node_count(), 1);
    }

    #[test]
    fn delete_on_empty_tree_stays_idle() {
        let mut engine = BstEngine::new();
        engine.execute(EngineCommand::Delete);
        assert_eq!(engine.mode(), Mode::Idle);
        assert_eq!(engine.node_count(), 0);
    }

    #[test]
    fn traversal_end_to_end_keeps_visit_log() {
        let mut engine = engine_with(&[50, 30, 70, 20, 40]);
        engine.execute(EngineCommand::Traverse {
            kind: TraversalKind::InOrder,
        });
        // 5 nodes * 4 phases * 0.8s dwell, plus the completion tick.
        tick(&mut engine, 20.0);
        assert_eq!(engine.mode(), Mode::Idle);
        assert_eq!(engine.visit_order(), &[20, 30, 40, 50, 70]);
    }

    #[test]
    fn cancel_mid_delete_restores_baseline() {
        let mut engine = engine_with(&[50, 30]);
        engine.execute(EngineCommand::SetValue { value: 30 });
        engine.execute(EngineCommand::Delete);
        // Run into the drop phase, then abort.
        tick(&mut engine, 2.0);
        engine.execute(EngineCommand::Cancel);

        assert_eq!(engine.mode(), Mode::Idle);
        assert_eq!(engine.node_count(), 2, "cancel keeps the tree");
        engine.tree().for_each_node(|_, n| {
            assert_eq!(n.color, NodeColor::Base);
            assert_eq!(n.alpha, 1.0);
        });
        // Targets snapped back; the node glides home over later frames.
        tick(&mut engine, 3.0);
        engine.tree().for_each_node(|_, n| assert_eq!(n.pos, n.target));
    }

    #[test]
    fn reset_clears_everything() {
        let mut engine = engine_with(&[50, 30, 70]);
        engine.execute(EngineCommand::Traverse {
            kind: TraversalKind::PreOrder,
        });
        tick(&mut engine, 1.0);
        engine.execute(EngineCommand::Reset);

        assert_eq!(engine.mode(), Mode::Idle);
        assert_eq!(engine.node_count(), 0);
        assert!(engine.tree().is_empty());
        assert!(engine.step_labels().is_empty());
        assert!(engine.visit_order().is_empty());
        assert_eq!(*engine.highlight(), Highlight::default());
    }

    #[test]
    fn duplicate_insert_is_ignored() {
        let mut engine = engine_with(&[50]);
        engine.execute(EngineCommand::SetValue { value: 50 });
        engine.execute(EngineCommand::Insert);
        tick(&mut engine, 3.0);
        assert_eq!(engine.node_count(), 1);
    }

    #[test]
    fn interpolator_runs_while_idle() {
        let mut engine = BstEngine::new();
        engine.execute(EngineCommand::SetValue { value: 50 });
        engine.execute(EngineCommand::Insert);
        tick(&mut engine, 5.0);
        assert!(engine.is_idle());
        let root = engine.tree().root().unwrap();
        let node = engine.tree().node(root).unwrap();
        assert_eq!(node.pos, node.target, "node should have settled");
    }
}
