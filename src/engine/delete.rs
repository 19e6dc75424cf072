//! Multi-phase visual deletion.
//!
//! The visual removal (flash, drop, fade) completes before the logical
//! structure changes, so no frame ever renders a node that has already
//! lost its tree linkage.

use super::MachineStatus;
use crate::options::{LayoutOptions, TimingOptions};
use crate::tree::{NodeColor, NodeId, Tree};

/// Step labels broadcast while a delete runs.
pub(crate) const DELETE_STEPS: &[&str] = &[
    "Find node",
    "Flash target node",
    "Drop node",
    "Fade node",
    "Delete & restructure",
];

/// Phase of the visual deletion, strictly ordered.
#[derive(Debug)]
enum DeletePhase {
    /// Toggle the target's highlight color on a fixed interval.
    Flash { timer: f32, toggles: u32 },
    /// Constant-velocity fall past the visible area.
    Drop,
    /// Linear opacity decay to zero.
    Fade,
    /// Structural delete plus relayout.
    Commit,
}

/// Drives one value's removal through flash, drop, fade, and the final
/// structural commit.
#[derive(Debug)]
pub(crate) struct DeleteMachine {
    value: i32,
    node: NodeId,
    phase: DeletePhase,
}

impl DeleteMachine {
    /// Locate phase: descend by comparison to the target node. `None`
    /// (no-op delete, machine never starts) when the value is absent.
    pub(crate) fn locate(tree: &Tree, value: i32) -> Option<Self> {
        let node = tree.find(value)?;
        Some(Self {
            value,
            node,
            phase: DeletePhase::Flash {
                timer: 0.0,
                toggles: 0,
            },
        })
    }

    /// Advance the current phase by one frame.
    pub(crate) fn update(
        &mut self,
        dt: f32,
        tree: &mut Tree,
        layout: &LayoutOptions,
        timing: &TimingOptions,
    ) -> MachineStatus {
        match &mut self.phase {
            DeletePhase::Flash { timer, toggles } => {
                let Some(node) = tree.node_mut(self.node) else {
                    return MachineStatus::Finished;
                };
                *timer += dt;
                if *timer > timing.flash_interval {
                    *timer = 0.0;
                    *toggles += 1;
                    node.color = if *toggles % 2 == 1 {
                        NodeColor::Alert
                    } else {
                        NodeColor::Base
                    };
                }
                if *toggles >= timing.flash_toggles {
                    self.phase = DeletePhase::Drop;
                }
                MachineStatus::Running
            }
            DeletePhase::Drop => {
                let Some(node) = tree.node_mut(self.node) else {
                    return MachineStatus::Finished;
                };
                node.pos.y += timing.drop_velocity * dt;
                // Pin the target to the fall so the interpolator does
                // not pull the node back toward its layout slot.
                node.target = node.pos;
                if node.pos.y > timing.drop_threshold {
                    self.phase = DeletePhase::Fade;
                }
                MachineStatus::Running
            }
            DeletePhase::Fade => {
                let Some(node) = tree.node_mut(self.node) else {
                    return MachineStatus::Finished;
                };
                node.alpha -= timing.fade_rate * dt;
                if node.alpha <= 0.0 {
                    node.alpha = 0.0;
                    self.phase = DeletePhase::Commit;
                }
                MachineStatus::Running
            }
            DeletePhase::Commit => {
                let removed = tree.delete(self.value);
                tree.assign_targets(layout);
                log::debug!(
                    "delete: committed {} (removed={removed})",
                    self.value
                );
                MachineStatus::Finished
            }
        }
    }
}
