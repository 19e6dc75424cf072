//! Read-only query methods for [`BstEngine`].

use super::{ActiveOp, BstEngine, Highlight, Mode};
use crate::options::Options;
use crate::snapshot::RenderSnapshot;
use crate::tree::Tree;

// ── State ──

impl BstEngine {
    /// The working value the next insert/search/delete operates on.
    #[inline]
    #[must_use]
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Current operation mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        match &self.op {
            None => Mode::Idle,
            Some(ActiveOp::Inserting) => Mode::Inserting,
            Some(ActiveOp::Searching(_)) => Mode::Searching,
            Some(ActiveOp::Deleting(_)) => Mode::Deleting,
            Some(ActiveOp::Traversing(m)) => Mode::Traversing(m.kind()),
        }
    }

    /// Whether no operation is active.
    #[inline]
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.op.is_none()
    }

    /// The logical tree.
    #[inline]
    #[must_use]
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Number of live nodes.
    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.tree.len()
    }

    /// Operation-scoped highlight state.
    #[inline]
    #[must_use]
    pub fn highlight(&self) -> &Highlight {
        &self.highlight
    }
}

// ── Step panel ──

impl BstEngine {
    /// Step labels for the current (or last) operation.
    #[inline]
    #[must_use]
    pub fn step_labels(&self) -> &'static [&'static str] {
        self.steps.labels()
    }

    /// Index of the current step label.
    #[inline]
    #[must_use]
    pub fn step_cursor(&self) -> usize {
        self.steps.cursor()
    }

    /// Visitation order of the running traversal, or of the most
    /// recently completed one.
    #[must_use]
    pub fn visit_order(&self) -> &[i32] {
        match &self.op {
            Some(ActiveOp::Traversing(m)) => m.visited(),
            _ => &self.visit_log,
        }
    }
}

// ── Options ──

impl BstEngine {
    /// Current options.
    #[inline]
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Mutable options. Layout changes take effect on the next
    /// structural commit or cancel; timing changes apply immediately.
    #[inline]
    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }
}

// ── Render output ──

impl BstEngine {
    /// Capture the per-frame output consumed by a renderer.
    #[must_use]
    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot::capture(self)
    }
}
