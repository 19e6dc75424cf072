//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation — whether triggered by a key press, a
//! button, or a programmatic call — is represented as an
//! [`EngineCommand`]. Consumers construct commands and pass them to
//! [`BstEngine::execute`](super::BstEngine::execute).

use super::traversal::TraversalKind;

/// A discrete or parameterized operation the engine can perform.
///
/// This is the single, centralized description of what the engine can do
/// interactively. The engine never cares *how* a command was triggered —
/// keyboard, mouse, GUI, or API all look identical:
///
/// ```ignore
/// engine.execute(EngineCommand::Insert);
/// engine.execute(EngineCommand::AdjustValue { delta: 1 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineCommand {
    // ── Working value ───────────────────────────────────────────────
    /// Nudge the working value (arrow keys in a typical host).
    AdjustValue {
        /// Signed amount to add.
        delta: i32,
    },

    /// Replace the working value outright.
    SetValue {
        /// The new working value.
        value: i32,
    },

    // ── Operations ──────────────────────────────────────────────────
    /// Insert the working value. Duplicates are silently ignored.
    Insert,

    /// Animate a search for the working value.
    Search,

    /// Animate deletion of the working value. Absent values abort
    /// immediately with no effect.
    Delete,

    /// Animate a traversal of the whole tree.
    Traverse {
        /// Which visitation order to walk.
        kind: TraversalKind,
    },

    // ── Cancellation ────────────────────────────────────────────────
    /// Abort any in-progress operation: clear the active machine and
    /// highlights, restore node colors and opacity, keep the tree.
    Cancel,

    /// [`Cancel`](Self::Cancel), then clear the tree back to empty.
    Reset,
}
