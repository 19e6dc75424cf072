// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Pixel/float conversions are intentional throughout
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::float_cmp)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::module_name_repetitions)]

//! Animated binary search tree visualization engine.
//!
//! Bstviz couples exact BST mutation algorithms (insert, delete) with
//! resumable, frame-paced state machines for search, visual deletion, and
//! the three classic traversal orders, plus a deterministic layout pass and
//! per-frame position smoothing that keep the visual tree consistent with
//! the logical tree across time.
//!
//! # Key entry points
//!
//! - [`engine::BstEngine`] - the main engine; one instance per visualizer
//! - [`engine::EngineCommand`] - the engine's interactive vocabulary
//! - [`snapshot::RenderSnapshot`] - per-frame output for a renderer
//! - [`options::Options`] - runtime configuration (layout, timing, motion)
//!
//! # Architecture
//!
//! The engine is headless and single-threaded: a windowing/rendering host
//! forwards discrete [`engine::EngineCommand`]s, calls
//! [`update`](engine::BstEngine::update) once per frame with the elapsed
//! frame time, and draws whatever [`snapshot`](engine::BstEngine::snapshot)
//! reports. Exactly one operation state machine is active at a time; the
//! position interpolator runs unconditionally every frame regardless of
//! which (if any) machine is active.

pub mod animation;
pub mod engine;
pub mod error;
pub mod options;
pub mod snapshot;
pub mod steps;
pub mod tree;
pub mod util;

pub use engine::{BstEngine, EngineCommand, Mode, TraversalKind};
pub use error::BstvizError;
pub use snapshot::RenderSnapshot;
