// src/sink/mod.rs

//! Persistence boundary for computed priorities.
//!
//! The engine only ever asks for one capability — "store this priority for
//! this stage" — so it stays ignorant of where and how stage definitions
//! are persisted. The file-backed implementation lives in [`source_file`].

pub mod source_file;

pub use source_file::SourceFileSink;

use crate::errors::Result;

/// Outcome of a single sink update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkOutcome {
    /// The stage's persisted priority field was rewritten.
    Updated,
    /// No definition exists for this stage; nothing was written.
    ///
    /// Non-fatal: the caller logs it and moves on to the next stage.
    NotFound,
}

/// Anything that can persist a computed priority for a stage.
pub trait PrioritySink {
    fn update_priority(&mut self, stage: &str, priority: i64) -> Result<SinkOutcome>;
}
