// src/errors.rs

//! Crate-wide error types.
//!
//! Graph construction and cycle errors are fatal: the ruleset has to be
//! fixed by hand, so there is nothing sensible to continue with. A missing
//! stage definition at the sink is *not* an error (see `sink`); it is
//! logged and skipped.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipeorderError {
    #[error("stage '{0}' declared twice")]
    DuplicateStage(String),

    #[error("edge ('{from}', '{to}') references undeclared stage '{missing}'")]
    UnknownStage {
        from: String,
        to: String,
        missing: String,
    },

    /// Carries the offending cycle as a closed walk of stage names.
    #[error("cycle detected in stage graph: {}", .0.join(" -> "))]
    CycleDetected(Vec<String>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, PipeorderError>;
