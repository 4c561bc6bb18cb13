// src/config/mod.rs

//! Ruleset loading and validation for pipeorder.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a ruleset file from disk (`loader.rs`).
//! - Validate basic invariants before graph construction (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path};
pub use model::{ConfigFile, StageConfig};
pub use validate::validate_config;
