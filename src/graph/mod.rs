// src/graph/mod.rs

//! Stage dependency graph and its derived artifacts.
//!
//! - [`model`] holds the arena-backed graph of stages and "must follow" edges.
//! - [`cycle`] scans the whole graph for directed cycles before any ordering.
//! - [`sort`] produces the deterministic topological order.

pub mod cycle;
pub mod model;
pub mod sort;

pub use cycle::find_cycle;
pub use model::{Graph, StageId};
pub use sort::sort;
