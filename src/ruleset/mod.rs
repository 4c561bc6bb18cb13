// src/ruleset/mod.rs

//! Declarative constraint input: stage names plus "must follow" pairs.
//!
//! A [`Ruleset`] is the raw, human-maintained input to graph construction.
//! It can come from the builtin pipeline knowledge ([`builtin`]), from a
//! TOML file (see `config`), or be assembled programmatically.

pub mod builtin;

pub use builtin::builtin;

/// Declaration-ordered stage and edge lists.
///
/// `edges` holds `(a, b)` pairs meaning "`a` must run after `b`".
/// Declaration order matters only for diagnostics (which cycle gets
/// reported), never for the computed stage order.
#[derive(Debug, Clone, Default)]
pub struct Ruleset {
    pub stages: Vec<String>,
    pub edges: Vec<(String, String)>,
}

impl Ruleset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a stage name.
    pub fn stage(&mut self, name: impl Into<String>) {
        self.stages.push(name.into());
    }

    /// Declare that `a` must run after `b`.
    pub fn must_follow(&mut self, a: impl Into<String>, b: impl Into<String>) {
        self.edges.push((a.into(), b.into()));
    }
}
