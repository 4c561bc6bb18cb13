// src/graph/model.rs

use std::collections::HashMap;

use crate::errors::{PipeorderError, Result};
use crate::ruleset::Ruleset;

/// Index of a stage within the graph arena.
pub type StageId = usize;

/// Internal node structure: stores immediate deps and dependents as indices.
#[derive(Debug, Clone, Default)]
struct StageNode {
    /// Direct dependencies: stages that must run before this one,
    /// in declaration order.
    deps: Vec<StageId>,
    /// Direct dependents: stages that must run after this one,
    /// in declaration order.
    dependents: Vec<StageId>,
}

/// Arena-backed dependency graph over named stages.
///
/// Stage names live in a declaration-ordered arena and adjacency is stored
/// as integer index lists, so traversal order is a pure function of the
/// declared input. The name-to-index map is only ever used for lookups,
/// never iterated, which keeps hash ordering out of every result.
///
/// The graph is built once from a ruleset and not mutated afterwards for
/// the duration of a run.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    names: Vec<String>,
    index: HashMap<String, StageId>,
    nodes: Vec<StageNode>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a declarative ruleset: all stages first, then all
    /// edges, propagating the first construction error encountered.
    pub fn from_ruleset(rules: &Ruleset) -> Result<Self> {
        let mut graph = Self::new();
        for name in &rules.stages {
            graph.add_stage(name)?;
        }
        for (a, b) in &rules.edges {
            graph.add_edge(a, b)?;
        }
        Ok(graph)
    }

    /// Register a stage name. Declaring the same name twice is an input
    /// error in the hand-maintained ruleset, not a no-op.
    pub fn add_stage(&mut self, name: &str) -> Result<StageId> {
        if self.index.contains_key(name) {
            return Err(PipeorderError::DuplicateStage(name.to_string()));
        }
        let id = self.names.len();
        self.names.push(name.to_string());
        self.index.insert(name.to_string(), id);
        self.nodes.push(StageNode::default());
        Ok(id)
    }

    /// Record that `a` must run after `b`. Both endpoints must already be
    /// declared via [`Graph::add_stage`].
    ///
    /// Re-adding an existing edge is a silent no-op: the same constraint may
    /// legitimately be stated from several reasoning sites in the ruleset.
    pub fn add_edge(&mut self, a: &str, b: &str) -> Result<()> {
        let ia = self.lookup(a, a, b)?;
        let ib = self.lookup(b, a, b)?;
        if self.nodes[ia].deps.contains(&ib) {
            return Ok(());
        }
        self.nodes[ia].deps.push(ib);
        self.nodes[ib].dependents.push(ia);
        Ok(())
    }

    fn lookup(&self, name: &str, from: &str, to: &str) -> Result<StageId> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| PipeorderError::UnknownStage {
                from: from.to_string(),
                to: to.to_string(),
                missing: name.to_string(),
            })
    }

    /// Number of declared stages.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Name of the stage at `id`.
    pub fn name(&self, id: StageId) -> &str {
        &self.names[id]
    }

    /// Id of a stage by name, if declared.
    pub fn id_of(&self, name: &str) -> Option<StageId> {
        self.index.get(name).copied()
    }

    /// All stage ids, in declaration order.
    pub fn stage_ids(&self) -> impl Iterator<Item = StageId> {
        0..self.names.len()
    }

    /// All stage names, in declaration order.
    pub fn stages(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|s| s.as_str())
    }

    /// Immediate dependencies of `id`: the stages that must come before it.
    ///
    /// Declaration-ordered; callers that need a meaningful total order must
    /// go through [`crate::graph::sort`].
    pub fn dependencies_of(&self, id: StageId) -> &[StageId] {
        &self.nodes[id].deps
    }

    /// Immediate dependents of `id`: the stages that must come after it.
    pub fn dependents_of(&self, id: StageId) -> &[StageId] {
        &self.nodes[id].dependents
    }

    /// All declared edges as `(dependent, dependency)` id pairs,
    /// in declaration order per node.
    pub fn edges(&self) -> impl Iterator<Item = (StageId, StageId)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .flat_map(|(a, node)| node.deps.iter().map(move |&b| (a, b)))
    }
}
