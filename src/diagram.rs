// src/diagram.rs

//! Graphviz DOT rendering of the stage graph, annotated with the computed
//! priorities. Purely informational: a render failure never invalidates
//! the ordering computation.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::Context;
use petgraph::dot::{Config, Dot};
use petgraph::graph::DiGraph;

use crate::errors::Result;
use crate::graph::Graph;

/// Render the dependency graph as DOT: one node per stage labeled with its
/// computed priority, one arrow per declared edge pointing from dependency
/// to dependent (the direction data flows through the pipe).
pub fn render_dot(graph: &Graph, priorities: &[(String, i64)]) -> String {
    let by_name: HashMap<&str, i64> = priorities
        .iter()
        .map(|(name, p)| (name.as_str(), *p))
        .collect();

    let mut dot_graph: DiGraph<String, &str> = DiGraph::new();
    let mut dot_ids = Vec::with_capacity(graph.len());

    for id in graph.stage_ids() {
        let name = graph.name(id);
        let label = match by_name.get(name) {
            Some(p) => format!("{name} ({p})"),
            None => name.to_string(),
        };
        dot_ids.push(dot_graph.add_node(label));
    }

    for (dependent, dependency) in graph.edges() {
        dot_graph.add_edge(dot_ids[dependency], dot_ids[dependent], "");
    }

    format!("{}", Dot::with_config(&dot_graph, &[Config::EdgeNoLabel]))
}

/// Write the DOT rendering to `path`.
pub fn write_dot(graph: &Graph, priorities: &[(String, i64)], path: &Path) -> Result<()> {
    let dot = render_dot(graph, priorities);
    fs::write(path, dot).with_context(|| format!("writing DOT diagram to {path:?}"))?;
    Ok(())
}
