// src/graph/cycle.rs

//! Cycle detection over the stage graph.
//!
//! Three-color depth-first search: every stage starts unvisited, is marked
//! in-progress while on the DFS stack and done once fully explored. Meeting
//! an in-progress stage again means a back-edge; the offending cycle is
//! read straight off the active stack. Roots are visited in lexicographic
//! name order and out-edges in declaration order, so the same ruleset
//! always reports the same cycle even when several exist.
//!
//! This scan runs before any ordering is attempted: a cyclic graph has no
//! valid total order, so the run aborts with the concrete cycle instead of
//! producing partial output.

use crate::graph::model::{Graph, StageId};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Color {
    Unvisited,
    InProgress,
    Done,
}

/// Search the whole graph for a directed cycle.
///
/// Returns one concrete cycle as a closed walk `[s0, s1, ..., sk, s0]`
/// where every consecutive pair is a declared "must follow" edge, or
/// `None` if the graph is a DAG.
pub fn find_cycle(graph: &Graph) -> Option<Vec<String>> {
    let mut color = vec![Color::Unvisited; graph.len()];

    let mut roots: Vec<StageId> = graph.stage_ids().collect();
    roots.sort_by(|&a, &b| graph.name(a).cmp(graph.name(b)));

    for root in roots {
        if color[root] == Color::Unvisited {
            let mut stack = Vec::new();
            if let Some(cycle) = visit(graph, root, &mut color, &mut stack) {
                return Some(cycle);
            }
        }
    }

    None
}

fn visit(
    graph: &Graph,
    node: StageId,
    color: &mut [Color],
    stack: &mut Vec<StageId>,
) -> Option<Vec<String>> {
    color[node] = Color::InProgress;
    stack.push(node);

    for &dep in graph.dependencies_of(node) {
        match color[dep] {
            Color::InProgress => {
                // Back-edge: the cycle is the stack suffix starting at the
                // repeated stage, closed by repeating it at the end.
                let start = stack.iter().position(|&n| n == dep).unwrap_or(0);
                let mut cycle: Vec<String> = stack[start..]
                    .iter()
                    .map(|&n| graph.name(n).to_string())
                    .collect();
                cycle.push(graph.name(dep).to_string());
                return Some(cycle);
            }
            Color::Unvisited => {
                if let Some(cycle) = visit(graph, dep, color, stack) {
                    return Some(cycle);
                }
            }
            Color::Done => {}
        }
    }

    stack.pop();
    color[node] = Color::Done;
    None
}
