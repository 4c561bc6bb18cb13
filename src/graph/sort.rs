// src/graph/sort.rs

//! Deterministic topological ordering of a cycle-free stage graph.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::errors::{PipeorderError, Result};
use crate::graph::model::{Graph, StageId};

/// Produce the total stage order.
///
/// Kahn's algorithm with an explicit tie-break: whenever several stages are
/// simultaneously eligible (every dependency already placed), the one with
/// the lexicographically smallest name is placed first. The tie-break is
/// what makes the output reproducible: it is independent of declaration
/// order and of any hashing inside the graph's storage, so the same
/// stages and edges always yield byte-identical output.
///
/// Postcondition: for every declared edge `(a, b)` the returned order
/// places `b` strictly before `a`, and every stage appears exactly once.
///
/// Expects a graph already verified cycle-free via
/// [`crate::graph::find_cycle`]; if a cycle slipped past the caller the
/// unplaced stages surface as a `CycleDetected` error rather than a
/// truncated order.
pub fn sort(graph: &Graph) -> Result<Vec<String>> {
    let mut pending_deps: Vec<usize> = graph
        .stage_ids()
        .map(|id| graph.dependencies_of(id).len())
        .collect();

    // Min-heap keyed on name, so `pop` always yields the smallest
    // eligible stage.
    let mut eligible: BinaryHeap<Reverse<(&str, StageId)>> = graph
        .stage_ids()
        .filter(|&id| pending_deps[id] == 0)
        .map(|id| Reverse((graph.name(id), id)))
        .collect();

    let mut order = Vec::with_capacity(graph.len());

    while let Some(Reverse((_, id))) = eligible.pop() {
        order.push(graph.name(id).to_string());

        for &dependent in graph.dependents_of(id) {
            pending_deps[dependent] -= 1;
            if pending_deps[dependent] == 0 {
                eligible.push(Reverse((graph.name(dependent), dependent)));
            }
        }
    }

    if order.len() != graph.len() {
        let leftover: Vec<String> = graph
            .stage_ids()
            .filter(|&id| pending_deps[id] > 0)
            .map(|id| graph.name(id).to_string())
            .collect();
        return Err(PipeorderError::CycleDetected(leftover));
    }

    Ok(order)
}
