use std::collections::HashSet;
use std::error::Error;

use pipeorder::graph::{Graph, find_cycle};
use pipeorder::ruleset::Ruleset;

type TestResult = Result<(), Box<dyn Error>>;

fn ruleset(stages: &[&str], edges: &[(&str, &str)]) -> Ruleset {
    let mut rules = Ruleset::new();
    for stage in stages {
        rules.stage(*stage);
    }
    for (a, b) in edges {
        rules.must_follow(*a, *b);
    }
    rules
}

#[test]
fn three_cycle_is_reported_as_closed_walk() -> TestResult {
    let rules = ruleset(&["a", "b", "c"], &[("a", "b"), ("b", "c"), ("c", "a")]);
    let graph = Graph::from_ruleset(&rules)?;

    let cycle = find_cycle(&graph).expect("graph has a cycle");

    // Closed walk: starts and ends on the same stage.
    assert!(cycle.len() >= 2);
    assert_eq!(cycle.first(), cycle.last());

    // Walks through exactly {a, b, c}.
    let distinct: HashSet<&str> = cycle[..cycle.len() - 1].iter().map(|s| s.as_str()).collect();
    assert_eq!(distinct, HashSet::from(["a", "b", "c"]));

    // Every consecutive pair is a declared edge.
    let declared: HashSet<(&str, &str)> = [("a", "b"), ("b", "c"), ("c", "a")].into();
    for pair in cycle.windows(2) {
        assert!(
            declared.contains(&(pair[0].as_str(), pair[1].as_str())),
            "({}, {}) is not a declared edge",
            pair[0],
            pair[1]
        );
    }

    Ok(())
}

#[test]
fn reported_cycle_is_deterministic() -> TestResult {
    // Two overlapping cycles; the report must be reproducible anyway.
    let rules = ruleset(
        &["a", "b", "c", "d"],
        &[("a", "b"), ("b", "a"), ("c", "d"), ("d", "c")],
    );
    let graph = Graph::from_ruleset(&rules)?;

    let first = find_cycle(&graph).expect("cycle expected");
    let second = find_cycle(&graph).expect("cycle expected");
    assert_eq!(first, second);

    // Lexicographically earliest root wins, so the a/b loop is reported.
    assert_eq!(first[0], "a");

    Ok(())
}

#[test]
fn self_loop_is_a_cycle() -> TestResult {
    let rules = ruleset(&["solo"], &[("solo", "solo")]);
    let graph = Graph::from_ruleset(&rules)?;

    let cycle = find_cycle(&graph).expect("self-loop is a cycle");
    assert_eq!(cycle, vec!["solo", "solo"]);

    Ok(())
}

#[test]
fn dag_has_no_cycle() -> TestResult {
    let rules = ruleset(
        &["a", "b", "c", "d"],
        &[("b", "a"), ("c", "a"), ("d", "b"), ("d", "c")],
    );
    let graph = Graph::from_ruleset(&rules)?;

    assert!(find_cycle(&graph).is_none());
    Ok(())
}

#[test]
fn diamond_is_not_mistaken_for_a_cycle() -> TestResult {
    // Two paths into the same stage share a node without forming a loop.
    let rules = ruleset(
        &["top", "left", "right", "bottom"],
        &[
            ("bottom", "left"),
            ("bottom", "right"),
            ("left", "top"),
            ("right", "top"),
        ],
    );
    let graph = Graph::from_ruleset(&rules)?;

    assert!(find_cycle(&graph).is_none());
    Ok(())
}
