// src/lib.rs

pub mod cli;
pub mod config;
pub mod diagram;
pub mod errors;
pub mod graph;
pub mod logging;
pub mod priority;
pub mod ruleset;
pub mod sink;

use tracing::{debug, info, warn};

use crate::cli::CliArgs;
use crate::errors::{PipeorderError, Result};
use crate::graph::Graph;
use crate::ruleset::Ruleset;
use crate::sink::{PrioritySink, SinkOutcome, SourceFileSink};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - ruleset input (TOML file or builtin)
/// - graph construction and the cycle gate
/// - topological sort + priority assignment
/// - report output, stage definition rewriting, DOT rendering
pub fn run(args: CliArgs) -> Result<()> {
    let rules = load_ruleset(&args)?;
    let graph = Graph::from_ruleset(&rules)?;

    // The cycle scan runs to completion before any ordering is attempted;
    // a cyclic ruleset produces no order or priorities at all.
    if let Some(cycle) = graph::find_cycle(&graph) {
        return Err(PipeorderError::CycleDetected(cycle));
    }

    let order = graph::sort(&graph)?;
    let priorities = priority::assign(&order, args.start_priority);

    print_report(&priorities);

    if args.dry_run {
        debug!("dry-run complete (no files touched)");
        return Ok(());
    }

    if let Some(ref dir) = args.stage_dir {
        let mut sink = SourceFileSink::new(dir)?;
        apply_priorities(&mut sink, &priorities)?;
    }

    if let Some(ref path) = args.dot {
        // Rendering is informational; a failure here must not taint the
        // computed order.
        match diagram::write_dot(&graph, &priorities, path) {
            Ok(()) => info!(path = ?path, "wrote DOT diagram"),
            Err(err) => warn!(error = %err, "failed to render DOT diagram"),
        }
    }

    Ok(())
}

fn load_ruleset(args: &CliArgs) -> Result<Ruleset> {
    match args.config {
        Some(ref path) => {
            let cfg = config::load_and_validate(path)?;
            Ok(cfg.to_ruleset())
        }
        None => Ok(ruleset::builtin()),
    }
}

/// The externally visible report: one `<priority> <stage>` line per stage
/// on stdout, highest priority first.
fn print_report(priorities: &[(String, i64)]) {
    for (name, priority) in priorities {
        println!("{priority} {name}");
    }
}

/// Push every computed priority into the sink, sequentially and in order.
/// A stage without a persisted definition is logged and skipped; it never
/// fails the run or affects the exit status.
fn apply_priorities(sink: &mut dyn PrioritySink, priorities: &[(String, i64)]) -> Result<()> {
    for (name, priority) in priorities {
        match sink.update_priority(name, *priority)? {
            SinkOutcome::Updated => {
                debug!(stage = %name, priority, "stage definition updated");
            }
            SinkOutcome::NotFound => {
                warn!(stage = %name, "no stage definition found; skipping");
            }
        }
    }
    Ok(())
}
