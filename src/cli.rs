// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `pipeorder`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "pipeorder",
    version,
    about = "Compute a deterministic pipeline stage order and assign priorities.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to a TOML ruleset with [stage.<name>] sections.
    ///
    /// When omitted, the builtin hand-maintained pipeline ruleset is used.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory holding per-stage source definitions
    /// (`<stage>.c` / `<stage>.cc`).
    ///
    /// When given, each definition's `module->priority` field is rewritten
    /// with the computed value. Stages without a definition are skipped.
    #[arg(long, value_name = "DIR")]
    pub stage_dir: Option<PathBuf>,

    /// Write a Graphviz DOT rendering of the annotated graph to this path.
    #[arg(long, value_name = "PATH")]
    pub dot: Option<PathBuf>,

    /// Priority assigned to the first stage in the computed order.
    #[arg(long, value_name = "N", default_value_t = crate::priority::DEFAULT_START_PRIORITY)]
    pub start_priority: i64,

    /// Compute and print the order, but skip all file side effects.
    #[arg(long)]
    pub dry_run: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `PIPEORDER_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
