// src/sink/source_file.rs

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use regex::Regex;
use tracing::debug;

use crate::errors::Result;
use crate::sink::{PrioritySink, SinkOutcome};

/// Extensions probed for a stage definition, in order. Only the first match
/// is rewritten.
const EXTENSIONS: &[&str] = &["c", "cc"];

/// File-backed sink: each stage has a source definition at
/// `<dir>/<stage>.c` (or `.cc`) containing a single
/// `module->priority = ...;` assignment that gets rewritten in place.
/// Everything else in the file is left byte-for-byte untouched.
pub struct SourceFileSink {
    dir: PathBuf,
    field: Regex,
}

impl SourceFileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        // Match the whole assignment line so a stale trailing comment is
        // replaced along with the value.
        let field = Regex::new(r"(?m)^[ \t]*module->priority[ \t]*=[^\n]*")
            .context("compiling priority field regex")?;

        Ok(Self {
            dir: dir.into(),
            field,
        })
    }

    fn definition_path(&self, stage: &str) -> Option<PathBuf> {
        EXTENSIONS
            .iter()
            .map(|ext| self.dir.join(format!("{stage}.{ext}")))
            .find(|path| path.is_file())
    }
}

impl PrioritySink for SourceFileSink {
    fn update_priority(&mut self, stage: &str, priority: i64) -> Result<SinkOutcome> {
        let Some(path) = self.definition_path(stage) else {
            return Ok(SinkOutcome::NotFound);
        };

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("reading stage definition at {path:?}"))?;

        let replacement = format!(
            "  module->priority = {priority}; // stage order computed by pipeorder, do not edit!"
        );
        let rewritten = self.field.replace_all(&contents, replacement.as_str());

        fs::write(&path, rewritten.as_bytes())
            .with_context(|| format!("writing stage definition at {path:?}"))?;

        debug!(stage, priority, path = ?path, "rewrote priority field");
        Ok(SinkOutcome::Updated)
    }
}
