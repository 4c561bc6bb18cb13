// src/config/validate.rs

use anyhow::{Result, anyhow};

use crate::config::model::ConfigFile;

/// Run basic semantic validation against a loaded ruleset file.
///
/// This checks:
/// - there is at least one stage
/// - no stage lists itself in `after`
/// - all `after` references point at declared stages
///
/// It does **not** check for cycles; the graph engine owns that and
/// produces a concrete cycle walk for diagnostics.
pub fn validate_config(cfg: &ConfigFile) -> Result<()> {
    ensure_has_stages(cfg)?;
    validate_after_references(cfg)?;
    Ok(())
}

fn ensure_has_stages(cfg: &ConfigFile) -> Result<()> {
    if cfg.stage.is_empty() {
        return Err(anyhow!(
            "ruleset must contain at least one [stage.<name>] section"
        ));
    }
    Ok(())
}

fn validate_after_references(cfg: &ConfigFile) -> Result<()> {
    for (name, stage) in cfg.stage.iter() {
        for dep in stage.after.iter() {
            if dep == name {
                return Err(anyhow!("stage '{}' cannot list itself in `after`", name));
            }
            if !cfg.stage.contains_key(dep) {
                return Err(anyhow!(
                    "stage '{}' has unknown dependency '{}' in `after`",
                    name,
                    dep
                ));
            }
        }
    }
    Ok(())
}
