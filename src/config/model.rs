// src/config/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::ruleset::Ruleset;

/// Top-level ruleset file as read from TOML.
///
/// ```toml
/// [stage.rawspeed]
///
/// [stage.temperature]
/// after = ["rawspeed"]
///
/// [stage.demosaic]
/// after = ["rawspeed", "temperature"]
/// ```
///
/// Every stage needs its own `[stage.<name>]` section, even when it has no
/// `after` list; `after` entries may only reference declared stages.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    /// All stages from `[stage.<name>]`, keyed by stage name.
    #[serde(default)]
    pub stage: BTreeMap<String, StageConfig>,
}

/// `[stage.<name>]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StageConfig {
    /// Names of the stages this one must run after.
    #[serde(default)]
    pub after: Vec<String>,
}

impl ConfigFile {
    /// Flatten the parsed file into a declaration-ordered ruleset.
    ///
    /// `BTreeMap` iteration gives a stable (name-sorted) declaration order,
    /// so diagnostics like the reported cycle never depend on file layout.
    pub fn to_ruleset(&self) -> Ruleset {
        let mut rules = Ruleset::new();
        for name in self.stage.keys() {
            rules.stage(name.clone());
        }
        for (name, stage) in self.stage.iter() {
            for dep in stage.after.iter() {
                rules.must_follow(name.clone(), dep.clone());
            }
        }
        rules
    }
}
