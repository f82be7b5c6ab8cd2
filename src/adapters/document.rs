//! On-disk shape of the rule mapping, shared by the file adapters

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::ports::RuleMap;

/// A rules file: channel name to ordered pattern texts
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RulesDocument {
    /// Rules keyed by channel
    #[serde(default)]
    pub channels: RuleMap,
}

impl RulesDocument {
    /// Wrap a mapping, dropping channels without rules
    #[must_use]
    pub fn from_rules(rules: &RuleMap) -> Self {
        Self {
            channels: rules
                .iter()
                .filter(|(_, patterns)| !patterns.is_empty())
                .map(|(channel, patterns)| (channel.clone(), patterns.clone()))
                .collect(),
        }
    }
}

/// Read `path`, or create its directory and return `None` if it is missing
pub fn read_or_prepare(path: &Path) -> anyhow::Result<Option<String>> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        return Ok(Some(content));
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    Ok(None)
}

/// Overwrite `path` with `content`, creating its directory if needed
pub fn write_whole(path: &Path, content: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
}
