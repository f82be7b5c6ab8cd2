//! TOML rule file
//!
//! ```toml
//! # chanmod rules
//!
//! [channels]
//! "#rust" = ["buy now", "free \\w+ coins"]
//! ```

use std::path::PathBuf;

use anyhow::Context;

use crate::core::ports::{RuleMap, RulePersistence};

use super::document::{RulesDocument, read_or_prepare, write_whole};

const HEADER: &str = "# chanmod rules\n\n";

/// Rule persistence backed by a TOML file
#[derive(Debug, Clone)]
pub struct TomlRuleFile {
    path: PathBuf,
}

impl TomlRuleFile {
    /// Create an adapter for the file at `path`
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

/// Render a mapping as a TOML rules document
pub fn format_rules_file(rules: &RuleMap) -> anyhow::Result<String> {
    let body = toml::to_string_pretty(&RulesDocument::from_rules(rules))?;
    Ok(format!("{HEADER}{body}"))
}

impl RulePersistence for TomlRuleFile {
    fn load(&self) -> anyhow::Result<RuleMap> {
        let Some(content) = read_or_prepare(&self.path)? else {
            return Ok(RuleMap::new());
        };
        let document: RulesDocument = toml::from_str(&content)
            .with_context(|| format!("failed to parse {}", self.path.display()))?;
        Ok(document.channels)
    }

    fn save(&self, rules: &RuleMap) -> anyhow::Result<()> {
        write_whole(&self.path, &format_rules_file(rules)?)
    }
}
