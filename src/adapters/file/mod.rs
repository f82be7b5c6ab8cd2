//! JSON rule file
//!
//! Same document shape as the TOML adapter:
//! `{"channels": {"#rust": ["buy now"]}}`.

use std::path::PathBuf;

use anyhow::Context;

use crate::core::ports::{RuleMap, RulePersistence};

use super::document::{RulesDocument, read_or_prepare, write_whole};

/// Rule persistence backed by a JSON file
#[derive(Debug, Clone)]
pub struct JsonRuleFile {
    path: PathBuf,
}

impl JsonRuleFile {
    /// Create an adapter for the file at `path`
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl RulePersistence for JsonRuleFile {
    fn load(&self) -> anyhow::Result<RuleMap> {
        let Some(content) = read_or_prepare(&self.path)? else {
            return Ok(RuleMap::new());
        };
        let document: RulesDocument = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse {}", self.path.display()))?;
        Ok(document.channels)
    }

    fn save(&self, rules: &RuleMap) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(&RulesDocument::from_rules(rules))?;
        write_whole(&self.path, &content)
    }
}
