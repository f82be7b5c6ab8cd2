//! Global configuration management
//!
//! Config is stored at `<config_dir>/chanmod/config.toml`:
//!
//! ```toml
//! server = "irc.libera.chat"
//! admins = ["root"]
//! format = "toml"
//! # data_dir = "/var/lib/chanmod"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::adapters::{RuleFormat, StaticAdminGate};
use crate::paths;

/// Global chanmod configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server name; selects the rule file
    pub server: String,
    /// Nicks exempt from channel rules
    pub admins: Vec<String>,
    /// Root directory for rule files
    pub data_dir: Option<PathBuf>,
    /// Rule file format
    pub format: RuleFormat,
}

fn default_server() -> String {
    "irc.libera.chat".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: default_server(),
            admins: Vec::new(),
            data_dir: None,
            format: RuleFormat::default(),
        }
    }
}

impl Config {
    /// Load config from the default location
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&paths::global_config())
    }

    /// Load config from `path`, or defaults if it does not exist
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Effective data directory
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(paths::default_data_dir)
    }

    /// Rule file for the configured server and format
    #[must_use]
    pub fn rules_file(&self) -> PathBuf {
        paths::rules_file(&self.data_dir(), &self.server, self.format)
    }

    /// Admin gate over the configured admins plus `extra`
    #[must_use]
    pub fn admin_gate(&self, extra: &[String]) -> StaticAdminGate {
        StaticAdminGate::new(self.admins.iter().chain(extra).cloned())
    }
}
