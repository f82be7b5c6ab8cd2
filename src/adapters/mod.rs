//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `toml/` - TOML rule file
//! - `file/` - JSON rule file
//! - `admins` - Admin gate over a configured nick list
//! - `irc` - Enforcement sink writing raw IRC lines

pub mod admins;
pub mod document;
pub mod file;
pub mod irc;
pub mod toml;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::ports::RulePersistence;

pub use admins::StaticAdminGate;
pub use file::JsonRuleFile;
pub use irc::IrcLineEnforcer;
pub use self::toml::TomlRuleFile;

/// Rule file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleFormat {
    /// TOML document (default)
    #[default]
    Toml,
    /// JSON document
    Json,
}

impl RuleFormat {
    /// File extension for this format
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Toml => "toml",
            Self::Json => "json",
        }
    }

    /// Open a rule file at `path` in this format
    #[must_use]
    pub fn open(self, path: &Path) -> Box<dyn RulePersistence> {
        match self {
            Self::Toml => Box::new(TomlRuleFile::new(path.to_path_buf())),
            Self::Json => Box::new(JsonRuleFile::new(path.to_path_buf())),
        }
    }
}

impl std::str::FromStr for RuleFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown rule format: {s}. Use 'toml' or 'json'")),
        }
    }
}

impl std::fmt::Display for RuleFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}
