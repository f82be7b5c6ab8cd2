//! Centralized path definitions for chanmod
//!
//! ## Storage Layout
//!
//! ```text
//! <config_dir>/chanmod/
//! └── config.toml                 # Server name, admins, rule format
//!
//! <data_dir>/chanmod/
//! └── irc.libera.chat/            # One directory per server
//!     └── rules.toml              # Channel rules (or rules.json)
//! ```
//!
//! Warned-user state is never written to disk.

use std::path::{Path, PathBuf};

use crate::adapters::RuleFormat;

/// Application directory name under the platform config/data dirs
pub const APP_DIR: &str = "chanmod";

/// Config filename
const CONFIG_FILE: &str = "config.toml";

/// Rule file stem (extension depends on the format)
const RULES_STEM: &str = "rules";

/// Fallback data directory when the platform has none
const LOCAL_DATA_DIR: &str = ".chanmod";

/// Get the global config file path.
///
/// Returns `<config_dir>/chanmod/config.toml`, or `./.chanmod/config.toml`
/// when the platform has no config directory.
#[must_use]
pub fn global_config() -> PathBuf {
    dirs::config_dir()
        .map_or_else(|| PathBuf::from(LOCAL_DATA_DIR), |dir| dir.join(APP_DIR))
        .join(CONFIG_FILE)
}

/// Get the default data directory.
#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(|| PathBuf::from(LOCAL_DATA_DIR), |dir| dir.join(APP_DIR))
}

/// Directory holding one server's state
///
/// Path separators in the server name are replaced so a name can never
/// escape `data_dir`.
#[must_use]
pub fn server_dir(data_dir: &Path, server: &str) -> PathBuf {
    let name: String = server
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    let name = if name.is_empty() || name == "." || name == ".." {
        "default".to_string()
    } else {
        name
    };
    data_dir.join(name)
}

/// Rule file for `server` in `format`
#[must_use]
pub fn rules_file(data_dir: &Path, server: &str, format: RuleFormat) -> PathBuf {
    server_dir(data_dir, server).join(format!("{RULES_STEM}.{}", format.extension()))
}
