//! Output formatting for human and JSON modes
//!
//! Rule commands print their reply; the listener prints one record per
//! enforcement action.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::models::{EnforcementAction, Reply};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// A sanction issued by the listener
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ActionRecord<'a> {
    /// When the sanction was decided
    pub at: DateTime<Utc>,
    /// Channel the violation happened in
    pub channel: &'a str,
    /// The action itself
    #[serde(flatten)]
    pub action: &'a EnforcementAction,
}

impl<'a> ActionRecord<'a> {
    /// Stamp `action` with the current time
    #[must_use]
    pub fn now(channel: &'a str, action: &'a EnforcementAction) -> Self {
        Self {
            at: Utc::now(),
            channel,
            action,
        }
    }
}

/// Render a command reply
#[must_use]
pub fn render_reply(reply: &Reply, mode: OutputMode) -> String {
    match mode {
        OutputMode::Human => reply.text.clone(),
        OutputMode::Json => serde_json::json!({
            "reply": reply.text,
            "private": reply.private,
        })
        .to_string(),
    }
}

/// Render an action record as a single JSON line
pub fn render_action(record: &ActionRecord<'_>) -> anyhow::Result<String> {
    Ok(serde_json::to_string(record)?)
}
