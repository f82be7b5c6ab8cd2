//! Moderation error types

use thiserror::Error;

/// Errors raised by rule management
#[derive(Debug, Error)]
pub enum ModerationError {
    /// User-supplied pattern failed to compile
    #[error("invalid pattern /{pattern}/: {source}")]
    InvalidPattern {
        /// The pattern text as supplied
        pattern: String,
        /// Underlying compile error
        #[source]
        source: regex::Error,
    },

    /// Pattern text was empty after stripping formatting
    #[error("invalid pattern //: pattern is empty")]
    EmptyPattern,

    /// Durable read or write of the rule mapping failed
    #[error("rule persistence failed: {0}")]
    PersistenceFailure(String),
}

impl ModerationError {
    /// Wrap a persistence error, keeping its full cause chain
    #[must_use]
    pub fn persistence(err: &anyhow::Error) -> Self {
        Self::PersistenceFailure(format!("{err:#}"))
    }

    /// Whether this error came from a bad user-supplied pattern
    #[must_use]
    pub const fn is_invalid_pattern(&self) -> bool {
        matches!(self, Self::InvalidPattern { .. } | Self::EmptyPattern)
    }
}
