//! Rule model
//!
//! A rule is a case-insensitive pattern over message text. Its identity is
//! the literal pattern text it was compiled from.

use regex::{Regex, RegexBuilder};

use crate::core::ModerationError;

/// A compiled moderation rule
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: String,
    regex: Regex,
}

impl Rule {
    /// Compile `pattern` as a case-insensitive rule
    pub fn compile(pattern: &str) -> Result<Self, ModerationError> {
        if pattern.is_empty() {
            return Err(ModerationError::EmptyPattern);
        }

        let regex = RegexBuilder::new(pattern).case_insensitive(true).build().map_err(|source| {
            ModerationError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            }
        })?;

        Ok(Self {
            pattern: pattern.to_string(),
            regex,
        })
    }

    /// The literal pattern text
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Whether `other` was compiled from the same pattern text, ignoring case
    ///
    /// Rules are case-insensitive, so `spam` and `SPAM` name the same rule.
    #[must_use]
    pub fn same_pattern(&self, other: &Self) -> bool {
        self.pattern.to_lowercase() == other.pattern.to_lowercase()
    }

    /// Whether the rule matches anywhere in `text`
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

impl PartialEq for Rule {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
    }
}

impl Eq for Rule {}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "/{}/", self.pattern)
    }
}
