//! Command reply model

use serde::Serialize;

/// Acknowledgement for a rule-management command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    /// Reply text
    pub text: String,
    /// Addressed to the invoking user rather than the whole channel
    pub private: bool,
}

impl Reply {
    /// A reply addressed to the invoking user
    #[must_use]
    pub fn private(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            private: true,
        }
    }

    /// A reply to the whole channel
    #[must_use]
    pub fn public(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            private: false,
        }
    }
}

impl std::fmt::Display for Reply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
