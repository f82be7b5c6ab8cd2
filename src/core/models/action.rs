//! Sanction models
//!
//! The escalation state machine yields a [`SanctionDecision`]; the engine
//! turns that into the ordered [`EnforcementAction`]s the network applies.

use serde::Serialize;

/// Kick reason used on a first offense
pub const FIRST_VIOLATION_REASON: &str = "First rule violation.";

/// Kick reason used on a second offense
pub const SECOND_VIOLATION_REASON: &str = "Second rule violation.";

/// Outcome of recording a violation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SanctionDecision {
    /// First offense: user is now warned
    Warn,
    /// Second offense: warned flag cleared, user is banned
    BanAndKick,
}

impl SanctionDecision {
    /// The enforcement actions for this decision, in application order
    #[must_use]
    pub fn actions(self, user: &str) -> Vec<EnforcementAction> {
        match self {
            Self::Warn => vec![EnforcementAction::kick(user, FIRST_VIOLATION_REASON)],
            Self::BanAndKick => vec![
                EnforcementAction::Ban {
                    user: user.to_string(),
                },
                EnforcementAction::kick(user, SECOND_VIOLATION_REASON),
            ],
        }
    }
}

/// A sanction intent emitted for the chat network
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum EnforcementAction {
    /// Remove the user from the channel
    Kick {
        /// Target nick
        user: String,
        /// Reason shown to the channel
        reason: String,
    },
    /// Ban the user from the channel
    Ban {
        /// Target nick
        user: String,
    },
}

impl EnforcementAction {
    /// Build a kick action
    #[must_use]
    pub fn kick(user: &str, reason: &str) -> Self {
        Self::Kick {
            user: user.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl std::fmt::Display for EnforcementAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Kick { user, reason } => write!(f, "kick {user} ({reason})"),
            Self::Ban { user } => write!(f, "ban {user}"),
        }
    }
}
