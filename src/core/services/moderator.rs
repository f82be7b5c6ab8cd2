//! Moderator - message evaluation and rule-management commands
//!
//! Ties a [`RuleStore`] and a [`ViolationTracker`] together. Messages are
//! checked in a fixed order: admin exemption first, then the channel's
//! rules, then the escalation state of the sender.

use crate::core::ModerationError;
use crate::core::models::{EnforcementAction, Reply};
use crate::core::ports::{AdminGate, Enforcement, RulePersistence};

use super::format::strip_formatting;
use super::rule_store::RuleStore;
use super::violations::ViolationTracker;

/// Per-channel moderation engine
#[derive(Debug)]
pub struct Moderator {
    rules: RuleStore,
    violations: ViolationTracker,
}

impl Moderator {
    /// Create a moderator over an already loaded rule store
    #[must_use]
    pub fn new(rules: RuleStore) -> Self {
        Self {
            rules,
            violations: ViolationTracker::new(),
        }
    }

    /// Load persisted rules and start with no warned users
    pub fn load(persistence: Box<dyn RulePersistence>) -> Result<Self, ModerationError> {
        Ok(Self::new(RuleStore::load(persistence)?))
    }

    /// The channel rule sets
    #[must_use]
    pub const fn rules(&self) -> &RuleStore {
        &self.rules
    }

    /// The warned-user state
    #[must_use]
    pub const fn violations(&self) -> &ViolationTracker {
        &self.violations
    }

    /// Evaluate a channel message and decide the sanctions
    ///
    /// Admins are exempt before any rule is consulted, so their messages
    /// never touch the warned state. Evaluation is infallible: a message
    /// that cannot be judged yields no actions.
    pub fn on_message(
        &mut self,
        channel: &str,
        user: &str,
        text: &str,
        is_admin: bool,
    ) -> Vec<EnforcementAction> {
        if is_admin {
            return Vec::new();
        }

        if !self.rules.matches_any(channel, text) {
            return Vec::new();
        }

        let decision = self.violations.record_violation(channel, user);
        log::info!("Rule violation by {user} in {channel}: {decision:?}");
        log::debug!("Offending message from {user}: {text}");

        decision.actions(user)
    }

    /// Evaluate a channel message, asking `gate` whether the sender is exempt
    pub fn handle_message(
        &mut self,
        channel: &str,
        user: &str,
        text: &str,
        gate: &dyn AdminGate,
    ) -> Vec<EnforcementAction> {
        let is_admin = gate.is_admin(user);
        self.on_message(channel, user, text, is_admin)
    }

    /// Add a rule and build the acknowledgement
    ///
    /// An invalid pattern yields an error reply instead of a failure.
    pub fn add_rule(&mut self, channel: &str, pattern: &str) -> Reply {
        self.try_add_rule(channel, pattern).unwrap_or_else(|err| invalid_rule(&err))
    }

    /// Add a rule, failing on an invalid pattern
    pub fn try_add_rule(&mut self, channel: &str, pattern: &str) -> Result<Reply, ModerationError> {
        let rule = self.rules.add_rule(channel, &strip_formatting(pattern))?;
        Ok(Reply::private(format!("Added {rule} as a rule.")))
    }

    /// Delete a rule and build the acknowledgement
    pub fn delete_rule(&mut self, channel: &str, pattern: &str) -> Reply {
        self.try_delete_rule(channel, pattern).unwrap_or_else(|err| invalid_rule(&err))
    }

    /// Delete a rule, failing on an invalid pattern
    ///
    /// A pattern with no matching rule is not an error.
    pub fn try_delete_rule(
        &mut self,
        channel: &str,
        pattern: &str,
    ) -> Result<Reply, ModerationError> {
        let pattern = strip_formatting(pattern);
        let reply = if self.rules.remove_rule(channel, &pattern)? {
            Reply::private(format!("Deleted /{pattern}/ from the rules."))
        } else {
            Reply::private("No such rule to delete.")
        };
        Ok(reply)
    }

    /// List a channel's rules
    #[must_use]
    pub fn show_rules(&self, channel: &str) -> Reply {
        let rules: Vec<String> =
            self.rules.list_rules(channel).iter().map(ToString::to_string).collect();
        Reply::public(format!("Current channel rules: {}", rules.join(", ")))
    }

    /// Manually clear a user's warned flag in `channel`
    ///
    /// Returns whether the user was warned.
    pub fn forgive(&mut self, channel: &str, user: &str) -> bool {
        let forgiven = self.violations.clear(channel, user);
        if forgiven {
            log::info!("Cleared warning for {user} in {channel}");
        }
        forgiven
    }
}

fn invalid_rule(err: &ModerationError) -> Reply {
    log::debug!("Rejected rule: {err}");
    Reply::private(format!("Invalid rule: {err}"))
}

/// Apply `actions` for `channel` in order
///
/// Stops at the first action the network rejects.
pub fn dispatch(
    channel: &str,
    actions: &[EnforcementAction],
    enforcement: &mut dyn Enforcement,
) -> anyhow::Result<()> {
    for action in actions {
        match action {
            EnforcementAction::Kick { user, reason } => enforcement.kick(channel, user, reason)?,
            EnforcementAction::Ban { user } => enforcement.ban(channel, user)?,
        }
    }
    Ok(())
}
