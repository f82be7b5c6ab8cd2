//! Violation tracker - per-channel warned-user state
//!
//! Each (channel, user) pair is a two-state machine: `Clean` until the
//! first violation, `Warned` until the second, then `Clean` again. State
//! is kept in memory only and resets when the process restarts.

use std::collections::{HashMap, HashSet};

use crate::core::models::SanctionDecision;

/// Escalation state of a user within one channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WarnState {
    /// No unresolved violation
    #[default]
    Clean,
    /// One prior unresolved violation; the next one escalates
    Warned,
}

/// Warned users, keyed by channel
#[derive(Debug, Default)]
pub struct ViolationTracker {
    warned: HashMap<String, HashSet<String>>,
}

impl ViolationTracker {
    /// Create an empty tracker
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `user` is currently warned in `channel`
    #[must_use]
    pub fn is_warned(&self, channel: &str, user: &str) -> bool {
        self.warned.get(channel).is_some_and(|users| users.contains(user))
    }

    /// Current state of `user` in `channel`
    #[must_use]
    pub fn state(&self, channel: &str, user: &str) -> WarnState {
        if self.is_warned(channel, user) {
            WarnState::Warned
        } else {
            WarnState::Clean
        }
    }

    /// Record a violation and decide the sanction
    ///
    /// A clean user becomes warned. A warned user is cleared before the
    /// `BanAndKick` decision is returned, so nobody stays warned after a ban.
    pub fn record_violation(&mut self, channel: &str, user: &str) -> SanctionDecision {
        if self.clear(channel, user) {
            SanctionDecision::BanAndKick
        } else {
            self.warned.entry(channel.to_string()).or_default().insert(user.to_string());
            SanctionDecision::Warn
        }
    }

    /// Remove any warned flag for `user` in `channel`
    ///
    /// Returns whether the user was warned.
    pub fn clear(&mut self, channel: &str, user: &str) -> bool {
        let Some(users) = self.warned.get_mut(channel) else {
            return false;
        };
        let removed = users.remove(user);
        if users.is_empty() {
            self.warned.remove(channel);
        }
        removed
    }

    /// Number of users warned in `channel`
    #[must_use]
    pub fn warned_count(&self, channel: &str) -> usize {
        self.warned.get(channel).map_or(0, HashSet::len)
    }
}
