//! Rule store - per-channel moderation rules
//!
//! Holds an ordered list of [`Rule`]s per channel and writes the whole
//! mapping through a [`RulePersistence`] port after every mutation.
//! In-memory state is authoritative: a failed write is retried once and
//! then logged, never rolled back.
//!
//! Persisted patterns that no longer compile are never matched, but they
//! are kept and written back on every save so the file does not lose them.

use std::collections::BTreeMap;

use crate::core::ModerationError;
use crate::core::models::Rule;
use crate::core::ports::{RuleMap, RulePersistence};

/// Per-channel rule sets backed by a persistence port
pub struct RuleStore {
    channels: BTreeMap<String, Vec<Rule>>,
    uncompiled: RuleMap,
    persistence: Box<dyn RulePersistence>,
}

impl std::fmt::Debug for RuleStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleStore")
            .field("channels", &self.channels)
            .field("uncompiled", &self.uncompiled)
            .finish_non_exhaustive()
    }
}

impl RuleStore {
    /// Load persisted rules
    ///
    /// Patterns that no longer compile are set aside with a warning so one
    /// bad entry cannot prevent startup. They stay in the file.
    pub fn load(persistence: Box<dyn RulePersistence>) -> Result<Self, ModerationError> {
        let persisted = persistence.load().map_err(|e| ModerationError::persistence(&e))?;

        let mut channels = BTreeMap::new();
        let mut uncompiled = RuleMap::new();
        for (channel, patterns) in persisted {
            let mut rules = Vec::new();
            for pattern in patterns {
                match Rule::compile(&pattern) {
                    Ok(rule) => rules.push(rule),
                    Err(err) => {
                        log::warn!("Ignoring persisted rule in {channel}: {err}");
                        uncompiled.entry(channel.clone()).or_default().push(pattern);
                    },
                }
            }

            if !rules.is_empty() {
                channels.insert(channel, rules);
            }
        }

        log::debug!(
            "Loaded {} rules across {} channels",
            channels.values().map(Vec::len).sum::<usize>(),
            channels.len()
        );

        Ok(Self {
            channels,
            uncompiled,
            persistence,
        })
    }

    /// Compile `pattern` and append it to `channel`'s rules
    ///
    /// Identical patterns are not deduplicated.
    pub fn add_rule(&mut self, channel: &str, pattern: &str) -> Result<Rule, ModerationError> {
        let rule = Rule::compile(pattern)?;

        self.channels.entry(channel.to_string()).or_default().push(rule.clone());
        log::info!("Added rule {rule} to {channel}");
        self.persist();

        Ok(rule)
    }

    /// Remove every rule in `channel` whose pattern text equals `pattern`,
    /// ignoring case
    ///
    /// Returns `Ok(false)` when no such rule exists.
    pub fn remove_rule(&mut self, channel: &str, pattern: &str) -> Result<bool, ModerationError> {
        let target = Rule::compile(pattern)?;

        let Some(rules) = self.channels.get_mut(channel) else {
            return Ok(false);
        };

        let before = rules.len();
        rules.retain(|rule| !rule.same_pattern(&target));
        if rules.len() == before {
            return Ok(false);
        }

        if rules.is_empty() {
            self.channels.remove(channel);
        }

        log::info!("Removed rule {target} from {channel}");
        self.persist();

        Ok(true)
    }

    /// Rules for `channel` in insertion order (empty if none)
    #[must_use]
    pub fn list_rules(&self, channel: &str) -> &[Rule] {
        self.channels.get(channel).map(Vec::as_slice).unwrap_or_default()
    }

    /// Whether any rule for `channel` matches `text`
    #[must_use]
    pub fn matches_any(&self, channel: &str, text: &str) -> bool {
        self.list_rules(channel).iter().any(|rule| rule.is_match(text))
    }

    /// The mapping in its persisted shape
    ///
    /// Patterns that failed to compile on load follow the channel's rules.
    #[must_use]
    pub fn snapshot(&self) -> RuleMap {
        let mut snapshot: RuleMap = self
            .channels
            .iter()
            .map(|(channel, rules)| {
                (channel.clone(), rules.iter().map(|r| r.pattern().to_string()).collect())
            })
            .collect();

        for (channel, patterns) in &self.uncompiled {
            snapshot.entry(channel.clone()).or_default().extend(patterns.iter().cloned());
        }
        snapshot
    }

    fn persist(&self) {
        let snapshot = self.snapshot();

        let Err(first) = self.persistence.save(&snapshot) else {
            return;
        };
        log::warn!("Saving rules failed, retrying: {first:#}");

        if let Err(second) = self.persistence.save(&snapshot) {
            log::error!("{}", ModerationError::persistence(&second));
        }
    }
}
