//! Property-based tests for the moderation engine
//!
//! Uses proptest to verify properties that should hold for all inputs.

use chanmod::core::services::{Moderator, WarnState};
use proptest::prelude::*;

use super::common::{MemoryRules, moderator_with};

proptest! {
    /// A channel without rules never matches anything
    #[test]
    fn empty_channel_never_matches(text in ".*") {
        let mut moderator = Moderator::load(Box::new(MemoryRules::new())).unwrap();
        prop_assert!(!moderator.rules().matches_any("#test", &text));
        prop_assert!(moderator.on_message("#test", "alice", &text, false).is_empty());
    }

    /// Admins are never sanctioned and never change warned state
    #[test]
    fn admins_are_exempt(text in "[a-z ]{0,20}", repeats in 1usize..5) {
        let mut moderator = moderator_with("#test", &["[a-z]", " "]);
        for _ in 0..repeats {
            prop_assert!(moderator.on_message("#test", "root", &text, true).is_empty());
        }
        prop_assert_eq!(moderator.violations().state("#test", "root"), WarnState::Clean);
    }

    /// Violations alternate kick, ban+kick for as long as they continue
    #[test]
    fn sanctions_alternate(count in 1usize..10) {
        let mut moderator = moderator_with("#test", &["spam"]);
        for n in 0..count {
            let actions = moderator.on_message("#test", "alice", "SPAM", false);
            let expected = if n % 2 == 0 { 1 } else { 2 };
            prop_assert_eq!(actions.len(), expected);
        }
        let expected_state = if count % 2 == 1 { WarnState::Warned } else { WarnState::Clean };
        prop_assert_eq!(moderator.violations().state("#test", "alice"), expected_state);
    }

    /// Matching is case-insensitive for literal words
    #[test]
    fn literal_rules_ignore_case(word in "[a-z]{1,12}") {
        let moderator = moderator_with("#test", &[word.as_str()]);
        let upper = word.to_uppercase();
        prop_assert!(moderator.rules().matches_any("#test", &upper));
    }

    /// Warnings in one channel never leak into another
    #[test]
    fn channels_are_isolated(a in "#[a-z]{1,8}", b in "#[a-z]{1,8}") {
        prop_assume!(a != b);
        let mut moderator = moderator_with(&a, &["spam"]);
        moderator.on_message(&a, "alice", "spam", false);
        prop_assert_eq!(moderator.violations().state(&b, "alice"), WarnState::Clean);
    }
}
