//! Moderation services
//!
//! Pure policy logic operating on in-memory state. The only I/O reaches
//! out through the [`RulePersistence`](crate::core::ports::RulePersistence)
//! port held by the rule store.
//!
//! - [`rule_store`] - Per-channel rule sets
//! - [`violations`] - Per-channel warned-user tracking
//! - [`moderator`] - Message evaluation and rule commands
//! - [`format`] - IRC formatting-code stripping

pub mod format;
pub mod moderator;
pub mod rule_store;
pub mod violations;

pub use format::strip_formatting;
pub use moderator::{Moderator, dispatch};
pub use rule_store::RuleStore;
pub use violations::{ViolationTracker, WarnState};
