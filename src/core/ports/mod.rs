//! Port traits (interfaces) for external collaborators
//!
//! These traits define the boundaries between the moderation core and
//! the outside world (rule files, admin lists, the chat network).
//!
//! Implementations live in the `adapters` module.

mod admin_gate;
mod enforcement;
mod rule_persistence;

pub use admin_gate::AdminGate;
#[cfg(test)]
pub use admin_gate::MockAdminGate;
pub use enforcement::Enforcement;
#[cfg(test)]
pub use enforcement::MockEnforcement;
pub use rule_persistence::{RuleMap, RulePersistence};
