//! Domain models for chanmod
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Rule`] - A compiled case-insensitive pattern
//! - [`SanctionDecision`] - Outcome of the escalation state machine
//! - [`EnforcementAction`] - A sanction intent for the chat network
//! - [`Reply`] - Acknowledgement text for a rule-management command

mod action;
mod reply;
mod rule;

pub use action::{
    EnforcementAction, FIRST_VIOLATION_REASON, SECOND_VIOLATION_REASON, SanctionDecision,
};
pub use reply::Reply;
pub use rule::Rule;
