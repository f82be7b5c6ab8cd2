//! Core moderation logic for chanmod
//!
//! This module contains pure policy logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Rule, `SanctionDecision`, `EnforcementAction`, Reply)
//! - `services/` - Rule storage, violation tracking, message evaluation
//! - `ports/` - Trait definitions for persistence, admin lookup and enforcement
//! - `error` - Domain error taxonomy

pub mod error;
pub mod models;
pub mod ports;
pub mod services;

pub use error::ModerationError;
