//! Rule persistence port
//!
//! Whole-document load/save of the per-channel rule mapping.

use std::collections::BTreeMap;

/// Channel name to ordered list of pattern texts
pub type RuleMap = BTreeMap<String, Vec<String>>;

/// Durable storage for channel rules
///
/// Both operations are synchronous and act on the whole mapping; there
/// are no partial updates.
pub trait RulePersistence: Send + Sync {
    /// Load the persisted mapping
    ///
    /// Returns an empty mapping if nothing has been persisted yet.
    fn load(&self) -> anyhow::Result<RuleMap>;

    /// Overwrite the persisted mapping
    fn save(&self, rules: &RuleMap) -> anyhow::Result<()>;
}
