//! Admin gate backed by a fixed list of nicks

use std::collections::HashSet;

use crate::core::ports::AdminGate;

/// Exempts the configured admin nicks
#[derive(Debug, Clone, Default)]
pub struct StaticAdminGate {
    admins: HashSet<String>,
}

impl StaticAdminGate {
    /// Create a gate for `admins`
    pub fn new<I, S>(admins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            admins: admins.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of configured admins
    #[must_use]
    pub fn admin_count(&self) -> usize {
        self.admins.len()
    }
}

impl AdminGate for StaticAdminGate {
    fn is_admin(&self, user: &str) -> bool {
        self.admins.contains(user)
    }
}
