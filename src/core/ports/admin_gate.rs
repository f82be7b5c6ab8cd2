//! Admin gate port

/// Tells the moderator whether a user is exempt from channel rules
#[cfg_attr(test, mockall::automock)]
pub trait AdminGate: Send + Sync {
    /// Whether `user` is an administrator
    fn is_admin(&self, user: &str) -> bool;
}
