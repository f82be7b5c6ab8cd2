//! Enforcement port
//!
//! The chat-network side that carries out sanctions and delivers replies.
//! The core only emits intents; implementations perform the I/O.

/// Sink for sanction and reply intents
#[cfg_attr(test, mockall::automock)]
pub trait Enforcement {
    /// Remove `user` from `channel`
    fn kick(&mut self, channel: &str, user: &str, reason: &str) -> anyhow::Result<()>;

    /// Ban `user` from `channel`
    fn ban(&mut self, channel: &str, user: &str) -> anyhow::Result<()>;

    /// Answer `user` in `channel`
    ///
    /// Private replies are addressed to `user`; public ones go to the channel.
    fn reply(&mut self, channel: &str, user: &str, text: &str, private: bool) -> anyhow::Result<()>;
}
