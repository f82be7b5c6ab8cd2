//! Enforcement sink that writes raw IRC protocol lines
//!
//! Bans use a nick-only mask (`nick!*@*`) since the core only knows nicks.

use std::io::Write;

use crate::core::ports::Enforcement;

/// Writes `KICK`, `MODE +b` and `PRIVMSG` lines to `W`
#[derive(Debug)]
pub struct IrcLineEnforcer<W: Write> {
    out: W,
}

impl<W: Write> IrcLineEnforcer<W> {
    /// Wrap a writer
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Recover the writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, line: &str) -> anyhow::Result<()> {
        writeln!(self.out, "{line}")?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> Enforcement for IrcLineEnforcer<W> {
    fn kick(&mut self, channel: &str, user: &str, reason: &str) -> anyhow::Result<()> {
        self.line(&format!("KICK {channel} {user} :{reason}"))
    }

    fn ban(&mut self, channel: &str, user: &str) -> anyhow::Result<()> {
        self.line(&format!("MODE {channel} +b {user}!*@*"))
    }

    fn reply(&mut self, channel: &str, user: &str, text: &str, private: bool) -> anyhow::Result<()> {
        if private {
            self.line(&format!("PRIVMSG {channel} :{user}: {text}"))
        } else {
            self.line(&format!("PRIVMSG {channel} :{text}"))
        }
    }
}
