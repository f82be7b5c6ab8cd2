//! Listen command - moderate channel traffic from stdin

use std::borrow::Cow;
use std::io::{self, BufRead};

use colored::Colorize;

use chanmod::adapters::IrcLineEnforcer;
use chanmod::config::Config;
use chanmod::core::services::{Moderator, dispatch};
use chanmod::output::{ActionRecord, OutputMode, render_action};

/// A channel message parsed from one input line
#[derive(Debug, PartialEq, Eq)]
struct Event<'a> {
    channel: &'a str,
    user: &'a str,
    text: &'a str,
}

/// Parse `<channel> <nick> <message...>`
fn parse_event(line: &str) -> Option<Event<'_>> {
    let mut parts = line.splitn(3, ' ');
    let channel = parts.next().filter(|c| !c.is_empty())?;
    let user = parts.next().filter(|u| !u.is_empty())?;
    let text = parts.next()?;
    Some(Event {
        channel,
        user,
        text,
    })
}

/// Evaluate every stdin line and print the resulting sanctions
///
/// Lines that are not valid UTF-8 are decoded lossily so one bad byte never
/// stops moderation. Only read errors end the loop early.
pub fn listen(config: &Config, extra_admins: &[String], mode: OutputMode) -> anyhow::Result<()> {
    let mut moderator = Moderator::load(config.format.open(&config.rules_file()))?;
    let gate = config.admin_gate(extra_admins);
    log::debug!("Listening with {} admins", gate.admin_count());

    let stdout = io::stdout();
    let mut enforcer = IrcLineEnforcer::new(stdout.lock());
    let mut sanctions = 0usize;

    let mut input = io::stdin().lock();
    let mut buf = Vec::new();
    let mut number = 0usize;

    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        number += 1;

        let decoded = String::from_utf8_lossy(&buf);
        if let Cow::Owned(_) = decoded {
            log::warn!("Line {number} is not valid UTF-8, decoding lossily");
        }
        let line = decoded.trim_end_matches(['\n', '\r']);
        if line.trim().is_empty() {
            continue;
        }

        let Some(event) = parse_event(line) else {
            log::warn!("Skipping malformed line {number}: {line:?}");
            continue;
        };

        let actions = moderator.handle_message(event.channel, event.user, event.text, &gate);
        sanctions += actions.len();

        match mode {
            OutputMode::Human => dispatch(event.channel, &actions, &mut enforcer)?,
            OutputMode::Json => {
                for action in &actions {
                    println!("{}", render_action(&ActionRecord::now(event.channel, action))?);
                }
            },
        }
    }

    if mode == OutputMode::Human {
        eprintln!("{}", format!("{sanctions} sanction(s) issued").yellow());
    }
    Ok(())
}
