//! Rule command - manage channel rules

use chanmod::config::Config;
use chanmod::core::services::Moderator;
use chanmod::output::{OutputMode, render_reply};

use crate::cli::RuleAction;

/// Handle rule subcommands (add, del, show)
pub fn rule_cmd(action: &RuleAction, config: &Config, mode: OutputMode) -> anyhow::Result<()> {
    let path = config.rules_file();
    log::debug!("Using rule file {}", path.display());

    let mut moderator = Moderator::load(config.format.open(&path))?;

    let reply = match action {
        RuleAction::Add { channel, pattern } => moderator.try_add_rule(channel, pattern)?,
        RuleAction::Del { channel, pattern } => moderator.try_delete_rule(channel, pattern)?,
        RuleAction::Show { channel } => moderator.show_rules(channel),
    };

    println!("{}", render_reply(&reply, mode));
    Ok(())
}
