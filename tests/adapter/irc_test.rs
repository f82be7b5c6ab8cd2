//! Tests for the IRC line enforcer

use chanmod::adapters::IrcLineEnforcer;
use chanmod::core::services::{Moderator, dispatch};
use chanmod::core::ports::{RuleMap, RulePersistence};

struct NoFile;

impl RulePersistence for NoFile {
    fn load(&self) -> anyhow::Result<RuleMap> {
        Ok(RuleMap::new())
    }

    fn save(&self, _rules: &RuleMap) -> anyhow::Result<()> {
        Ok(())
    }
}

#[test]
fn test_escalation_as_irc_lines() {
    let mut moderator = Moderator::load(Box::new(NoFile)).unwrap();
    moderator.add_rule("#test", "spam");
    let mut enforcer = IrcLineEnforcer::new(Vec::new());

    for _ in 0..2 {
        let actions = moderator.on_message("#test", "alice", "this is SPAM", false);
        dispatch("#test", &actions, &mut enforcer).unwrap();
    }

    let out = String::from_utf8(enforcer.into_inner()).unwrap();
    assert_eq!(
        out.lines().collect::<Vec<_>>(),
        vec![
            "KICK #test alice :First rule violation.",
            "MODE #test +b alice!*@*",
            "KICK #test alice :Second rule violation.",
        ]
    );
}
