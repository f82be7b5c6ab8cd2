//! Command implementations

mod listen;
mod rule;

pub use listen::listen;
pub use rule::rule_cmd;
