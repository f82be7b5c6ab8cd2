//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use chanmod::adapters::RuleFormat;
use chanmod::config::Config;
use chanmod::output::OutputMode;

use crate::commands;

/// chanmod - Channel moderation rules with escalating sanctions
#[derive(Parser, Debug)]
#[command(
    name = "chanmod",
    version,
    about = "Channel moderation rules with escalating sanctions",
    long_about = "Keep per-channel pattern rules and enforce them on channel traffic.\n\n\
                  A first violation kicks the sender. A second one in the same channel\n\
                  bans and kicks them. Admins are never sanctioned."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Server whose rule file to use
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Root directory for rule files
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Rule file format: toml, json
    #[arg(long, global = true)]
    pub format: Option<RuleFormat>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage channel rules (add, del, show)
    Rule {
        #[command(subcommand)]
        action: RuleAction,
    },

    /// Moderate channel messages read from stdin
    ///
    /// Each line is `<channel> <nick> <message>`.
    Listen {
        /// Additional admin nick (repeatable)
        #[arg(long = "admin")]
        admins: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum RuleAction {
    /// Add a rule to a channel
    Add {
        /// Channel name, e.g. "#rust"
        channel: String,

        /// Case-insensitive regular expression
        pattern: String,
    },

    /// Delete a rule from a channel
    Del {
        /// Channel name
        channel: String,

        /// Pattern text exactly as it was added
        pattern: String,
    },

    /// Show a channel's rules
    Show {
        /// Channel name
        channel: String,
    },
}

impl Cli {
    /// Load the config file and apply command-line overrides
    fn resolve_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        if let Some(server) = &self.server {
            config.server.clone_from(server);
        }
        if let Some(dir) = &self.data_dir {
            config.data_dir = Some(dir.clone());
        }
        if let Some(format) = self.format {
            config.format = format;
        }

        Ok(config)
    }
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match &cli.command {
        Some(Command::Rule { action }) => commands::rule_cmd(action, &cli.resolve_config()?, output_mode),
        Some(Command::Listen { admins }) => {
            commands::listen(&cli.resolve_config()?, admins, output_mode)
        },
        None => {
            println!("chanmod v{}", env!("CARGO_PKG_VERSION"));
            println!("\nRun 'chanmod --help' for usage");
            Ok(())
        },
    }
}
