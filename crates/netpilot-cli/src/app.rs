//! CLI argument definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use netpilot_core::REPORT_MAX_TOKENS;

#[derive(Parser)]
#[command(name = "netpilot")]
#[command(
    author,
    version,
    about = "Intelligent network configurator: intent in, device configuration report out"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "cli")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a configuration report for a network intent
    Generate(GenerateArgs),

    /// Show knowledge snippets retrieved for a query
    Retrieve(RetrieveArgs),

    /// List the active knowledge base
    Kb,

    /// Print the prompt that would be sent for an intent
    Prompt(PromptArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct GenerateArgs {
    /// High-level network intent (e.g. "Set up branch office VPN")
    pub intent: Vec<String>,

    /// Output token cap for the report
    #[arg(long, default_value_t = REPORT_MAX_TOKENS, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_tokens: u32,

    /// Print the assembled prompt to stderr before generating
    #[arg(long)]
    pub show_prompt: bool,
}

#[derive(Args)]
pub struct RetrieveArgs {
    /// Search query
    pub query: Vec<String>,

    /// Number of snippets
    #[arg(short = 'k', default_value = "3")]
    pub limit: usize,
}

#[derive(Args)]
pub struct PromptArgs {
    /// High-level network intent
    pub intent: Vec<String>,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Print the config file path
    Path,
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Cli,
    Json,
    Md,
}
