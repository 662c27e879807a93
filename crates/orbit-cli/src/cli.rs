//! CLI command definitions and argument parsing.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Orbit CLI - Inspect and edit the dashboard object graph.
#[derive(Debug, Parser)]
#[command(name = "orbit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "ORBIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Database path (overrides the config file)
    #[arg(short, long, global = true, env = "ORBIT_DATABASE")]
    pub database: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (key strings only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve an object by key string (namespace:key)
    Resolve(ResolveArgs),

    /// Save an object from JSON
    Save(SaveArgs),

    /// List stored objects
    List(ListArgs),

    /// Resolve and list the root objects
    Roots,

    /// Manage the configuration file
    Config(ConfigArgs),
}

/// Arguments for the resolve command.
#[derive(Debug, Parser)]
pub struct ResolveArgs {
    /// Key string of the object (format: namespace:key, or key)
    pub identifier: String,
}

/// Arguments for the save command.
#[derive(Debug, Parser)]
pub struct SaveArgs {
    /// JSON file containing the object
    #[arg(short, long, conflicts_with = "stdin")]
    pub file: Option<PathBuf>,

    /// Read the object from stdin
    #[arg(long)]
    pub stdin: bool,
}

/// Arguments for the list command.
#[derive(Debug, Parser)]
pub struct ListArgs {
    /// Filter by namespace
    #[arg(short, long)]
    pub namespace: Option<String>,

    /// Filter by type
    #[arg(short = 't', long = "type")]
    pub object_type: Option<String>,

    /// Maximum number of results
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Write the effective configuration to the configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
