//! Config subcommand implementations
//!
//! Provides `essh config` subcommands for viewing and changing configuration.

mod get;
mod set;
mod show;

use std::path::Path;

use anyhow::Result;
use clap::{Args, Subcommand};
use essh_core::Config;

pub use get::cmd_config_get;
pub use set::cmd_config_set;
pub use show::cmd_config_show;

/// Configuration command arguments
#[derive(Args)]
pub struct ConfigArgs {
    /// Output as JSON instead of table format
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Option<ConfigSubcommands>,
}

/// Configuration management subcommands
#[derive(Subcommand)]
pub enum ConfigSubcommands {
    /// Show current configuration
    Show {
        /// Output as JSON instead of table format
        #[arg(long)]
        json: bool,
    },
    /// Get a single configuration value
    Get {
        /// Configuration key (e.g., "hosts_file", "show_hidden")
        key: String,
    },
    /// Set a configuration value
    Set {
        /// Configuration key to set
        key: String,
        /// Value to set (empty string clears a path)
        value: String,
    },
}

/// Handle config command
///
/// If no subcommand is given, defaults to Show.
pub fn cmd_config(args: &ConfigArgs, config: &Config, config_path: &Path, quiet: bool) -> Result<()> {
    match &args.command {
        Some(ConfigSubcommands::Show { json }) => cmd_config_show(config, config_path, *json),
        Some(ConfigSubcommands::Get { key }) => cmd_config_get(config, key),
        Some(ConfigSubcommands::Set { key, value }) => {
            cmd_config_set(config, config_path, key, value, quiet)
        }
        None => cmd_config_show(config, config_path, args.json),
    }
}
