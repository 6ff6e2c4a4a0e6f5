//! Config get subcommand
//!
//! Retrieves a single configuration value by key.

use anyhow::{Result, bail};
use essh_core::Config;

/// Get a single configuration value
///
/// Outputs just the value (no formatting) for scripting.
pub fn cmd_config_get(config: &Config, key: &str) -> Result<()> {
    println!("{}", config_value(config, key)?);
    Ok(())
}

fn config_value(config: &Config, key: &str) -> Result<String> {
    let value = match key.to_lowercase().as_str() {
        "version" => config.version.to_string(),
        "hosts_file" | "hosts" => config.hosts_file.clone().unwrap_or_default(),
        "ssh_config_file" | "output" => config.ssh_config_file.clone().unwrap_or_default(),
        "show_hidden" | "hidden" => config.show_hidden.to_string(),
        _ => {
            bail!(
                "Unknown configuration key: {key}\n\n\
                Valid keys:\n  \
                  version\n  \
                  hosts_file / hosts\n  \
                  ssh_config_file / output\n  \
                  show_hidden / hidden"
            );
        }
    };
    Ok(value)
}
