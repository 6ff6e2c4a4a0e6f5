//! Config set subcommand
//!
//! Sets a single configuration value.

use std::path::Path;

use anyhow::{Result, bail};
use console::style;
use essh_core::Config;
use essh_core::config::save_config_to;

/// Set a configuration value and save the config file
pub fn cmd_config_set(
    config: &Config,
    config_path: &Path,
    key: &str,
    value: &str,
    quiet: bool,
) -> Result<()> {
    let mut config = config.clone();
    let display_value = apply_value(&mut config, key, value)?;

    save_config_to(&config, config_path)?;

    if !quiet {
        println!(
            "{} {} = {}",
            style("Set").green(),
            style(key).cyan(),
            display_value
        );
    }

    Ok(())
}

/// Apply a value to the config, returning it formatted for display
fn apply_value(config: &mut Config, key: &str, value: &str) -> Result<String> {
    let display_value = match key.to_lowercase().as_str() {
        "hosts_file" | "hosts" => {
            config.hosts_file = optional_path(value);
            value.to_string()
        }
        "ssh_config_file" | "output" => {
            config.ssh_config_file = optional_path(value);
            value.to_string()
        }
        "show_hidden" | "hidden" => {
            let parsed = parse_bool(value).ok_or_else(|| {
                anyhow::anyhow!("Invalid boolean value: {value}. Use: true/false, yes/no, or 1/0")
            })?;
            config.show_hidden = parsed;
            parsed.to_string()
        }
        _ => {
            bail!(
                "Unknown configuration key: {key}\n\n\
                Valid keys:\n  \
                  hosts_file / hosts\n  \
                  ssh_config_file / output\n  \
                  show_hidden / hidden"
            );
        }
    };
    Ok(display_value)
}

/// Empty string clears the path back to the default
fn optional_path(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Some(true),
        "false" | "no" | "0" | "off" => Some(false),
        _ => None,
    }
}
