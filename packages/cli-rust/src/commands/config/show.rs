//! Config show subcommand
//!
//! Displays current configuration in table or JSON format.

use std::path::Path;

use anyhow::Result;
use comfy_table::{Cell, Table};
use essh_core::Config;

/// Show current configuration
///
/// Unset paths are shown with the default they resolve to.
pub fn cmd_config_show(config: &Config, config_path: &Path, json: bool) -> Result<()> {
    if json {
        let output = serde_json::to_string_pretty(config)?;
        println!("{output}");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Key", "Value"]);

    table.add_row(vec![
        Cell::new("version"),
        Cell::new(config.version.to_string()),
    ]);
    table.add_row(vec![
        Cell::new("hosts_file"),
        Cell::new(format_path(
            config.hosts_file.as_deref(),
            essh_core::config::get_hosts_path(),
        )),
    ]);
    table.add_row(vec![
        Cell::new("ssh_config_file"),
        Cell::new(format_path(
            config.ssh_config_file.as_deref(),
            essh_core::config::get_ssh_config_path(),
        )),
    ]);
    table.add_row(vec![
        Cell::new("show_hidden"),
        Cell::new(config.show_hidden.to_string()),
    ]);

    println!("{table}");
    println!();
    println!("Config file: {}", config_path.display());

    Ok(())
}

/// Format a configured path, falling back to the default location
fn format_path(value: Option<&str>, default: Option<std::path::PathBuf>) -> String {
    match (value, default) {
        (Some(v), _) if !v.is_empty() => v.to_string(),
        (_, Some(d)) => format!("{} (default)", d.display()),
        _ => "(not set)".to_string(),
    }
}
