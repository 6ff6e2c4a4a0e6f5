//! essh show - Show details for a host

use anyhow::Result;
use clap::Args;
use console::style;
use essh_core::{Host, HostError, HostRegistry};

/// Arguments for show command
#[derive(Args)]
pub struct ShowArgs {
    /// Name of the host to show
    pub name: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn cmd_show(args: &ShowArgs, registry: &HostRegistry, quiet: bool) -> Result<()> {
    let host = registry
        .get_host(&args.name)
        .ok_or_else(|| HostError::NotFound(args.name.clone()))?;

    if args.json || quiet {
        println!("{}", serde_json::to_string_pretty(host)?);
        return Ok(());
    }

    println!("{}", style(&host.name).cyan().bold());
    if host.hidden {
        println!("  {} (hidden)", style("*").yellow());
    }
    println!();

    println!(
        "  {:<15} {}",
        style("Description:").dim(),
        host.description_or_default()
    );
    if !host.tags.is_empty() {
        println!("  {:<15} {}", style("Tags:").dim(), host.tags.join(", "));
    }
    if !host.extend.is_empty() {
        println!(
            "  {:<15} {} {}",
            style("Extends:").dim(),
            host.extend,
            style("(not applied)").dim()
        );
    }

    let props = sorted_props(host);
    if !props.is_empty() {
        println!("  {}", style("Props:").dim());
        for (key, value) in props {
            println!("    {key} = {value}");
        }
    }

    let mut events: Vec<&String> = host.hooks.keys().collect();
    events.sort();
    if !events.is_empty() {
        println!("  {}", style("Hooks:").dim());
        for event in events {
            println!("    {event}: {}", host.hooks_for(event).len());
        }
    }

    println!();
    println!("  {}", style("SSH config:").dim());
    println!("    Host {}", host.name);
    let params = host.ssh_config();
    for (key, value) in &params {
        println!("        {key} {value}");
    }

    let skipped = host.config.len() - params.len();
    if skipped > 0 {
        println!();
        println!(
            "  {} {} non-string option(s) not written to SSH config",
            style("Note:").yellow(),
            skipped
        );
    }

    Ok(())
}

fn sorted_props(host: &Host) -> Vec<(&str, &str)> {
    let mut props: Vec<(&str, &str)> = host
        .props
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    props.sort_unstable();
    props
}
