//! essh hosts - List hosts, optionally selected by name or tag

use anyhow::Result;
use clap::Args;
use comfy_table::{Cell, Color, Table};
use console::style;
use essh_core::{Config, Host, HostRegistry};

/// Arguments for hosts command
#[derive(Args)]
pub struct HostsArgs {
    /// Host names or tags to select (default: all hosts)
    pub selectors: Vec<String>,

    /// Include hidden hosts
    #[arg(short, long)]
    pub all: bool,

    /// Show only host names (for scripting)
    #[arg(long)]
    pub names_only: bool,

    /// Output as JSON
    #[arg(long, conflicts_with = "names_only")]
    pub json: bool,
}

pub fn cmd_hosts(
    args: &HostsArgs,
    registry: &HostRegistry,
    config: &Config,
    quiet: bool,
) -> Result<()> {
    let hosts = select_hosts(registry, &args.selectors, args.all || config.show_hidden);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&hosts)?);
        return Ok(());
    }

    if hosts.is_empty() {
        if !quiet && !args.names_only {
            if args.selectors.is_empty() {
                println!("No hosts configured.");
            } else {
                println!("No hosts match '{}'.", args.selectors.join(" "));
            }
        }
        return Ok(());
    }

    // Names only mode (for scripting)
    if args.names_only || quiet {
        for host in &hosts {
            println!("{}", host.name);
        }
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Name", "Description", "Tags", "Hidden"]);

    for host in &hosts {
        let name_cell = if host.hidden {
            Cell::new(&host.name).fg(Color::DarkGrey)
        } else {
            Cell::new(&host.name).fg(Color::Cyan)
        };
        let tags_str = if host.tags.is_empty() {
            "-".to_string()
        } else {
            host.tags.join(", ")
        };

        table.add_row(vec![
            name_cell,
            Cell::new(host.description_or_default()),
            Cell::new(tags_str),
            Cell::new(if host.hidden { "*" } else { "" }),
        ]);
    }

    println!("{table}");
    println!();
    println!(
        "  {} {}",
        style("Total:").dim(),
        style(hosts.len()).cyan()
    );

    Ok(())
}

/// Pick the hosts to list
///
/// With no selectors every host is listed; otherwise hosts matched by
/// name or tag. Hidden hosts are dropped unless `include_hidden`.
pub fn select_hosts<'a>(
    registry: &'a HostRegistry,
    selectors: &[String],
    include_hidden: bool,
) -> Vec<&'a Host> {
    let candidates: Vec<&Host> = if selectors.is_empty() {
        registry.iter().collect()
    } else {
        registry.hosts_by_names(selectors)
    };

    candidates
        .into_iter()
        .filter(|host| include_hidden || !host.hidden)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> HostRegistry {
        vec![
            Host::new("web1").with_tag("web"),
            Host::new("web2").with_tag("web").with_hidden(true),
            Host::new("db1").with_tag("db"),
        ]
        .into_iter()
        .collect()
    }

    fn names(hosts: Vec<&Host>) -> Vec<&str> {
        hosts.into_iter().map(|h| h.name.as_str()).collect()
    }

    #[test]
    fn test_select_all_skips_hidden() {
        let registry = registry();
        assert_eq!(names(select_hosts(&registry, &[], false)), vec!["web1", "db1"]);
        assert_eq!(
            names(select_hosts(&registry, &[], true)),
            vec!["web1", "web2", "db1"]
        );
    }

    #[test]
    fn test_select_by_tag_and_name() {
        let registry = registry();
        let selectors = vec!["db1".to_string(), "web".to_string()];
        assert_eq!(
            names(select_hosts(&registry, &selectors, true)),
            vec!["web1", "web2", "db1"]
        );
        assert_eq!(
            names(select_hosts(&registry, &selectors, false)),
            vec!["web1", "db1"]
        );
    }

    #[test]
    fn test_select_unknown_is_empty() {
        let registry = registry();
        assert!(select_hosts(&registry, &["nope".to_string()], true).is_empty());
    }
}
