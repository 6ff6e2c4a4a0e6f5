//! essh CLI - List, select, and generate SSH config for managed hosts
//!
//! This module contains the CLI implementation used by the binary.

mod commands;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use console::style;
use essh_core::{Config, HostRegistry, config, get_version, load_config, load_hosts};
use tracing_subscriber::EnvFilter;

/// List, select, and generate SSH config for managed hosts
#[derive(Parser)]
#[command(name = "essh")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Manage hosts and generate SSH config", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Hosts file to load (overrides config)
    #[arg(long, global = true, value_name = "PATH")]
    hosts_file: Option<PathBuf>,

    /// Increase verbosity level
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List hosts, optionally selected by name or tag
    Hosts(commands::HostsArgs),
    /// List all tags
    Tags,
    /// Show details for a host
    Show(commands::ShowArgs),
    /// Generate SSH config for all hosts
    #[command(name = "gen", alias = "generate")]
    Gen(commands::GenArgs),
    /// Show current configuration
    Config(commands::ConfigArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Configure color output
    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let config_path = config::get_config_path()
        .ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} Configuration error", style("Error:").red().bold());
            eprintln!();
            eprintln!("  {e:#}");
            eprintln!();
            eprintln!("  Config file: {}", style(config_path.display()).yellow());
            eprintln!();
            eprintln!(
                "  {} Check the config file for syntax errors or unknown fields.",
                style("Tip:").cyan()
            );
            std::process::exit(1);
        }
    };

    let Some(command) = cli.command else {
        // No command - show a welcome message and hint to use --help
        if !cli.quiet {
            println!(
                "{} {}",
                style("essh").cyan().bold(),
                style(get_version()).dim()
            );
            println!();
            println!("Run {} for available commands.", style("--help").green());
        }
        return Ok(());
    };

    let hosts_file = cli.hosts_file;
    let registry = || load_registry(hosts_file.clone(), &config, cli.verbose);

    let result = match command {
        Commands::Hosts(args) => {
            registry().and_then(|r| commands::cmd_hosts(&args, &r, &config, cli.quiet))
        }
        Commands::Tags => registry().and_then(|r| commands::cmd_tags(&r, cli.quiet)),
        Commands::Show(args) => registry().and_then(|r| commands::cmd_show(&args, &r, cli.quiet)),
        Commands::Gen(args) => {
            registry().and_then(|r| commands::cmd_gen(&args, &r, &config, cli.quiet))
        }
        Commands::Config(args) => commands::cmd_config(&args, &config, &config_path, cli.quiet),
    };

    if let Err(e) = result {
        output::show_error(&e);
        std::process::exit(1);
    }

    Ok(())
}

/// Install the stderr log subscriber
///
/// `RUST_LOG` wins; otherwise `-v` selects info and `-vv` debug.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Resolve the hosts file and load it
///
/// Precedence: `--hosts-file`, then `hosts_file` from config, then the
/// default path.
fn load_registry(flag: Option<PathBuf>, config: &Config, verbose: u8) -> Result<HostRegistry> {
    let hosts_path = flag
        .or_else(|| config.hosts_file_path())
        .or_else(config::get_hosts_path)
        .ok_or_else(|| anyhow::anyhow!("Could not determine hosts file path"))?;

    if verbose > 0 {
        eprintln!(
            "{} Hosts: {}",
            style("[info]").cyan(),
            hosts_path.display()
        );
    }

    Ok(load_hosts(&hosts_path)?)
}
