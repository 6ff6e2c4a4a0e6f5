//! essh gen - Generate SSH config for all hosts

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use essh_core::{Config, HostRegistry, config};

/// Arguments for gen command
#[derive(Args)]
pub struct GenArgs {
    /// File to write (default: config `ssh_config_file`, then ~/.local/share/essh/ssh_config)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print to stdout instead of writing a file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,
}

pub fn cmd_gen(args: &GenArgs, registry: &HostRegistry, config: &Config, quiet: bool) -> Result<()> {
    let content = registry.gen_hosts_config()?;

    if args.stdout {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(&content)?;
        stdout.flush()?;
        return Ok(());
    }

    let path = args
        .output
        .clone()
        .or_else(|| config.ssh_config_file_path())
        .or_else(config::get_ssh_config_path)
        .ok_or_else(|| anyhow::anyhow!("Could not determine SSH config output path"))?;

    write_output(&path, &content)?;
    tracing::info!("Wrote SSH config for {} hosts to {}", registry.len(), path.display());

    if !quiet {
        println!(
            "{} {} hosts to {}",
            style("Generated:").green(),
            registry.len(),
            style(path.display()).cyan()
        );
        println!();
        println!(
            "  {} {}",
            style("Use it with:").dim(),
            style(format!("ssh -F {} <host>", path.display())).yellow()
        );
    }

    Ok(())
}

/// Write the generated config, creating the parent directory if needed
fn write_output(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }

    fs::write(path, content)
        .with_context(|| format!("Failed to write SSH config: {}", path.display()))?;

    Ok(())
}
