//! essh tags - List all tags

use anyhow::Result;
use essh_core::HostRegistry;

pub fn cmd_tags(registry: &HostRegistry, quiet: bool) -> Result<()> {
    let tags = registry.tags();

    if tags.is_empty() {
        if !quiet {
            eprintln!("No tags defined.");
        }
        return Ok(());
    }

    for tag in tags {
        println!("{tag}");
    }

    Ok(())
}
