//! Hosts file loading
//!
//! Reads hosts.json (JSONC accepted) into a [`HostRegistry`].

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use jsonc_parser::parse_to_serde_value;
use serde::Deserialize;

use super::error::HostError;
use super::registry::HostRegistry;
use super::schema::Host;

/// Root structure of the hosts file
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HostsFile {
    /// Schema version for future migrations
    #[serde(default = "default_version")]
    pub version: u32,

    /// Hosts in the order they should be registered
    #[serde(default)]
    pub hosts: Vec<Host>,
}

fn default_version() -> u32 {
    1
}

/// Load hosts from a file into a new registry
///
/// Returns an empty registry if the file doesn't exist.
pub fn load_hosts(path: &Path) -> Result<HostRegistry, HostError> {
    if !path.exists() {
        tracing::debug!("Hosts file not found, returning empty: {}", path.display());
        return Ok(HostRegistry::new());
    }

    let contents = fs::read_to_string(path)
        .map_err(|e| HostError::LoadFailed(format!("Failed to read {}: {}", path.display(), e)))?;

    let registry = parse_hosts(&contents).map_err(|e| match e {
        HostError::LoadFailed(msg) => HostError::LoadFailed(format!("{}: {}", path.display(), msg)),
        other => other,
    })?;

    tracing::debug!("Loaded {} hosts from {}", registry.len(), path.display());
    Ok(registry)
}

/// Parse hosts file contents into a new registry
pub fn parse_hosts(contents: &str) -> Result<HostRegistry, HostError> {
    let value = parse_to_serde_value(contents, &Default::default())
        .map_err(|e| HostError::LoadFailed(format!("Invalid JSONC: {e}")))?;

    // An empty document (whitespace or comments only) has no hosts
    let Some(value) = value else {
        return Ok(HostRegistry::new());
    };

    let file: HostsFile = serde_json::from_value(value)
        .map_err(|e| HostError::LoadFailed(format!("Invalid hosts file: {e}")))?;

    let mut registry = HostRegistry::new();
    let mut seen = HashSet::new();
    for host in file.hosts {
        if host.name.trim().is_empty() {
            return Err(HostError::InvalidConfig(
                "host entry with an empty name".to_string(),
            ));
        }
        if !seen.insert(host.name.clone()) {
            tracing::warn!(
                "Duplicate host '{}' in hosts file; the first definition wins",
                host.name
            );
        }
        registry.register(host);
    }

    Ok(registry)
}
