//! Configuration schema for essh
//!
//! Defines the structure and defaults for the config.json file.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure for essh
///
/// Serialized to/from `~/.config/essh/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Config file version for migrations
    #[serde(default = "default_version")]
    pub version: u32,

    /// Hosts file to load (default: `~/.config/essh/hosts.json`)
    #[serde(default)]
    pub hosts_file: Option<String>,

    /// Where `essh gen` writes the SSH config (default: `~/.local/share/essh/ssh_config`)
    #[serde(default)]
    pub ssh_config_file: Option<String>,

    /// List hidden hosts without `--all` (default: false)
    #[serde(default)]
    pub show_hidden: bool,
}

fn default_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            hosts_file: None,
            ssh_config_file: None,
            show_hidden: false,
        }
    }
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Configured hosts file, if any
    pub fn hosts_file_path(&self) -> Option<PathBuf> {
        self.hosts_file.as_deref().map(PathBuf::from)
    }

    /// Configured SSH config output file, if any
    pub fn ssh_config_file_path(&self) -> Option<PathBuf> {
        self.ssh_config_file.as_deref().map(PathBuf::from)
    }
}
