//! essh-core - Core library for essh
//!
//! Host registry, name/tag selection, and SSH config generation shared
//! by the essh CLI and anything else that manages hosts.

pub mod config;
pub mod host;
pub mod version;

// Re-export commonly used items for convenience
pub use config::{Config, load_config, save_config};
pub use host::{
    ConfigValue, GENERATED_HEADER, Hook, Host, HostError, HostRegistry, SharedRegistry, load_hosts,
    parse_hosts,
};
pub use version::{get_version, get_version_long};
