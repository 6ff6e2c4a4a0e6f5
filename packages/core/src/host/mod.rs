//! Host management module
//!
//! Provides the host registry and SSH config generation:
//! - Host schema with string and non-string SSH options
//! - Ordered registry with name and tag lookup
//! - SSH config rendering
//! - Hosts file loading

mod error;
mod registry;
mod render;
mod schema;
mod storage;

// Public exports
pub use error::HostError;
pub use registry::{HostRegistry, SharedRegistry};
pub use render::{GENERATED_HEADER, render_hosts_config, write_hosts_config};
pub use schema::{ConfigValue, Hook, HookFn, Host};
pub use storage::{HostsFile, load_hosts, parse_hosts};
