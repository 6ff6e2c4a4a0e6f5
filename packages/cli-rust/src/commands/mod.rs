//! CLI command implementations
//!
//! Each command receives the loaded host registry and configuration.

mod config;
mod generate;
mod hosts;
mod show;
mod tags;

pub use config::{ConfigArgs, cmd_config};
pub use generate::{GenArgs, cmd_gen};
pub use hosts::{HostsArgs, cmd_hosts};
pub use show::{ShowArgs, cmd_show};
pub use tags::cmd_tags;
