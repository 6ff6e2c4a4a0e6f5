//! SSH config generation
//!
//! Renders a registry into an OpenSSH client config document:
//!
//! ```text
//! # Generated by using https://github.com/kohkimakimoto/essh
//! # Don't edit this file manually.
//!
//! Host web1
//!     HostName 192.168.0.11
//!     Port 22
//!
//! ```

use std::fmt::Write as _;
use std::io::Write;

use super::error::HostError;
use super::registry::HostRegistry;

/// Disclaimer written at the top of every generated file
///
/// Tools grep for this text, so it must not change.
pub const GENERATED_HEADER: &str =
    "# Generated by using https://github.com/kohkimakimoto/essh\n# Don't edit this file manually.\n";

/// Render the registry into a string
///
/// Hosts appear in registration order, options sorted by key. Host names
/// are written as-is.
pub fn render_hosts_config(registry: &HostRegistry) -> String {
    let mut out = String::from(GENERATED_HEADER);

    for host in registry {
        // Writing into a String cannot fail
        let _ = write!(out, "\nHost {}", host.name);
        for (key, value) in host.ssh_config() {
            let _ = write!(out, "\n    {key} {value}");
        }
        out.push('\n');
    }
    out.push('\n');

    out
}

/// Render the registry into a writer
pub fn write_hosts_config<W: Write>(registry: &HostRegistry, out: &mut W) -> Result<(), HostError> {
    let rendered = render_hosts_config(registry);
    out.write_all(rendered.as_bytes())
        .and_then(|()| out.flush())
        .map_err(|e| HostError::WriteFailed(e.to_string()))?;

    tracing::debug!(
        "Rendered {} hosts ({} bytes)",
        registry.len(),
        rendered.len()
    );
    Ok(())
}
