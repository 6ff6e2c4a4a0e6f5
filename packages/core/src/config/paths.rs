//! XDG-compliant path resolution for essh
//!
//! Provides consistent path resolution across platforms:
//! - Linux/macOS: ~/.config/essh/ and ~/.local/share/essh/
//! - Windows: %APPDATA%\essh\ and %LOCALAPPDATA%\essh\

use std::path::PathBuf;

/// Get the configuration directory path
///
/// Returns the directory where config.json and hosts.json live:
/// - Linux: `~/.config/essh/`
/// - macOS: `~/.config/essh/` (XDG-style, not ~/Library)
/// - Windows: `%APPDATA%\essh\`
pub fn get_config_dir() -> Option<PathBuf> {
    #[cfg(any(target_os = "linux", target_os = "macos"))]
    {
        directories::BaseDirs::new().map(|dirs| dirs.home_dir().join(".config").join("essh"))
    }
    #[cfg(target_os = "windows")]
    {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().to_path_buf())
            .map(|d| d.join("essh"))
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        None
    }
}

/// Get the data directory path
///
/// Returns the directory where generated files are stored:
/// - Linux: `~/.local/share/essh/`
/// - macOS: `~/.local/share/essh/` (XDG-style, not ~/Library)
/// - Windows: `%LOCALAPPDATA%\essh\`
pub fn get_data_dir() -> Option<PathBuf> {
    #[cfg(any(target_os = "linux", target_os = "macos"))]
    {
        directories::BaseDirs::new()
            .map(|dirs| dirs.home_dir().join(".local").join("share").join("essh"))
    }
    #[cfg(target_os = "windows")]
    {
        directories::BaseDirs::new()
            .map(|dirs| dirs.data_local_dir().to_path_buf())
            .map(|d| d.join("essh"))
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        None
    }
}

/// Get the full path to the config file
///
/// Returns: `{config_dir}/config.json`
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|d| d.join("config.json"))
}

/// Get the full path to the hosts file
///
/// Returns: `{config_dir}/hosts.json`
pub fn get_hosts_path() -> Option<PathBuf> {
    get_config_dir().map(|d| d.join("hosts.json"))
}

/// Get the default path for the generated SSH config
///
/// Returns: `{data_dir}/ssh_config`
pub fn get_ssh_config_path() -> Option<PathBuf> {
    get_data_dir().map(|d| d.join("ssh_config"))
}
