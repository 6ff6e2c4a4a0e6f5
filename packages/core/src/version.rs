//! Version information for essh

/// Get the current version string
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Get the long version string with build information
///
/// Returns version plus build metadata when available (git commit, build date).
pub fn get_version_long() -> String {
    // Set by CI or build scripts; absent in local builds
    let git_hash = option_env!("ESSH_GIT_HASH").unwrap_or("unknown");
    let build_date = option_env!("ESSH_BUILD_DATE").unwrap_or("unknown");

    format!("{} (git: {git_hash}, built: {build_date})", get_version())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_version_returns_valid_semver() {
        let version = get_version();
        let parts: Vec<&str> = version.split('.').collect();
        assert!(parts.len() >= 2, "Version should have at least major.minor");
    }

    #[test]
    fn test_get_version_long_contains_version() {
        let long = get_version_long();
        assert!(long.starts_with(&get_version()));
        assert!(long.contains("git:"));
    }
}
