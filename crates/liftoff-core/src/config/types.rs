//! Configuration types

use serde::{Deserialize, Serialize};

/// Top-level liftoff configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Versioning configuration
    pub version: VersionConfig,

    /// Changelog configuration
    pub changelog: ChangelogConfig,
}

/// Versioning configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VersionConfig {
    /// Prefix stripped from and reattached to version strings (e.g. "v")
    pub prefix: String,

    /// Path of the plain-text version file, relative to the repo root
    pub file: String,

    /// Whether `release` writes the version file
    pub update_file: bool,

    /// Whether `release` creates a git tag
    pub create_tag: bool,
}

impl Default for VersionConfig {
    fn default() -> Self {
        Self {
            prefix: "v".to_string(),
            file: "VERSION".to_string(),
            update_file: true,
            create_tag: true,
        }
    }
}

/// Changelog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Path of the changelog file, relative to the repo root
    pub file: String,

    /// Whether `release` prepends to the changelog file
    pub update_file: bool,

    /// Include short commit hashes in changelog entries
    pub include_hashes: bool,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            file: "CHANGELOG.md".to_string(),
            update_file: true,
            include_hashes: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.version.prefix, "v");
        assert_eq!(config.version.file, "VERSION");
        assert_eq!(config.changelog.file, "CHANGELOG.md");
        assert!(config.changelog.include_hashes);
    }

    #[test]
    fn test_partial_toml() {
        let config: Config = toml::from_str("[version]\nprefix = \"ver\"").unwrap();
        assert_eq!(config.version.prefix, "ver");
        assert_eq!(config.changelog.file, "CHANGELOG.md");
    }
}
