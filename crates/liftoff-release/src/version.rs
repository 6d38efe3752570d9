//! Version string derivation

use semver::Version;

use liftoff_core::error::VersionError;

use crate::types::BumpLevel;

/// Apply exactly one increment to a version string.
///
/// The configured prefix is stripped before parsing and reattached to the
/// result. A major bump resets minor and patch, a minor bump resets patch,
/// a patch bump increments only the patch component. Prerelease and build
/// metadata do not survive a bump.
pub fn bump_version(
    current: &str,
    prefix: &str,
    level: BumpLevel,
) -> Result<String, VersionError> {
    let stripped = current.strip_prefix(prefix).unwrap_or(current);

    let version = Version::parse(stripped).map_err(|e| VersionError::InvalidCurrentVersion {
        input: stripped.to_string(),
        source: e,
    })?;

    let next = match level {
        BumpLevel::Major => Version::new(version.major + 1, 0, 0),
        BumpLevel::Minor => Version::new(version.major, version.minor + 1, 0),
        BumpLevel::Patch => Version::new(version.major, version.minor, version.patch + 1),
    };

    Ok(format!("{prefix}{next}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bump_major_resets_lower_components() {
        assert_eq!(bump_version("v1.2.3", "v", BumpLevel::Major).unwrap(), "v2.0.0");
    }

    #[test]
    fn test_bump_minor_resets_patch() {
        assert_eq!(bump_version("v1.2.3", "v", BumpLevel::Minor).unwrap(), "v1.3.0");
    }

    #[test]
    fn test_bump_patch() {
        assert_eq!(bump_version("v1.2.3", "v", BumpLevel::Patch).unwrap(), "v1.2.4");
    }

    #[test]
    fn test_empty_prefix() {
        assert_eq!(bump_version("1.2.3", "", BumpLevel::Patch).unwrap(), "1.2.4");
    }

    #[test]
    fn test_custom_prefix() {
        assert_eq!(
            bump_version("release-2.0.0", "release-", BumpLevel::Major).unwrap(),
            "release-3.0.0"
        );
    }

    #[test]
    fn test_missing_prefix_is_tolerated() {
        assert_eq!(bump_version("1.2.3", "v", BumpLevel::Patch).unwrap(), "v1.2.4");
    }

    #[test]
    fn test_invalid_version() {
        let result = bump_version("v1.2", "v", BumpLevel::Patch);
        assert!(matches!(
            result,
            Err(VersionError::InvalidCurrentVersion { .. })
        ));
    }

    #[test]
    fn test_prerelease_dropped_on_bump() {
        assert_eq!(
            bump_version("v1.2.3-alpha.1", "v", BumpLevel::Minor).unwrap(),
            "v1.3.0"
        );
    }
}
