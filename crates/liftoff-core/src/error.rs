//! Error types for liftoff
//!
//! Every failure is classified by kind so callers can branch on the variant
//! rather than on message text.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using the top-level liftoff Error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for liftoff operations
#[derive(Debug, Error)]
pub enum Error {
    /// Commit parsing errors
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Version string errors
    #[error(transparent)]
    Version(#[from] VersionError),

    /// Release precondition errors
    #[error(transparent)]
    Release(#[from] ReleaseError),

    /// Git-related errors
    #[error(transparent)]
    Git(#[from] GitError),

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Commit message parsing errors
///
/// `MultiLineHeader` is the one strict failure: the commit cannot be
/// classified at all. The remaining variants are classification errors; the
/// parser still returns a best-effort commit alongside them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The header paragraph contains more than one line
    #[error("invalid format: header has multiple lines")]
    MultiLineHeader,

    /// The header matched the conventional format but has no type token
    #[error("commit type is missing")]
    TypeMissing,

    /// The type token contains characters outside `[\w-]`
    #[error("commit type must match ^[\\w-]+$: {found}")]
    TypeFormat { found: String },

    /// The scope contains characters outside `[\w$./\-* ]`
    #[error("commit scope must match ^[\\w$./\\-* ]+$: {found}")]
    ScopeFormat { found: String },
}

impl ParseError {
    /// Whether this error still yields a usable, degraded commit
    pub fn is_classification(&self) -> bool {
        !matches!(self, Self::MultiLineHeader)
    }
}

/// Version string errors
#[derive(Debug, Error)]
pub enum VersionError {
    /// The current version (after prefix stripping) is not a valid
    /// three-component semantic version
    #[error("invalid current version '{input}': {source}")]
    InvalidCurrentVersion {
        input: String,
        source: semver::Error,
    },
}

/// Release precondition errors
///
/// These abort the whole aggregation: no partial bump or changelog is
/// emitted when one of them fires.
#[derive(Debug, Error)]
pub enum ReleaseError {
    /// The repository has no tags to release from
    #[error("no tags found in repository")]
    NoTagsFound,

    /// HEAD is already the latest tag's commit
    #[error("nothing to release: HEAD is already tagged as {tag}")]
    NothingToRelease { tag: String },
}

/// Git-related errors
#[derive(Debug, Error)]
pub enum GitError {
    /// Repository not found at the given path
    #[error("git repository not found at {0}")]
    RepositoryNotFound(PathBuf),

    /// Path is not inside a git repository
    #[error("not a git repository: {0}")]
    NotARepository(PathBuf),

    /// Failed to open repository
    #[error("failed to open repository: {0}")]
    OpenFailed(String),

    /// Tag already exists
    #[error("tag already exists: {0}")]
    TagExists(String),

    /// Git2 library error
    #[error("git error: {0}")]
    Git2(#[from] git2::Error),
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("configuration file not found at {0}")]
    NotFound(PathBuf),

    /// Invalid configuration value
    #[error("invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}
