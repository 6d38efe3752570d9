//! Release aggregation types

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use liftoff_commit::ParsedCommit;

/// Synthetic grouping key for breaking changes
pub const BREAKING_KEY: &str = "breaking";

/// Magnitude of a version bump
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BumpLevel {
    /// Major version bump (breaking changes)
    Major,
    /// Minor version bump (new features)
    Minor,
    /// Patch version bump (everything else; the floor)
    Patch,
}

impl BumpLevel {
    /// The bump a single commit asks for
    pub fn for_commit(commit: &ParsedCommit) -> Self {
        if commit.breaking {
            Self::Major
        } else if commit.commit_type == "feat" {
            Self::Minor
        } else {
            Self::Patch
        }
    }

    /// The higher-priority of two levels
    pub fn max(self, other: Self) -> Self {
        use BumpLevel::*;
        match (self, other) {
            (Major, _) | (_, Major) => Major,
            (Minor, _) | (_, Minor) => Minor,
            (Patch, Patch) => Patch,
        }
    }
}

impl std::fmt::Display for BumpLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Major => write!(f, "major"),
            Self::Minor => write!(f, "minor"),
            Self::Patch => write!(f, "patch"),
        }
    }
}

/// The outcome of the bump decision: magnitude plus resolved next version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BumpDecision {
    /// Decided bump magnitude
    pub level: BumpLevel,
    /// Next version string with the configured prefix reattached
    pub next_version: String,
}

/// A commit paired with its parse result, as it appears in the changelog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseCommit {
    /// Full commit hash
    pub hash: String,
    /// Parsed commit message
    pub commit: ParsedCommit,
}

impl ReleaseCommit {
    /// Short hash (first 7 characters)
    pub fn short_hash(&self) -> &str {
        &self.hash[..7.min(self.hash.len())]
    }
}

/// Parsed commits grouped by changelog category.
///
/// Group keys are commit types, or [`BREAKING_KEY`] for breaking changes.
/// Insertion order is preserved within each group, and groups iterate in
/// first-seen order so output is deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupedCommits {
    order: Vec<String>,
    groups: HashMap<String, Vec<ReleaseCommit>>,
}

impl GroupedCommits {
    /// Append a commit to the group for `key`
    pub fn insert(&mut self, key: &str, commit: ReleaseCommit) {
        if !self.groups.contains_key(key) {
            self.order.push(key.to_string());
        }
        self.groups.entry(key.to_string()).or_default().push(commit);
    }

    /// Commits in the group for `key`, in insertion order
    pub fn get(&self, key: &str) -> Option<&[ReleaseCommit]> {
        self.groups.get(key).map(Vec::as_slice)
    }

    /// Iterate groups in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ReleaseCommit])> {
        self.order
            .iter()
            .map(|k| (k.as_str(), self.groups[k].as_slice()))
    }

    /// Group keys in first-seen order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Whether no commits were grouped
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of groups
    pub fn len(&self) -> usize {
        self.groups.len()
    }
}

/// The full aggregation result for one release window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Release {
    /// Bump decision and next version
    pub bump: BumpDecision,
    /// Commits grouped for changelog rendering
    pub grouped: GroupedCommits,
    /// Number of commits considered for the bump decision
    pub commit_count: usize,
}
