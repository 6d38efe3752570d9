//! Release aggregation
//!
//! Parses every commit in the release window, decides the bump magnitude,
//! and groups commits into changelog categories.

use tracing::{debug, instrument, warn};

use liftoff_commit::parse;
use liftoff_core::error::VersionError;
use liftoff_git::CommitInfo;

use crate::types::{
    BumpDecision, BumpLevel, GroupedCommits, Release, ReleaseCommit, BREAKING_KEY,
};
use crate::version::bump_version;

/// Commit type excluded from changelog grouping (still counts toward the
/// bump decision)
const EXCLUDED_TYPE: &str = "chore";

/// Aggregates parsed commits into a bump decision and grouped changelog
/// sections.
///
/// Pure over its inputs: no repository access, no I/O, deterministic for
/// identical input sequences.
pub struct ReleaseAggregator {
    prefix: String,
}

impl ReleaseAggregator {
    /// Create an aggregator with the given version prefix (e.g. "v")
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// The configured version prefix
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Aggregate the commits since the last release point.
    ///
    /// `commits` is expected newest first, bounded to strictly after the
    /// latest tag. Commits with a multi-line header cannot be classified and
    /// are skipped with a warning; classification errors (missing or
    /// malformed type/scope) are logged and the degraded commit still
    /// participates in both the bump decision and grouping.
    ///
    /// An empty window still yields a patch bump: the floor guarantees a
    /// release is always produced.
    #[instrument(skip(self, commits), fields(commit_count = commits.len()))]
    pub fn aggregate(
        &self,
        current_version: &str,
        commits: &[CommitInfo],
    ) -> Result<Release, VersionError> {
        let mut parsed = Vec::with_capacity(commits.len());

        for info in commits {
            match parse(&info.message) {
                Ok(outcome) => {
                    if let Some(warning) = &outcome.warning {
                        debug!(hash = %info.short_hash, %warning, "commit parsed with degraded fields");
                    }
                    parsed.push((info, outcome.commit));
                }
                Err(error) => {
                    warn!(hash = %info.short_hash, %error, "skipping unclassifiable commit");
                }
            }
        }

        // First matching rule wins: breaking > feat > patch floor.
        let level = parsed
            .iter()
            .map(|(_, commit)| BumpLevel::for_commit(commit))
            .fold(BumpLevel::Patch, BumpLevel::max);

        let next_version = bump_version(current_version, &self.prefix, level)?;

        let mut grouped = GroupedCommits::default();
        for (info, commit) in &parsed {
            if commit.commit_type == EXCLUDED_TYPE {
                continue;
            }
            let key = if commit.breaking {
                BREAKING_KEY
            } else {
                &commit.commit_type
            };
            grouped.insert(
                key,
                ReleaseCommit {
                    hash: info.hash.clone(),
                    commit: commit.clone(),
                },
            );
        }

        debug!(%level, %next_version, groups = grouped.len(), "aggregated release window");

        Ok(Release {
            bump: BumpDecision {
                level,
                next_version,
            },
            grouped,
            commit_count: parsed.len(),
        })
    }
}
