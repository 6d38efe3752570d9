//! Release planning
//!
//! Checks the repository preconditions and assembles the aggregation input:
//! latest tag, current HEAD, and the commit window between them. All
//! preconditions are verified before anything downstream mutates state.

use tracing::{debug, instrument};

use liftoff_core::error::{ReleaseError, Result};
use liftoff_git::{GitRepo, TagInfo};

use crate::aggregate::ReleaseAggregator;
use crate::types::Release;

/// A fully resolved release: where it starts from and what it produces
#[derive(Debug)]
pub struct ReleasePlan {
    /// The tag the release window starts after
    pub previous_tag: TagInfo,
    /// Aggregation result for the window
    pub release: Release,
}

/// Plans a release against a repository
pub struct ReleasePlanner<'a> {
    repo: &'a GitRepo,
    aggregator: ReleaseAggregator,
}

impl<'a> ReleasePlanner<'a> {
    /// Create a planner using the given version prefix
    pub fn new(repo: &'a GitRepo, prefix: impl Into<String>) -> Self {
        Self {
            repo,
            aggregator: ReleaseAggregator::new(prefix),
        }
    }

    /// Resolve the latest tag and aggregate the commits since it.
    ///
    /// Fails with [`ReleaseError::NoTagsFound`] when the repository has no
    /// version tags, and with [`ReleaseError::NothingToRelease`] when HEAD
    /// is already the latest tag's commit. Both abort before any output is
    /// produced.
    #[instrument(skip(self))]
    pub fn plan(&self) -> Result<ReleasePlan> {
        let latest = self
            .repo
            .find_latest_tag(self.aggregator.prefix())?
            .ok_or(ReleaseError::NoTagsFound)?;

        let head = self.repo.head_hash()?;
        if head == latest.commit_hash {
            return Err(ReleaseError::NothingToRelease {
                tag: latest.name.clone(),
            }
            .into());
        }

        let commits = self.repo.commits_since_tag(&latest.name)?;
        debug!(tag = %latest.name, commits = commits.len(), "planning release");

        let release = self.aggregator.aggregate(&latest.name, &commits)?;

        Ok(ReleasePlan {
            previous_tag: latest,
            release,
        })
    }
}
