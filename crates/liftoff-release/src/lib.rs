//! Liftoff Release - bump decision and changelog grouping
//!
//! Aggregates the parsed commits between HEAD and the latest tag into a
//! single version-bump decision and grouped changelog sections.

mod aggregate;
mod planner;
pub mod types;
mod version;

pub use aggregate::ReleaseAggregator;
pub use planner::{ReleasePlan, ReleasePlanner};
pub use types::{BumpDecision, BumpLevel, GroupedCommits, Release, ReleaseCommit, BREAKING_KEY};
pub use version::bump_version;
