//! Liftoff Git - repository access for release management
//!
//! This crate supplies the commit sequence and tag operations the release
//! planner consumes: latest tag lookup, commits since a tag (newest first),
//! HEAD resolution, and tag creation.

mod commits;
mod repository;
mod tags;
pub mod types;

pub use repository::{GitRepo, Result};
pub use types::{CommitInfo, TagInfo};
