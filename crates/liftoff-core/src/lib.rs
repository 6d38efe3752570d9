//! Liftoff Core - shared types for release management
//!
//! This crate provides the error taxonomy and configuration used by the
//! parser, aggregator, git, and changelog crates.

pub mod config;
pub mod error;

pub use config::{load_config_or_default, ChangelogConfig, Config, VersionConfig};
pub use error::{Error, GitError, ParseError, ReleaseError, Result, VersionError};
