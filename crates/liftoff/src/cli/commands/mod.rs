//! CLI commands

mod changelog;
mod release;
mod version;

pub use changelog::ChangelogCommand;
pub use release::ReleaseCommand;
pub use version::VersionCommand;
