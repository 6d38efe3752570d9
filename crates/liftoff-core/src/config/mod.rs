//! Configuration loading and types

mod loader;
mod types;

pub use loader::{find_config, load_config, load_config_or_default};
pub use types::{ChangelogConfig, Config, VersionConfig};
