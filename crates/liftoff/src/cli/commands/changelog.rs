//! Changelog command

use std::path::PathBuf;

use chrono::Utc;
use clap::Args;
use console::style;
use tracing::info;

use liftoff_changelog::MarkdownRenderer;
use liftoff_core::config::load_config_or_default;
use liftoff_git::GitRepo;
use liftoff_release::ReleasePlanner;

use crate::cli::{output, Cli, OutputFormat};

/// Render the pending changelog section
#[derive(Debug, Args)]
pub struct ChangelogCommand {
    /// Prepend to the changelog file instead of printing
    #[arg(short, long)]
    pub write: bool,

    /// Output file (defaults to the configured changelog file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl ChangelogCommand {
    /// Execute the changelog command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(write = self.write, "executing changelog command");
        let cwd = std::env::current_dir()?;
        let (config, _) = load_config_or_default(&cwd);

        let repo = GitRepo::discover(&cwd)?;
        let plan = ReleasePlanner::new(&repo, &config.version.prefix).plan()?;

        let renderer = MarkdownRenderer::new().with_hashes(config.changelog.include_hashes);
        let rendered = renderer.render(
            &plan.release.bump.next_version,
            Utc::now().date_naive(),
            &plan.release.grouped,
        );

        if self.write {
            let path = self
                .output
                .clone()
                .unwrap_or_else(|| cwd.join(&config.changelog.file));
            prepend_to_file(&path, &rendered)?;

            if !cli.quiet {
                output::success(&format!(
                    "Changelog written to {}",
                    style(path.display()).cyan()
                ));
            }
        } else {
            match cli.format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&plan.release)?);
                }
                OutputFormat::Text => {
                    println!("{}", rendered);
                }
            }
        }

        Ok(())
    }
}

/// Prepend a rendered section to an existing changelog file, creating the
/// file when it does not exist yet.
pub(crate) fn prepend_to_file(path: &std::path::Path, section: &str) -> anyhow::Result<()> {
    if path.exists() {
        let existing = std::fs::read_to_string(path)?;
        std::fs::write(path, format!("{}\n{}", section, existing))?;
    } else {
        std::fs::write(path, section)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_prepend_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("CHANGELOG.md");

        prepend_to_file(&path, "## v1.1.0\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "## v1.1.0\n");
    }

    #[test]
    fn test_prepend_keeps_existing_content_below() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("CHANGELOG.md");
        std::fs::write(&path, "## v1.0.0\nold entry\n").unwrap();

        prepend_to_file(&path, "## v1.1.0\nnew entry\n").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("## v1.1.0\nnew entry\n"));
        assert!(content.contains("## v1.0.0\nold entry\n"));
    }
}
