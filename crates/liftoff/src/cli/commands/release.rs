//! Release command
//!
//! Runs the full flow: plan the release, prepend the changelog section,
//! write the version file, create the tag. All preconditions are checked by
//! the planner before any file is touched; an aborting error therefore never
//! leaves a half-written release behind.

use chrono::Utc;
use clap::Args;
use console::style;
use tracing::info;

use liftoff_changelog::MarkdownRenderer;
use liftoff_core::config::load_config_or_default;
use liftoff_git::GitRepo;
use liftoff_release::{bump_version, BumpLevel, ReleasePlanner};

use crate::cli::{output, Cli};

use super::changelog::prepend_to_file;

/// Bump level override
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum BumpArg {
    Major,
    Minor,
    Patch,
}

impl From<BumpArg> for BumpLevel {
    fn from(arg: BumpArg) -> Self {
        match arg {
            BumpArg::Major => BumpLevel::Major,
            BumpArg::Minor => BumpLevel::Minor,
            BumpArg::Patch => BumpLevel::Patch,
        }
    }
}

/// Cut a release
#[derive(Debug, Args)]
pub struct ReleaseCommand {
    /// Force a bump level instead of deriving it from commits
    #[arg(long, value_name = "LEVEL")]
    pub bump: Option<BumpArg>,

    /// Skip updating the changelog file
    #[arg(long)]
    pub skip_changelog: bool,

    /// Skip writing the version file
    #[arg(long)]
    pub skip_version_file: bool,

    /// Skip creating the git tag
    #[arg(long)]
    pub skip_tag: bool,

    /// Show what would happen without touching anything
    #[arg(long)]
    pub dry_run: bool,
}

impl ReleaseCommand {
    /// Execute the release command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(bump = ?self.bump, dry_run = self.dry_run, "executing release command");
        let cwd = std::env::current_dir()?;
        let (config, _) = load_config_or_default(&cwd);

        let repo = GitRepo::discover(&cwd)?;
        let mut plan = ReleasePlanner::new(&repo, &config.version.prefix).plan()?;

        // An explicit level replaces the derived one; the window and
        // grouping stay as planned.
        if let Some(arg) = self.bump {
            let level = BumpLevel::from(arg);
            plan.release.bump.level = level;
            plan.release.bump.next_version =
                bump_version(&plan.previous_tag.name, &config.version.prefix, level)?;
        }

        let next_version = plan.release.bump.next_version.clone();

        if !cli.quiet {
            println!("{}", output::header("Release"));
            println!();
            println!("  Previous tag:  {}", style(&plan.previous_tag.name).cyan());
            println!("  Next version:  {}", style(&next_version).green().bold());
            println!(
                "  Bump level:    {}",
                style(plan.release.bump.level.to_string()).yellow()
            );
            println!();
        }

        if self.dry_run {
            output::warning("Dry run: no files written, no tag created");
            return Ok(());
        }

        if config.changelog.update_file && !self.skip_changelog {
            let renderer = MarkdownRenderer::new().with_hashes(config.changelog.include_hashes);
            let rendered = renderer.render(
                &next_version,
                Utc::now().date_naive(),
                &plan.release.grouped,
            );
            let path = cwd.join(&config.changelog.file);
            prepend_to_file(&path, &rendered)?;
            if !cli.quiet {
                output::success(&format!("Updated {}", config.changelog.file));
            }
        }

        if config.version.update_file && !self.skip_version_file {
            let path = cwd.join(&config.version.file);
            std::fs::write(&path, &next_version)?;
            if !cli.quiet {
                output::success(&format!("Updated {}", config.version.file));
            }
        }

        if config.version.create_tag && !self.skip_tag {
            let message = format!("chore(version): bump version to {}", next_version);
            repo.create_tag(&next_version, &message)?;
            if !cli.quiet {
                output::success(&format!("Created tag {}", style(&next_version).green()));
            }
        }

        Ok(())
    }
}
