//! Version command

use clap::Args;
use console::style;
use tracing::info;

use liftoff_core::config::load_config_or_default;
use liftoff_git::GitRepo;
use liftoff_release::{ReleasePlan, ReleasePlanner};

use crate::cli::{output, Cli, OutputFormat};

/// Calculate the next version
#[derive(Debug, Args)]
pub struct VersionCommand {
    /// Show the current version only
    #[arg(long)]
    pub current: bool,
}

impl VersionCommand {
    /// Execute the version command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(current = self.current, "executing version command");
        let cwd = std::env::current_dir()?;
        let (config, _) = load_config_or_default(&cwd);

        let repo = GitRepo::discover(&cwd)?;

        if self.current {
            let latest = repo
                .find_latest_tag(&config.version.prefix)?
                .ok_or(liftoff_core::error::ReleaseError::NoTagsFound)?;
            println!("{}", latest.name);
            return Ok(());
        }

        let plan = ReleasePlanner::new(&repo, &config.version.prefix).plan()?;
        self.output_plan(&plan, cli)
    }

    fn output_plan(&self, plan: &ReleasePlan, cli: &Cli) -> anyhow::Result<()> {
        match cli.format {
            OutputFormat::Json => {
                let json = serde_json::json!({
                    "current": plan.previous_tag.name,
                    "next": plan.release.bump.next_version,
                    "bump": plan.release.bump.level.to_string(),
                    "commits": plan.release.commit_count,
                });
                println!("{}", serde_json::to_string_pretty(&json)?);
            }
            OutputFormat::Text => {
                if cli.quiet {
                    println!("{}", plan.release.bump.next_version);
                } else {
                    println!("{}", output::header("Version Calculation"));
                    println!();
                    println!("  Current version:  {}", style(&plan.previous_tag.name).cyan());
                    println!(
                        "  Next version:     {}",
                        style(&plan.release.bump.next_version).green().bold()
                    );
                    println!(
                        "  Bump level:       {}",
                        style(plan.release.bump.level.to_string()).yellow()
                    );
                    println!("  Commits analyzed: {}", plan.release.commit_count);
                }
            }
        }
        Ok(())
    }
}
