//! Markdown changelog rendering

use chrono::NaiveDate;
use tracing::{debug, instrument};

use liftoff_release::{GroupedCommits, ReleaseCommit};

use crate::labels::{section_label, SECTION_ORDER};

/// Renders grouped commits as a Markdown changelog section
pub struct MarkdownRenderer {
    /// Include short commit hashes in entries
    pub include_hashes: bool,
}

impl MarkdownRenderer {
    /// Create a renderer with hashes enabled
    pub fn new() -> Self {
        Self {
            include_hashes: true,
        }
    }

    /// Set whether to include short commit hashes
    pub fn with_hashes(mut self, include: bool) -> Self {
        self.include_hashes = include;
        self
    }

    /// Render one release's changelog section.
    ///
    /// Known categories render in [`SECTION_ORDER`]; any remaining groups
    /// follow in the order they were first seen.
    #[instrument(skip(self, grouped), fields(groups = grouped.len()))]
    pub fn render(&self, version: &str, date: NaiveDate, grouped: &GroupedCommits) -> String {
        let mut output = String::new();

        output.push_str(&format!("## {} ({})\n", version, date.format("%Y-%m-%d")));

        for key in SECTION_ORDER {
            if let Some(commits) = grouped.get(key) {
                self.render_section(&mut output, key, commits);
            }
        }
        for (key, commits) in grouped.iter() {
            if !SECTION_ORDER.contains(&key) {
                self.render_section(&mut output, key, commits);
            }
        }

        debug!(output_len = output.len(), "rendered changelog section");
        output
    }

    fn render_section(&self, output: &mut String, key: &str, commits: &[ReleaseCommit]) {
        output.push('\n');
        output.push_str(&format!("### {}\n\n", section_label(key)));

        for entry in commits {
            output.push_str("- ");
            if let Some(scope) = &entry.commit.scope {
                output.push_str(&format!("**{}:** ", scope));
            }
            output.push_str(&entry.commit.subject);
            if self.include_hashes {
                output.push_str(&format!(" ({})", entry.short_hash()));
            }
            output.push('\n');
        }
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}
