//! Liftoff Changelog - Markdown rendering of grouped commits
//!
//! Turns the aggregator's [`GroupedCommits`](liftoff_release::GroupedCommits)
//! into human-readable changelog sections.

mod labels;
mod markdown;

pub use labels::{section_label, SECTION_ORDER};
pub use markdown::MarkdownRenderer;
