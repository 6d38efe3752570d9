//! Liftoff Commit - conventional commit message parsing
//!
//! Parses commit messages following the Conventional Commits convention:
//! https://www.conventionalcommits.org/
//!
//! The parser is lenient: headers that do not match the conventional format
//! degrade to subject-only commits instead of failing. The one strict error
//! is a multi-line header, which makes a commit unclassifiable.

mod footers;
mod header;
mod paragraphs;
mod parser;
mod types;

pub use parser::{parse, ParseOutcome};
pub use types::{Footer, ParsedCommit};

pub use liftoff_core::error::ParseError;
