//! Parsed commit types

use serde::{Deserialize, Serialize};

/// The structured result of parsing one commit message.
///
/// A `ParsedCommit` is a derived value: it is never mutated after parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedCommit {
    /// Commit type token (e.g. "feat", "fix"); empty when the header does
    /// not carry one
    pub commit_type: String,
    /// Scope qualifier, if present
    pub scope: Option<String>,
    /// One-line summary; falls back to the raw header text when the header
    /// is not in conventional format
    pub subject: String,
    /// Free text between the header and the trailing footers
    pub body: Option<String>,
    /// Trailer footers in insertion order; duplicates allowed
    pub footers: Vec<Footer>,
    /// True when the header carries `!` or any footer is named
    /// `BREAKING CHANGE`
    pub breaking: bool,
}

/// A trailer key/value pair at the end of a commit message
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footer {
    /// Footer token (word characters/hyphens, or "BREAKING CHANGE")
    pub name: String,
    /// Footer value; continuation lines joined with a line feed, trimmed
    pub value: String,
    /// True for the `token #value` ticket-reference form
    pub reference: bool,
}

impl Footer {
    /// Create a colon-form footer
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            reference: false,
        }
    }

    /// Create a ticket-reference footer
    pub fn reference(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            reference: true,
        }
    }
}
