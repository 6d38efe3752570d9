//! Commit message parsing pipeline

use tracing::trace;

use liftoff_core::error::ParseError;

use crate::footers;
use crate::header::parse_header;
use crate::paragraphs::paragraphs;
use crate::types::{Footer, ParsedCommit};

/// Footer name that marks a breaking change
const BREAKING_CHANGE: &str = "BREAKING CHANGE";

/// The result of a lenient parse: a best-effort commit plus an optional
/// classification error.
///
/// Callers that only care about bump/grouping can use `commit` directly and
/// treat `warning` as advisory; stricter callers can escalate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOutcome {
    /// The parsed commit, possibly with degraded fields
    pub commit: ParsedCommit,
    /// Classification error, when the header matched but a token is missing
    /// or malformed
    pub warning: Option<ParseError>,
}

/// Parse one raw commit message.
///
/// The message is normalized and split into paragraphs; the first paragraph
/// is the header, trailing footer blocks are scanned backward from the last
/// paragraph, and everything in between becomes the body.
///
/// The only hard failure is [`ParseError::MultiLineHeader`]: a header
/// paragraph spanning several lines cannot be classified at all. All other
/// parse problems are reported through [`ParseOutcome::warning`] next to a
/// usable commit.
pub fn parse(message: &str) -> Result<ParseOutcome, ParseError> {
    let paragraphs = paragraphs(message);

    let Some(header) = paragraphs.first() else {
        // Blank message: subject-only commit with an empty subject.
        return Ok(ParseOutcome {
            commit: ParsedCommit::default(),
            warning: None,
        });
    };

    // The header must be a single line; this is the one interrupting error.
    if header.contains('\n') {
        return Err(ParseError::MultiLineHeader);
    }

    let (mut commit, warning) = parse_header(header);

    // Footers must be contiguous at the tail of the message. Scan backward
    // until the first paragraph that is not footer-shaped; everything before
    // that boundary (after the header) is body.
    let mut boundary = paragraphs.len();
    while boundary > 1 && footers::is_footer_block(&paragraphs[boundary - 1]) {
        boundary -= 1;
    }

    let body = paragraphs[1..boundary].join("\n\n");
    commit.body = (!body.is_empty()).then_some(body);

    commit.footers = paragraphs[boundary..]
        .iter()
        .flat_map(|p| footers::scan(p))
        .collect::<Vec<Footer>>();

    commit.breaking |= commit.footers.iter().any(|f| f.name == BREAKING_CHANGE);

    trace!(
        commit_type = %commit.commit_type,
        breaking = commit.breaking,
        footer_count = commit.footers.len(),
        "parsed commit message"
    );

    Ok(ParseOutcome { commit, warning })
}
