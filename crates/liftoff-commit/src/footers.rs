//! Footer scanning
//!
//! A trailing paragraph is a footer block when its first line matches one of
//! two grammars:
//!
//! - token form: `Name: value` (name is a word/hyphen token or the literal
//!   phrase `BREAKING CHANGE`)
//! - ticket form: `Name #value`
//!
//! The token form is tried first, so a colon-form footer whose value starts
//! with `#` (e.g. `Requires: #44`) is never a ticket reference. Within a
//! block, every line is classified as a new footer or a continuation; the
//! classification runs as a small state machine with one current-footer
//! accumulator so the joining behavior stays auditable.

use regex::Regex;
use std::sync::LazyLock;

use crate::types::Footer;

static TOKEN_FOOTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<name>[\w-]+|BREAKING CHANGE):\s+(?P<value>.*)$")
        .expect("invalid token footer regex")
});

static TICKET_FOOTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<name>[\w-]+)\s+(?P<value>#\S.*)$").expect("invalid ticket footer regex")
});

/// Whether a paragraph opens with a footer-shaped line.
///
/// Only the first line decides: a footer-shaped line later in a body
/// paragraph does not make that paragraph a footer block.
pub(crate) fn is_footer_block(paragraph: &str) -> bool {
    paragraph
        .lines()
        .next()
        .is_some_and(|line| TOKEN_FOOTER.is_match(line) || TICKET_FOOTER.is_match(line))
}

/// Extract footers from a footer block.
///
/// Returns an empty vec when the paragraph's first line is not
/// footer-shaped. Lines that match neither grammar are continuations of the
/// current footer, joined with a line feed; each footer's value is trimmed
/// when flushed.
pub(crate) fn scan(paragraph: &str) -> Vec<Footer> {
    if !is_footer_block(paragraph) {
        return Vec::new();
    }

    let mut footers = Vec::new();
    let mut current: Option<Footer> = None;

    for line in paragraph.lines() {
        if let Some(caps) = TOKEN_FOOTER.captures(line) {
            flush(&mut footers, current.take());
            current = Some(Footer::new(&caps["name"], &caps["value"]));
        } else if let Some(caps) = TICKET_FOOTER.captures(line) {
            flush(&mut footers, current.take());
            current = Some(Footer::reference(&caps["name"], &caps["value"]));
        } else if let Some(footer) = current.as_mut() {
            footer.value.push('\n');
            footer.value.push_str(line);
        }
    }
    flush(&mut footers, current);

    footers
}

fn flush(footers: &mut Vec<Footer>, current: Option<Footer>) {
    if let Some(mut footer) = current {
        footer.value = footer.value.trim().to_string();
        footers.push(footer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_a_footer() {
        assert!(scan("this is not a footer").is_empty());
    }

    #[test]
    fn test_footer_shaped_second_line_is_not_a_block() {
        assert!(scan("this is not a footer\nDone-By: John").is_empty());
        assert!(scan("this is not a footer\nFixes #42").is_empty());
        assert!(scan("this is not a footer\nBREAKING CHANGE: Oops").is_empty());
    }

    #[test]
    fn test_token_footer() {
        assert_eq!(
            scan("Reviewed-By: John Smith"),
            vec![Footer::new("Reviewed-By", "John Smith")]
        );
    }

    #[test]
    fn test_breaking_change_footer() {
        assert_eq!(
            scan("BREAKING CHANGE: Oopsy"),
            vec![Footer::new("BREAKING CHANGE", "Oopsy")]
        );
    }

    #[test]
    fn test_ticket_footer() {
        assert_eq!(scan("Fixes #82"), vec![Footer::reference("Fixes", "#82")]);
    }

    #[test]
    fn test_multiple_token_footers() {
        assert_eq!(
            scan("Reviewed-By: John\nCommitter: Smith\n"),
            vec![
                Footer::new("Reviewed-By", "John"),
                Footer::new("Committer", "Smith")
            ]
        );
    }

    #[test]
    fn test_multiple_ticket_footers() {
        assert_eq!(
            scan("Fixes #82\nFixes #74"),
            vec![
                Footer::reference("Fixes", "#82"),
                Footer::reference("Fixes", "#74")
            ]
        );
    }

    #[test]
    fn test_multiple_breaking_change_footers() {
        assert_eq!(
            scan("BREAKING CHANGE: Oopsy\nBREAKING CHANGE: Again!"),
            vec![
                Footer::new("BREAKING CHANGE", "Oopsy"),
                Footer::new("BREAKING CHANGE", "Again!")
            ]
        );
    }

    #[test]
    fn test_mixture_of_footer_forms() {
        assert_eq!(
            scan("Fixes #930\nBREAKING CHANGE: Careful!\nReviewed-By: Maria\n"),
            vec![
                Footer::reference("Fixes", "#930"),
                Footer::new("BREAKING CHANGE", "Careful!"),
                Footer::new("Reviewed-By", "Maria"),
            ]
        );
    }

    #[test]
    fn test_multi_line_footers() {
        let block = "Description: first continues\nover two lines\nFixes #94\nMisc-Other: second\ncontinues as well\nBREAKING CHANGE: third one\nalso continues\n";
        assert_eq!(
            scan(block),
            vec![
                Footer::new("Description", "first continues\nover two lines"),
                Footer::reference("Fixes", "#94"),
                Footer::new("Misc-Other", "second\ncontinues as well"),
                Footer::new("BREAKING CHANGE", "third one\nalso continues"),
            ]
        );
    }

    #[test]
    fn test_continuation_value_is_trimmed() {
        assert_eq!(
            scan("Description: value   \ncontinues   "),
            vec![Footer::new("Description", "value   \ncontinues")]
        );
    }

    #[test]
    fn test_token_form_takes_precedence_over_ticket_form() {
        // A colon footer whose value is a bare reference stays colon-form.
        assert_eq!(
            scan("Requires: #44"),
            vec![Footer::new("Requires", "#44")]
        );
    }

    #[test]
    fn test_ticket_form_requires_hash_value() {
        // `Name word` without a `#` is neither grammar.
        assert!(scan("Fixes everything").is_empty());
    }
}
