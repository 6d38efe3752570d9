//! Paragraph splitting
//!
//! A paragraph is a maximal run of non-blank lines. Splitting is idempotent:
//! re-splitting already-normalized, already-trimmed paragraph text yields the
//! same paragraphs.

/// Split a message into trimmed paragraphs.
///
/// CRLF and lone CR line endings are normalized to LF first. Paragraphs are
/// separated by one or more blank lines (lines that are empty or
/// whitespace-only); leading and trailing whitespace is trimmed from each
/// paragraph. Empty paragraphs are dropped.
pub(crate) fn paragraphs(input: &str) -> Vec<String> {
    let normalized = input.replace("\r\n", "\n").replace('\r', "\n");

    let mut result = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in normalized.lines() {
        if line.trim().is_empty() {
            flush(&mut result, &mut current);
        } else {
            current.push(line);
        }
    }
    flush(&mut result, &mut current);

    result
}

fn flush(result: &mut Vec<String>, current: &mut Vec<&str>) {
    if current.is_empty() {
        return;
    }
    let paragraph = current.join("\n").trim().to_string();
    if !paragraph.is_empty() {
        result.push(paragraph);
    }
    current.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line() {
        assert_eq!(paragraphs("hello world\n"), vec!["hello world"]);
    }

    #[test]
    fn test_multi_line() {
        assert_eq!(
            paragraphs("hello world\nthe brown fox\n"),
            vec!["hello world\nthe brown fox"]
        );
    }

    #[test]
    fn test_excess_whitespace() {
        assert_eq!(
            paragraphs(" \n hello world\nthe brown fox \n "),
            vec!["hello world\nthe brown fox"]
        );
    }

    #[test]
    fn test_multiple_paragraphs() {
        let input = "first paragraph line one\nline two\n\nsecond paragraph\n\nthird paragraph\n";
        assert_eq!(
            paragraphs(input),
            vec![
                "first paragraph line one\nline two",
                "second paragraph",
                "third paragraph"
            ]
        );
    }

    #[test]
    fn test_surrounding_whitespace() {
        let input = "\n \n   first paragraph\ncontinues here  \n\n\n  second paragraph\nends here\n \n ";
        assert_eq!(
            paragraphs(input),
            vec!["first paragraph\ncontinues here", "second paragraph\nends here"]
        );
    }

    #[test]
    fn test_crlf_separator() {
        let input = "first paragraph\r\ncontinues\r\n\r\nsecond paragraph\r\n";
        assert_eq!(
            paragraphs(input),
            vec!["first paragraph\ncontinues", "second paragraph"]
        );
    }

    #[test]
    fn test_cr_separator() {
        let input = "first paragraph\rcontinues\r\rsecond paragraph\r";
        assert_eq!(
            paragraphs(input),
            vec!["first paragraph\ncontinues", "second paragraph"]
        );
    }

    #[test]
    fn test_idempotent() {
        let input = " \nfirst paragraph\ncontinues \n\n second paragraph\n";
        let once = paragraphs(input);
        let again = paragraphs(&once.join("\n\n"));
        assert_eq!(once, again);
    }

    #[test]
    fn test_empty_input() {
        assert!(paragraphs("").is_empty());
        assert!(paragraphs(" \n \n").is_empty());
    }
}
