//! Header parsing
//!
//! The header grammar is `type(scope)!: subject` with every piece optional
//! except the `: ` separator. A header without the separator is not an error:
//! it degrades to a subject-only commit. Validation of the captured type and
//! scope tokens happens after matching, so an invalid token (e.g.
//! `feat/internal`) is still captured and reported as a classification error.

use regex::Regex;
use std::sync::LazyLock;

use liftoff_core::error::ParseError;

use crate::types::ParsedCommit;

/// Whitespace-tolerant header pattern. The type class is deliberately loose
/// so invalid tokens are captured for the classification error instead of
/// falling through to the subject-only fallback.
static HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(?P<type>[^():]*?)\s*(?:\(\s*(?P<scope>[^()]*?)\s*\))?\s*(?P<breaking>!)?:\s+(?P<subject>.*?)\s*$",
    )
    .expect("invalid header regex")
});

static TYPE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w-]+$").expect("invalid type token regex"));

static SCOPE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w$./\-* ]+$").expect("invalid scope token regex"));

/// Parse a single-line header into a partial commit.
///
/// Returns the best-effort commit and an optional classification error.
/// Multiple violations collapse to one reported error, type before scope.
pub(crate) fn parse_header(header: &str) -> (ParsedCommit, Option<ParseError>) {
    let Some(caps) = HEADER_REGEX.captures(header) else {
        // Not in conventional format: the whole header becomes the subject.
        return (
            ParsedCommit {
                subject: header.trim().to_string(),
                ..ParsedCommit::default()
            },
            None,
        );
    };

    let commit_type = caps.name("type").map_or("", |m| m.as_str()).to_string();
    let scope = caps
        .name("scope")
        .map(|m| m.as_str().to_string())
        .filter(|s| !s.is_empty());
    let breaking = caps.name("breaking").is_some();
    let subject = caps.name("subject").map_or("", |m| m.as_str()).to_string();

    let error = validate(&commit_type, scope.as_deref());

    (
        ParsedCommit {
            commit_type,
            scope,
            subject,
            breaking,
            ..ParsedCommit::default()
        },
        error,
    )
}

fn validate(commit_type: &str, scope: Option<&str>) -> Option<ParseError> {
    if commit_type.is_empty() {
        return Some(ParseError::TypeMissing);
    }
    if !TYPE_TOKEN.is_match(commit_type) {
        return Some(ParseError::TypeFormat {
            found: commit_type.to_string(),
        });
    }
    if let Some(scope) = scope {
        if !SCOPE_TOKEN.is_match(scope) {
            return Some(ParseError::ScopeFormat {
                found: scope.to_string(),
            });
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commit(
        commit_type: &str,
        scope: Option<&str>,
        subject: &str,
        breaking: bool,
    ) -> ParsedCommit {
        ParsedCommit {
            commit_type: commit_type.to_string(),
            scope: scope.map(String::from),
            subject: subject.to_string(),
            breaking,
            ..ParsedCommit::default()
        }
    }

    #[test]
    fn test_no_separator_degrades_to_subject() {
        let (got, err) = parse_header("add user sorting option");
        assert_eq!(got, commit("", None, "add user sorting option", false));
        assert!(err.is_none());
    }

    #[test]
    fn test_missing_type_with_scope() {
        let (got, err) = parse_header("(user): add user sorting option");
        assert_eq!(
            got,
            commit("", Some("user"), "add user sorting option", false)
        );
        assert_eq!(err, Some(ParseError::TypeMissing));
    }

    #[test]
    fn test_type_only() {
        let (got, err) = parse_header("feat: add user sorting option");
        assert_eq!(got, commit("feat", None, "add user sorting option", false));
        assert!(err.is_none());
    }

    #[test]
    fn test_type_and_scope() {
        let (got, err) = parse_header("feat(user): add user sorting option");
        assert_eq!(
            got,
            commit("feat", Some("user"), "add user sorting option", false)
        );
        assert!(err.is_none());
    }

    #[test]
    fn test_type_and_breaking() {
        let (got, err) = parse_header("feat!: add user sorting option");
        assert_eq!(got, commit("feat", None, "add user sorting option", true));
        assert!(err.is_none());
    }

    #[test]
    fn test_type_scope_and_breaking() {
        let (got, err) = parse_header("feat(user)!: add user sorting option");
        assert_eq!(
            got,
            commit("feat", Some("user"), "add user sorting option", true)
        );
        assert!(err.is_none());
    }

    #[test]
    fn test_type_with_underscore_and_hyphen() {
        let (got, err) = parse_header("int_feat: add option");
        assert_eq!(got.commit_type, "int_feat");
        assert!(err.is_none());

        let (got, err) = parse_header("int-feat: add option");
        assert_eq!(got.commit_type, "int-feat");
        assert!(err.is_none());
    }

    #[test]
    fn test_scope_character_classes() {
        for scope in ["user_sort", "user-sort", "user/sort", "user.sort", "$user", "user*", "user sort"] {
            let (got, err) = parse_header(&format!("feat({scope}): add option"));
            assert_eq!(got.scope.as_deref(), Some(scope), "scope {scope:?}");
            assert!(err.is_none(), "scope {scope:?}");
        }
    }

    #[test]
    fn test_excess_whitespace() {
        let (got, err) = parse_header("  feat  (user sort): add option");
        assert_eq!(got, commit("feat", Some("user sort"), "add option", false));
        assert!(err.is_none());

        let (got, _) = parse_header("feat(  user sort ): add option");
        assert_eq!(got.scope.as_deref(), Some("user sort"));

        let (got, _) = parse_header("feat(user):   add option  ");
        assert_eq!(got.subject, "add option");
    }

    #[test]
    fn test_empty_scope() {
        let (got, err) = parse_header("feat(): add option");
        assert_eq!(got, commit("feat", None, "add option", false));
        assert!(err.is_none());
    }

    #[test]
    fn test_invalid_type_character() {
        let (got, err) = parse_header("feat/internal: add option");
        assert_eq!(got, commit("feat/internal", None, "add option", false));
        assert_eq!(
            err,
            Some(ParseError::TypeFormat {
                found: "feat/internal".to_string()
            })
        );
    }

    #[test]
    fn test_invalid_type_character_with_scope() {
        let (got, err) = parse_header("feat/internal(user): add option");
        assert_eq!(
            got,
            commit("feat/internal", Some("user"), "add option", false)
        );
        assert!(matches!(err, Some(ParseError::TypeFormat { .. })));
    }

    #[test]
    fn test_invalid_scope_character() {
        let (got, err) = parse_header("feat(user#sort): add option");
        assert_eq!(
            got,
            commit("feat", Some("user#sort"), "add option", false)
        );
        assert_eq!(
            err,
            Some(ParseError::ScopeFormat {
                found: "user#sort".to_string()
            })
        );
    }

    #[test]
    fn test_subject_with_colon() {
        let (got, err) = parse_header("docs: update README: part 2");
        assert_eq!(got.commit_type, "docs");
        assert_eq!(got.subject, "update README: part 2");
        assert!(err.is_none());
    }
}
