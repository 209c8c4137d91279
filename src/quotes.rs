//! Quote balance tracking over raw, untagged source text.
//!
//! Runs independently of the lexical classifier and is deliberately blind to
//! comments: a quote character inside `//` or `/* */` still toggles state.
//! The two validators stay simple by staying separate.

use crate::report::{Diagnostic, DiagnosticKind};

/// Report which string-literal kind, if any, is left open at end of input.
pub fn track_quotes(source: &str) -> Result<(), Diagnostic> {
    let mut in_single = false;
    let mut in_double = false;
    let mut in_template = false;
    let mut escaped = false;

    for c in source.chars() {
        if escaped {
            escaped = false;
            continue;
        }
        if c == '\\' {
            escaped = true;
            continue;
        }

        if c == '\'' && !in_double && !in_template {
            in_single = !in_single;
        } else if c == '"' && !in_single && !in_template {
            in_double = !in_double;
        } else if c == '`' && !in_single && !in_double {
            in_template = !in_template;
        }
    }

    if in_single {
        return Err(Diagnostic::new(
            DiagnosticKind::UnterminatedSingleQuoteString,
            "unterminated single-quoted string at end of input",
        ));
    }
    if in_double {
        return Err(Diagnostic::new(
            DiagnosticKind::UnterminatedDoubleQuoteString,
            "unterminated double-quoted string at end of input",
        ));
    }
    if in_template {
        return Err(Diagnostic::new(
            DiagnosticKind::UnterminatedTemplateLiteral,
            "unterminated template literal at end of input",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balanced_quotes_pass() {
        assert!(track_quotes("const a = 'x'; const b = \"y\"; const c = `z`;").is_ok());
        assert!(track_quotes("").is_ok());
    }

    #[test]
    fn test_escaped_apostrophe_passes() {
        assert!(track_quotes(r"'it\'s fine'").is_ok());
    }

    #[test]
    fn test_double_backslash_before_closer_passes() {
        assert!(track_quotes(r"'ends in backslash\\'").is_ok());
    }

    #[test]
    fn test_unterminated_single() {
        let err = track_quotes("'unterminated").unwrap_err();
        assert_eq!(err.kind, DiagnosticKind::UnterminatedSingleQuoteString);
    }

    #[test]
    fn test_unterminated_double() {
        let err = track_quotes("a = \"oops").unwrap_err();
        assert_eq!(err.kind, DiagnosticKind::UnterminatedDoubleQuoteString);
    }

    #[test]
    fn test_unterminated_template() {
        let err = track_quotes("t = `hello").unwrap_err();
        assert_eq!(err.kind, DiagnosticKind::UnterminatedTemplateLiteral);
    }

    #[test]
    fn test_quotes_nested_in_other_kind_are_inert() {
        assert!(track_quotes("\"single ' inside double\"").is_ok());
        assert!(track_quotes("`both ' and \" inside template`").is_ok());
    }

    #[test]
    fn test_comment_blindness_is_preserved() {
        // The tracker operates on raw text, so the apostrophe in the comment
        // opens a single-quote region nothing ever closes.
        let err = track_quotes("// don't\ncode();").unwrap_err();
        assert_eq!(err.kind, DiagnosticKind::UnterminatedSingleQuoteString);
    }

    #[test]
    fn test_other_kinds_stay_inert_inside_open_region() {
        // The double quote and backtick fall inside the open single-quote
        // region and never toggle their own state.
        let err = track_quotes("' \" `").unwrap_err();
        assert_eq!(err.kind, DiagnosticKind::UnterminatedSingleQuoteString);
    }
}
