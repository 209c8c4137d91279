//! Lexical classification: project raw source down to its CODE characters.
//!
//! Every character of the input lands in exactly one of four regions — code,
//! line comment, block comment, or string/template literal. Only the code
//! characters are re-emitted, paired with their original offsets, so the
//! bracket matcher never sees a bracket that lives inside a comment or a
//! string body.

/// The CODE-only projection of a source text. Comments and string bodies
/// (delimiters included) are elided entirely, not replaced by placeholders.
#[derive(Debug, Clone)]
pub struct CleanedSource {
    code: Vec<(usize, char)>,
}

impl CleanedSource {
    /// The surviving characters, each paired with its character offset in the
    /// raw source.
    pub fn chars(&self) -> &[(usize, char)] {
        &self.code
    }

    /// The cleaned text with original relative order preserved.
    pub fn text(&self) -> String {
        self.code.iter().map(|&(_, c)| c).collect()
    }

    pub fn len(&self) -> usize {
        self.code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }
}

/// Single forward pass, no backtracking.
///
/// String spans are consumed with a pending-escape flag rather than a
/// one-character lookback, so `'x\\'` terminates at the final quote.
/// An unterminated block comment or string consumes silently to end of
/// input; unterminated strings are the quote tracker's job to report.
pub fn clean_source(source: &str) -> CleanedSource {
    let chars: Vec<char> = source.chars().collect();
    let mut code = Vec::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        // Line comment: skip to end of line. The newline itself stays CODE.
        if c == '/' && i + 1 < chars.len() && chars[i + 1] == '/' {
            while i < chars.len() && chars[i] != '\n' {
                i += 1;
            }
            continue;
        }

        // Block comment: skip through the first `*/`, inclusive.
        if c == '/' && i + 1 < chars.len() && chars[i + 1] == '*' {
            i += 2;
            loop {
                if i + 1 >= chars.len() {
                    // No terminator: consume to end of input.
                    i = chars.len();
                    break;
                }
                if chars[i] == '*' && chars[i + 1] == '/' {
                    i += 2;
                    break;
                }
                i += 1;
            }
            continue;
        }

        // String or template literal: the whole span, delimiters included,
        // is excluded from the projection.
        if c == '\'' || c == '"' || c == '`' {
            let quote = c;
            let mut escaped = false;
            i += 1;
            while i < chars.len() {
                let s = chars[i];
                i += 1;
                if escaped {
                    escaped = false;
                    continue;
                }
                if s == '\\' {
                    escaped = true;
                    continue;
                }
                if s == quote {
                    break;
                }
            }
            continue;
        }

        code.push((i, c));
        i += 1;
    }

    CleanedSource { code }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_passes_through() {
        let cleaned = clean_source("const x = 1;");
        assert_eq!(cleaned.text(), "const x = 1;");
        assert_eq!(cleaned.chars()[0], (0, 'c'));
        assert_eq!(cleaned.len(), 12);
        assert!(!cleaned.is_empty());
    }

    #[test]
    fn test_string_bodies_elided() {
        let cleaned = clean_source("text = '{'; foo();");
        assert_eq!(cleaned.text(), "text = ; foo();");
    }

    #[test]
    fn test_line_comment_keeps_newline() {
        let cleaned = clean_source("a // comment with {\nb");
        assert_eq!(cleaned.text(), "a \nb");
    }

    #[test]
    fn test_block_comment_elided() {
        let cleaned = clean_source("a /* { [ ( */ b");
        assert_eq!(cleaned.text(), "a  b");
    }

    #[test]
    fn test_unterminated_block_comment_consumes_to_end() {
        let cleaned = clean_source("a /* never closed {{{");
        assert_eq!(cleaned.text(), "a ");
    }

    #[test]
    fn test_escaped_quote_stays_inside_string() {
        let cleaned = clean_source(r"x = 'it\'s fine'; y");
        assert_eq!(cleaned.text(), "x = ; y");
    }

    #[test]
    fn test_double_backslash_then_quote_terminates() {
        // The trailing quote after `\\` closes the string.
        let cleaned = clean_source(r"x = 'a\\'; y");
        assert_eq!(cleaned.text(), "x = ; y");
    }

    #[test]
    fn test_template_literal_elided() {
        let cleaned = clean_source("t = `hello {world}`; z()");
        assert_eq!(cleaned.text(), "t = ; z()");
    }

    #[test]
    fn test_comment_like_sequence_inside_string() {
        let cleaned = clean_source("u = 'http://example.com'; v");
        assert_eq!(cleaned.text(), "u = ; v");
    }

    #[test]
    fn test_offsets_are_original() {
        let cleaned = clean_source("'ab'x");
        assert_eq!(cleaned.chars(), &[(4, 'x')]);
    }

    #[test]
    fn test_unterminated_string_consumes_to_end() {
        let cleaned = clean_source("a = 'oops");
        assert_eq!(cleaned.text(), "a = ");
    }
}
