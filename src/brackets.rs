//! Stack-based bracket matching over the CODE-only projection.

use crate::classify::CleanedSource;
use crate::report::{Diagnostic, DiagnosticKind};

fn expected_closer(opener: char) -> char {
    match opener {
        '{' => '}',
        '[' => ']',
        _ => ')',
    }
}

/// Check `()[]{}` nesting. Fails fast on the first structural fault.
///
/// When several openers are left unclosed at end of input, the diagnostic
/// reports the outermost (earliest) one — that is where the structural
/// damage starts, not at the most recent opener.
pub fn match_brackets(cleaned: &CleanedSource) -> Result<(), Diagnostic> {
    let mut stack: Vec<(char, usize)> = Vec::new();

    for &(offset, c) in cleaned.chars() {
        match c {
            '{' | '[' | '(' => stack.push((c, offset)),
            '}' | ']' | ')' => match stack.pop() {
                None => {
                    return Err(Diagnostic::at(
                        DiagnosticKind::UnmatchedCloser,
                        &format!("closing '{}' has no matching opener", c),
                        offset,
                    ));
                }
                Some((opener, _)) => {
                    if expected_closer(opener) != c {
                        return Err(Diagnostic::at(
                            DiagnosticKind::MismatchedPair,
                            &format!("bracket mismatch: '{}' vs '{}'", opener, c),
                            offset,
                        ));
                    }
                }
            },
            _ => {}
        }
    }

    if let Some(&(opener, offset)) = stack.first() {
        return Err(Diagnostic::at(
            DiagnosticKind::UnclosedOpener,
            &format!("unclosed '{}'", opener),
            offset,
        ));
    }

    Ok(())
}
