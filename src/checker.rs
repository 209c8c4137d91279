//! Check orchestration: fixed-order structural passes with short-circuit.

use std::fs;
use std::path::Path;

use crate::brackets::match_brackets;
use crate::classify::clean_source;
use crate::quotes::track_quotes;
use crate::report::{CheckReport, Diagnostic, DiagnosticKind};
use crate::semicolons::scan_missing_semicolons;
use crate::signals::scan_signals;

/// Run the full structural check over one source text.
///
/// Pass order is fixed: brackets, then quotes, then signals. The first hard
/// failure stops the run; later passes never execute. Advisory semicolon
/// warnings are gathered only once everything passed. Pure function of its
/// inputs — no state survives between calls.
pub fn check_source(source: &str, expected_class: &str) -> CheckReport {
    let cleaned = clean_source(source);
    if let Err(diagnostic) = match_brackets(&cleaned) {
        return CheckReport::fail(diagnostic);
    }

    if let Err(diagnostic) = track_quotes(source) {
        return CheckReport::fail(diagnostic);
    }

    let signals = match scan_signals(source, expected_class) {
        Ok(signals) => signals,
        Err(diagnostic) => return CheckReport::fail(diagnostic),
    };

    CheckReport::pass(signals, scan_missing_semicolons(source))
}

/// Load a file and check it. A read failure is reported as
/// `SourceUnavailable` before any lexical analysis begins.
pub fn check_file(path: &Path, expected_class: &str) -> CheckReport {
    match fs::read_to_string(path) {
        Ok(source) => check_source(&source, expected_class),
        Err(e) => CheckReport::fail(Diagnostic::new(
            DiagnosticKind::SourceUnavailable,
            &format!("failed to read {}: {}", path.display(), e),
        )),
    }
}
