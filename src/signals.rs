//! Advisory lexical signal scanning.
//!
//! Substring and regex presence checks standing in for real parsing — kept
//! deliberately shallow. Only the class checks can fail a run; every other
//! signal is informational.

use lazy_static::lazy_static;
use regex::Regex;

use crate::report::{ClassHit, Diagnostic, DiagnosticKind, SignalReport};

lazy_static! {
    static ref CLASS_REGEX: Regex = Regex::new(r"class\s+(\w+)\s*\{").unwrap();
    /// Rough shape of a function definition or method head; counted, not parsed.
    static ref FUNCTION_REGEX: Regex =
        Regex::new(r"(?:function\s+\w+|(?:async\s+)?(?:static\s+)?\w+\s*\()").unwrap();
}

/// `SurveyDataManager` → `window.surveyDataManager`. The expected class name
/// is the scanner's one configuration input, so the exposure target follows
/// from it.
fn global_target(expected_class: &str) -> String {
    let mut chars = expected_class.chars();
    match chars.next() {
        Some(first) => format!("window.{}{}", first.to_lowercase(), chars.as_str()),
        None => "window.".to_string(),
    }
}

/// Scan raw text for the expected lexical signals.
///
/// Hard failures: no class definition at all, or the expected class missing
/// from the definitions found. Everything else lands in the report as
/// advisory booleans.
pub fn scan_signals(source: &str, expected_class: &str) -> Result<SignalReport, Diagnostic> {
    let mut classes = Vec::new();
    for caps in CLASS_REGEX.captures_iter(source) {
        let name = caps.get(1).map(|m| m.as_str()).unwrap_or("");
        let byte_start = caps.get(0).map(|m| m.start()).unwrap_or(0);
        // Regex positions are byte offsets; report character offsets like
        // every other pass.
        let offset = source[..byte_start].chars().count();
        classes.push(ClassHit {
            name: name.to_string(),
            offset,
        });
    }

    if classes.is_empty() {
        return Err(Diagnostic::new(
            DiagnosticKind::NoClassFound,
            "no class definition found",
        ));
    }

    if !classes.iter().any(|hit| hit.name == expected_class) {
        return Err(Diagnostic::new(
            DiagnosticKind::MissingExpectedClass,
            &format!("expected class '{}' is not defined", expected_class),
        ));
    }

    let target = global_target(expected_class);
    Ok(SignalReport {
        has_get_instance: source.contains("getInstance"),
        has_constructor: source.contains("constructor("),
        has_global_exposure: source.contains(&target),
        global_target: target,
        function_like_count: FUNCTION_REGEX.find_iter(source).count(),
        classes,
    })
}
