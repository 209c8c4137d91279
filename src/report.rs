use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════════════
// DIAGNOSTIC KINDS
// ═══════════════════════════════════════════════════════════════════════════════

/// Every way a structural check can fail hard. Advisory findings (missing
/// `getInstance`, semicolon heuristics) are never diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DiagnosticKind {
    // Bracket domain
    UnmatchedCloser,
    MismatchedPair,
    UnclosedOpener,
    // Quote domain
    UnterminatedSingleQuoteString,
    UnterminatedDoubleQuoteString,
    UnterminatedTemplateLiteral,
    // Signal domain (fatal subset)
    NoClassFound,
    MissingExpectedClass,
    // I/O
    SourceUnavailable,
}

// ═══════════════════════════════════════════════════════════════════════════════
// GUARANTEES
// ═══════════════════════════════════════════════════════════════════════════════

fn get_guarantee(kind: DiagnosticKind) -> &'static str {
    match kind {
        DiagnosticKind::UnmatchedCloser => {
            "Every closing bracket pairs with an earlier opener of the same kind."
        }
        DiagnosticKind::MismatchedPair => "Bracket pairs nest without crossing.",
        DiagnosticKind::UnclosedOpener => {
            "Every opening bracket is closed before end of input."
        }
        DiagnosticKind::UnterminatedSingleQuoteString => {
            "Single-quoted strings are closed before end of input."
        }
        DiagnosticKind::UnterminatedDoubleQuoteString => {
            "Double-quoted strings are closed before end of input."
        }
        DiagnosticKind::UnterminatedTemplateLiteral => {
            "Template literals are closed before end of input."
        }
        DiagnosticKind::NoClassFound => "The source defines at least one class.",
        DiagnosticKind::MissingExpectedClass => "The source defines the expected class.",
        DiagnosticKind::SourceUnavailable => {
            "Source text is readable before any analysis begins."
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// CHECKER DIAGNOSTIC
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
    pub guarantee: String,
    /// Character offset into the raw source, when the failure has a position.
    pub offset: Option<usize>,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, message: &str) -> Self {
        Diagnostic {
            kind,
            message: message.to_string(),
            guarantee: get_guarantee(kind).to_string(),
            offset: None,
        }
    }

    pub fn at(kind: DiagnosticKind, message: &str, offset: usize) -> Self {
        Diagnostic {
            kind,
            message: message.to_string(),
            guarantee: get_guarantee(kind).to_string(),
            offset: Some(offset),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// SIGNAL REPORT
// ═══════════════════════════════════════════════════════════════════════════════

/// One `class <Name> {` definition found in the source.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassHit {
    pub name: String,
    /// Character offset of the match start.
    pub offset: usize,
}

/// Advisory lexical signals. Only the class checks (surfaced as diagnostics,
/// not here) can fail a run; every field below is informational.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalReport {
    pub classes: Vec<ClassHit>,
    pub has_get_instance: bool,
    pub has_constructor: bool,
    /// The `window.<name>` assignment target derived from the expected class.
    pub global_target: String,
    pub has_global_exposure: bool,
    pub function_like_count: usize,
}

// ═══════════════════════════════════════════════════════════════════════════════
// CHECK REPORT
// ═══════════════════════════════════════════════════════════════════════════════

/// Self-contained result of one full check over one source text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckReport {
    pub passed: bool,
    pub diagnostic: Option<Diagnostic>,
    /// Present only when all hard checks passed (later passes never run after
    /// a failure).
    pub signals: Option<SignalReport>,
    pub warnings: Vec<String>,
}

impl CheckReport {
    pub fn pass(signals: SignalReport, warnings: Vec<String>) -> Self {
        CheckReport {
            passed: true,
            diagnostic: None,
            signals: Some(signals),
            warnings,
        }
    }

    pub fn fail(diagnostic: Diagnostic) -> Self {
        CheckReport {
            passed: false,
            diagnostic: Some(diagnostic),
            signals: None,
            warnings: Vec::new(),
        }
    }
}

/// A check result tied to the file it came from, for directory runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReport {
    pub path: String,
    pub report: CheckReport,
}
