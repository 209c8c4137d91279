//! # JsCheck Native (Structural Source Checker)
//!
//! Lightweight structural validation for JavaScript sources. No AST, no
//! semantics — pass/fail plus positional diagnostics and advisory signals.
//!
//! ## Structural Invariants
//!
//! 1. **Classification Exclusivity**: every character of the input belongs to
//!    exactly one region — CODE, line comment, block comment, or string
//!    literal. The classifier re-emits CODE characters only.
//!
//! 2. **Bracket Blindness**: the bracket matcher operates on the CODE
//!    projection alone. A bracket inside a comment or string can never affect
//!    balance.
//!
//! 3. **Outermost-First Reporting**: when several openers are unclosed at end
//!    of input, the diagnostic names the earliest (bottom-of-stack) one.
//!
//! 4. **Quote Tracker Independence**: quote balance runs over the raw text
//!    and deliberately ignores comment state. The two validators never share
//!    state.
//!
//! 5. **Fail-Fast Ordering**: checks run brackets → quotes → signals and stop
//!    at the first hard failure. Advisory findings never change pass/fail.
//!
//! 6. **Purity**: every check is a pure function of its input text. No
//!    module-level state survives between invocations.

#[cfg(feature = "napi")]
use napi_derive::napi;

mod brackets;
mod cache;
mod checker;
mod classify;
mod discovery;
mod quotes;
mod report;
mod semicolons;
mod signals;


pub use brackets::match_brackets;
pub use cache::{check_file_cached, CacheEntry, IncrementalCache};
pub use checker::{check_file, check_source};
pub use classify::{clean_source, CleanedSource};
pub use discovery::{check_directory, find_js_files};
pub use quotes::track_quotes;
pub use report::*;
pub use semicolons::scan_missing_semicolons;
pub use signals::scan_signals;

// ═══════════════════════════════════════════════════════════════════════════════
// NAPI ENTRY POINTS
// ═══════════════════════════════════════════════════════════════════════════════

#[cfg(feature = "napi")]
#[napi]
pub fn check_source_native(source: String, expected_class: String) -> serde_json::Value {
    let report = checker::check_source(&source, &expected_class);
    serde_json::to_value(report).unwrap_or(serde_json::Value::Null)
}

#[cfg(feature = "napi")]
#[napi]
pub fn check_file_native(path: String, expected_class: String) -> serde_json::Value {
    let report = checker::check_file(std::path::Path::new(&path), &expected_class);
    serde_json::to_value(report).unwrap_or(serde_json::Value::Null)
}

#[cfg(feature = "napi")]
#[napi]
pub fn check_directory_native(
    base_dir: String,
    expected_class: String,
    use_cache: bool,
) -> serde_json::Value {
    let cache = if use_cache {
        Some(cache::IncrementalCache::new())
    } else {
        None
    };
    let reports = discovery::check_directory(
        std::path::Path::new(&base_dir),
        &expected_class,
        cache.as_ref(),
    );
    serde_json::to_value(reports).unwrap_or(serde_json::Value::Null)
}

#[cfg(feature = "napi")]
#[napi]
pub fn checker_bridge() -> String {
    "JsCheck Native Bridge Connected".to_string()
}
