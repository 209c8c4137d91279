//! Line-based missing-semicolon heuristic. Purely advisory.

/// Line endings that never need a trailing semicolon.
const SAFE_SUFFIXES: &[&str] = &[";", "{", "}", "//", "/*", "*/", ","];

/// Line starts that are statements or comment bodies in their own right.
const SKIPPED_PREFIXES: &[&str] = &[
    "*", "//", "/*", "class", "function", "if", "for", "while", "try", "catch",
];

/// Flag lines that look like statements but do not end in a terminator.
/// Heuristic by design: whole-line string matching, no lexical state.
pub fn scan_missing_semicolons(source: &str) -> Vec<String> {
    let mut warnings = Vec::new();

    for (idx, line) in source.lines().enumerate() {
        let stripped = line.trim();
        if stripped.is_empty() {
            continue;
        }
        if SAFE_SUFFIXES.iter().any(|s| stripped.ends_with(s)) {
            continue;
        }
        if SKIPPED_PREFIXES.iter().any(|p| stripped.starts_with(p)) {
            continue;
        }

        let preview: String = stripped.chars().take(50).collect();
        warnings.push(format!(
            "line {}: possible missing semicolon - {}",
            idx + 1,
            preview
        ));
    }

    warnings
}
