//! Directory discovery: find `.js` sources and check them in parallel.

use rayon::prelude::*;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::cache::{check_file_cached, IncrementalCache};
use crate::checker::check_file;
use crate::report::FileReport;

/// Recursively collect every `.js` file under `base`, sorted by path.
pub fn find_js_files(base: &Path) -> Vec<PathBuf> {
    if !base.exists() {
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = WalkDir::new(base)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .map(|ext| ext == "js")
                .unwrap_or(false)
        })
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    files
}

/// Check every `.js` file under `base` against the same expected class.
///
/// Files are independent, so the work is data-parallel. A file that cannot
/// be read gets its own `SourceUnavailable` report and never poisons the
/// rest of the run. Results come back path-sorted for deterministic output.
pub fn check_directory(
    base: &Path,
    expected_class: &str,
    cache: Option<&IncrementalCache>,
) -> Vec<FileReport> {
    let files = find_js_files(base);

    let mut reports: Vec<FileReport> = files
        .par_iter()
        .map(|path| {
            let report = match cache {
                Some(cache) => check_file_cached(cache, path, expected_class),
                None => check_file(path, expected_class),
            };
            FileReport {
                path: path.display().to_string(),
                report,
            }
        })
        .collect();

    reports.sort_by(|a, b| a.path.cmp(&b.path));
    reports
}
