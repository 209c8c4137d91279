//! Content-addressed check-result cache.
//!
//! A report is reused only while the file's content hash matches; any edit
//! changes the hash and forces a fresh check.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

use crate::checker::check_source;
use crate::report::{CheckReport, Diagnostic, DiagnosticKind};

#[derive(Serialize, Deserialize)]
pub struct CacheEntry {
    pub hash: String,
    pub report: CheckReport,
}

pub struct IncrementalCache {
    cache_dir: PathBuf,
}

impl IncrementalCache {
    pub fn new() -> Self {
        Self::with_dir(PathBuf::from(".jscheck/cache"))
    }

    pub fn with_dir(cache_dir: PathBuf) -> Self {
        if !cache_dir.exists() {
            fs::create_dir_all(&cache_dir).ok();
        }
        Self { cache_dir }
    }

    pub fn compute_hash(source: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(source.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    fn get_cache_path(&self, file_path: &str) -> PathBuf {
        // Create a stable file name for the cache entry
        let safe_name = file_path
            .replace("/", "_")
            .replace("\\", "_")
            .replace(":", "_");
        self.cache_dir.join(format!("{}.json", safe_name))
    }

    pub fn get(&self, file_path: &str, source: &str) -> Option<CheckReport> {
        let cache_path = self.get_cache_path(file_path);
        if !cache_path.exists() {
            return None;
        }

        let data = match fs::read_to_string(&cache_path) {
            Ok(d) => d,
            Err(_) => return None,
        };

        let entry: CacheEntry = match serde_json::from_str(&data) {
            Ok(e) => e,
            Err(e) => {
                eprintln!(
                    "[JsCheck] Cache deserialization failed for {}: {}",
                    file_path, e
                );
                // Invalidate corrupt cache file
                fs::remove_file(cache_path).ok();
                return None;
            }
        };

        let current_hash = Self::compute_hash(source);
        if entry.hash == current_hash {
            Some(entry.report)
        } else {
            None
        }
    }

    pub fn set(&self, file_path: &str, source: &str, report: &CheckReport) {
        let cache_path = self.get_cache_path(file_path);
        let hash = Self::compute_hash(source);
        let entry = CacheEntry {
            hash,
            report: report.clone(),
        };

        if let Ok(data) = serde_json::to_string(&entry) {
            fs::write(cache_path, data).ok();
        }
    }
}

/// Check a file through the cache. Only a content-hash hit skips the check;
/// read failures bypass the cache entirely.
pub fn check_file_cached(
    cache: &IncrementalCache,
    path: &Path,
    expected_class: &str,
) -> CheckReport {
    let key = path.display().to_string();
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            return CheckReport::fail(Diagnostic::new(
                DiagnosticKind::SourceUnavailable,
                &format!("failed to read {}: {}", path.display(), e),
            ));
        }
    };

    if let Some(report) = cache.get(&key, &source) {
        return report;
    }

    let report = check_source(&source, expected_class);
    cache.set(&key, &source, &report);
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn scratch_cache(tag: &str) -> IncrementalCache {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0);
        let dir = std::env::temp_dir().join(format!("jscheck-cache-{}-{}", tag, nanos));
        IncrementalCache::with_dir(dir)
    }

    #[test]
    fn test_hash_is_stable_and_content_sensitive() {
        let a = IncrementalCache::compute_hash("class A {}");
        let b = IncrementalCache::compute_hash("class A {}");
        let c = IncrementalCache::compute_hash("class B {}");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_roundtrip_hit_and_stale_miss() {
        let cache = scratch_cache("roundtrip");
        let source = "class A {}";
        let report = check_source(source, "A");

        cache.set("a.js", source, &report);
        let hit = cache.get("a.js", source).unwrap();
        assert!(hit.passed);

        // Edited content misses.
        assert!(cache.get("a.js", "class A {};").is_none());
        // Unknown key misses.
        assert!(cache.get("b.js", source).is_none());
    }

    #[test]
    fn test_corrupt_entry_is_evicted() {
        let cache = scratch_cache("corrupt");
        let source = "class A {}";
        cache.set("a.js", source, &check_source(source, "A"));

        let entry_path = cache.get_cache_path("a.js");
        fs::write(&entry_path, "not json").unwrap();

        assert!(cache.get("a.js", source).is_none());
        assert!(!entry_path.exists());
    }
}
