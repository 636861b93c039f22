//! Architectural Enforcement Integration Tests
//!
//! This package contains integration tests that enforce architectural principles:
//! - The core crate stays free of terminal dependencies
//! - No thread sleeps in production code (timers go through tokio)
//! - No `unwrap()`/`expect()` in production code
//! - Only the app's run loop applies actions to the companion
//!
//! The helpers here walk workspace sources and hand the tests the lines
//! that count as production code.

use std::fs;
use std::path::{Path, PathBuf};

/// Workspace root (two levels above this package)
#[must_use]
pub fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
}

/// Every `.rs` file under `dir` (relative to the workspace root), sorted
#[must_use]
pub fn rust_sources(dir: &str) -> Vec<PathBuf> {
    let root = workspace_root().join(dir);
    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().extension().and_then(|s| s.to_str()) == Some("rs"))
        .map(walkdir::DirEntry::into_path)
        .collect();
    files.sort();
    files
}

/// A production source line
#[derive(Debug, Clone)]
pub struct CodeLine {
    /// 1-based line number
    pub number: usize,
    /// Line text with any `//` comment removed
    pub code: String,
}

/// Production lines of `path`
///
/// Scanning stops at the first `#[cfg(test)]`, which by convention opens
/// the trailing test module. Comment-only lines are dropped and trailing
/// comments are cut off.
#[must_use]
pub fn production_lines(path: &Path) -> Vec<CodeLine> {
    let Ok(content) = fs::read_to_string(path) else {
        return Vec::new();
    };

    content
        .lines()
        .enumerate()
        .take_while(|(_, line)| line.trim() != "#[cfg(test)]")
        .filter_map(|(idx, line)| {
            let code = line.split("//").next().unwrap_or(line).trim();
            (!code.is_empty()).then(|| CodeLine {
                number: idx + 1,
                code: code.to_string(),
            })
        })
        .collect()
}

/// `file:line - code` for every production line in `dirs` matching `pred`
#[must_use]
pub fn find_violations(dirs: &[&str], pred: impl Fn(&str) -> bool) -> Vec<String> {
    let mut violations = Vec::new();
    for dir in dirs {
        for path in rust_sources(dir) {
            for line in production_lines(&path) {
                if pred(&line.code) {
                    violations.push(format!("{}:{} - {}", path.display(), line.number, line.code));
                }
            }
        }
    }
    violations
}
