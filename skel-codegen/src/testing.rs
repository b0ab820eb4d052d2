//! Test utilities for stub generators.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary output directory for generated stubs.
pub struct StubDir {
    dir: TempDir,
}

impl StubDir {
    /// Create a fresh temporary directory.
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            dir: TempDir::new()?,
        })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Full path of a file relative to the directory.
    pub fn join(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.dir.path().join(relative)
    }

    /// Read a file relative to the directory, if it exists.
    pub fn read(&self, relative: impl AsRef<Path>) -> Option<String> {
        std::fs::read_to_string(self.join(relative)).ok()
    }

    /// Number of regular files anywhere under the directory.
    pub fn file_count(&self) -> usize {
        count_files(self.dir.path())
    }
}

fn count_files(dir: &Path) -> usize {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return 0;
    };
    entries
        .flatten()
        .map(|entry| {
            let path = entry.path();
            if path.is_dir() { count_files(&path) } else { 1 }
        })
        .sum()
}

/// Check that braces balance and the text ends with a single top-level close.
///
/// Braces inside string and character literals are ignored.
pub fn is_balanced(source: &str) -> bool {
    let mut depth: i64 = 0;
    let mut closed_top_level = 0;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for c in source.chars() {
        if let Some(q) = quote {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                _ if c == q => quote = None,
                _ => {}
            }
            continue;
        }
        match c {
            '"' | '\'' => quote = Some(c),
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
                if depth == 0 {
                    closed_top_level += 1;
                }
            }
            _ => {}
        }
    }

    depth == 0 && closed_top_level == 1 && source.trim_end().ends_with('}')
}
