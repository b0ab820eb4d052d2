//! Registry of generated stubs.
//!
//! The registry records every stub a generator wrote, as a path relative to
//! the output directory and without extension, so that a later pass can
//! delete exactly those files.
//!
//! # Example
//!
//! ```ignore
//! let mut registry = StubRegistry::new(&output_dir, "java");
//! registry.register("geo/Pt");
//!
//! // Later: delete geo/Pt.java
//! registry.clean()?;
//! ```

use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use indexmap::IndexSet;
use skelgen_core::{remove_empty_dirs, remove_file};

/// Result of cleaning registered stubs
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CleanResult {
    /// Stubs that were deleted
    pub deleted: Vec<PathBuf>,
    /// Stubs that were registered but no longer on disk
    pub missing: Vec<PathBuf>,
}

/// Bookkeeping of generated stub files.
#[derive(Debug, Clone)]
pub struct StubRegistry {
    base: PathBuf,
    extension: String,
    stubs: IndexSet<PathBuf>,
}

impl StubRegistry {
    /// Create an empty registry for stubs under `base` with the given extension.
    pub fn new(base: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            extension: extension.into(),
            stubs: IndexSet::new(),
        }
    }

    /// Output directory the stubs live in.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Register a stub by its relative path without extension.
    ///
    /// Returns `false` if the stub was already registered.
    pub fn register(&mut self, stub: impl Into<PathBuf>) -> bool {
        self.stubs.insert(stub.into())
    }

    /// Check if a stub is registered.
    pub fn contains(&self, stub: impl AsRef<Path>) -> bool {
        self.stubs.contains(stub.as_ref())
    }

    /// Registered stubs in registration order.
    pub fn stubs(&self) -> impl Iterator<Item = &Path> {
        self.stubs.iter().map(PathBuf::as_path)
    }

    /// Full path of a stub file.
    pub fn full_path(&self, stub: &Path) -> PathBuf {
        let mut path = self.base.join(stub);
        let mut file_name = path.file_name().unwrap_or_default().to_os_string();
        file_name.push(".");
        file_name.push(&self.extension);
        path.set_file_name(file_name);
        path
    }

    /// Get the number of registered stubs.
    pub fn len(&self) -> usize {
        self.stubs.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.stubs.is_empty()
    }

    /// Full paths that [`clean`](Self::clean) would delete.
    pub fn preview_clean(&self) -> Vec<PathBuf> {
        self.stubs()
            .map(|stub| self.full_path(stub))
            .filter(|path| path.exists())
            .collect()
    }

    /// Delete every registered stub and empty the registry.
    ///
    /// Stubs already gone are reported as missing. Directories left empty
    /// are removed up to the output directory.
    pub fn clean(&mut self) -> Result<CleanResult> {
        let mut result = CleanResult::default();

        for stub in &self.stubs {
            let path = self.full_path(stub);
            let removed = remove_file(&path)
                .wrap_err_with(|| format!("Failed to remove {}", path.display()))?;
            if removed {
                if let Some(parent) = path.parent() {
                    self.prune(parent);
                }
                result.deleted.push(path);
            } else {
                result.missing.push(path);
            }
        }

        tracing::debug!(
            deleted = result.deleted.len(),
            missing = result.missing.len(),
            "cleaned stub registry"
        );
        self.stubs.clear();
        Ok(result)
    }

    /// Remove `dir` and its ancestors while empty. Failures leave the
    /// directories in place.
    fn prune(&self, dir: &Path) {
        if let Err(err) = remove_empty_dirs(dir, &self.base) {
            tracing::debug!(
                dir = %dir.display(),
                error = %err,
                "could not remove empty directories"
            );
        }
    }
}
