//! Code generation outputs and file management.
//!
//! - [`StubRegistry`] - Bookkeeping of generated stubs, with cleanup
//! - [`PreviewFile`] - Rendered file that was not written

mod registry;

pub use registry::{CleanResult, StubRegistry};

/// A generated file for preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}
