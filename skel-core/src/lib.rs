//! Core utilities and types for the Skel stub generator.
//!
//! This crate provides the Java naming rules and file-system primitives
//! shared by the generator crates.

mod file;
mod naming;

// File operations
pub use file::{GeneratedFile, remove_empty_dirs, remove_file, write_file};
// Java naming rules
pub use naming::{
    JAVA_KEYWORDS, STATIC_INITIALIZER, is_java_identifier, is_reserved, source_name, stub_path,
};
