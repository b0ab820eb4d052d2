//! Shared code generation utilities for the Skel stub generator.
//!
//! This crate provides language-agnostic abstractions used by the
//! language-specific stub generators (e.g., `skelgen-codegen-java`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`generation`] - Output management (StubRegistry, PreviewFile, etc.)
//! - [`testing`] - Test utilities (feature-gated)

pub mod builder;
pub mod generation;

#[cfg(any(test, feature = "testing"))]
pub mod testing;
