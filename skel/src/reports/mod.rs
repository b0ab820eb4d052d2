//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod clean;
mod generate;
mod output;

pub use clean::CleanReport;
pub use generate::{
    FailedClass, GenerateReport, GenerationResult, PreviewResult, SkippedClass, WrittenResult,
};
pub use output::{Report, TerminalOutput};
