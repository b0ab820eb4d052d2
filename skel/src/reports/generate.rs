//! Generate command report data structures.

use std::path::PathBuf;

use skelgen_codegen::generation::PreviewFile;

use super::output::{Output, Report};

/// Report data from stub generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Output directory.
    pub output_dir: PathBuf,

    /// Number of top-level declarations in the model.
    pub classes: usize,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of stub generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug, Default)]
pub struct WrittenResult {
    /// Stub paths relative to the output directory.
    pub written: Vec<String>,
    /// Declarations waiting for their super class to resolve.
    pub deferred: Vec<String>,
    /// Declarations that get no stub file of their own.
    pub skipped: Vec<SkippedClass>,
    /// Declarations whose stub could not be written.
    pub failures: Vec<FailedClass>,
}

#[derive(Debug)]
pub struct SkippedClass {
    pub name: String,
    pub reason: String,
}

#[derive(Debug)]
pub struct FailedClass {
    pub name: String,
    pub error: String,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Stubs that would be generated.
    pub files: Vec<PreviewFile>,
}

impl GenerateReport {
    /// Number of declarations whose stub could not be written.
    pub fn failure_count(&self) -> usize {
        match &self.result {
            GenerationResult::Written(written) => written.failures.len(),
            GenerationResult::Preview(_) => 0,
        }
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        for failure in &written.failures {
            out.warning(&format!("{}: {}", failure.name, failure.error));
        }

        if !written.written.is_empty() {
            out.section(&format!("Stubs ({})", written.written.len()));
            for path in &written.written {
                out.added_item(path);
            }
        }

        if !written.deferred.is_empty() {
            out.newline();
            out.section("Deferred (super class not resolved)");
            for name in &written.deferred {
                out.list_item(name);
            }
        }

        if !written.skipped.is_empty() {
            out.newline();
            out.section("Skipped");
            for skipped in &written.skipped {
                out.list_item(&format!("{} ({})", skipped.name, skipped.reason));
            }
        }

        out.newline();
        out.key_value(
            "Generated",
            &format!(
                "{} of {} declarations in {}",
                written.written.len(),
                self.classes,
                self.output_dir.display()
            ),
        );
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} stubs would be generated", preview.files.len()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    #[test]
    fn test_written_report() {
        let report = GenerateReport {
            output_dir: PathBuf::from("out"),
            classes: 4,
            result: GenerationResult::Written(WrittenResult {
                written: vec!["geo/Pt.java".into()],
                deferred: vec!["geo.Late".into()],
                skipped: vec![SkippedClass {
                    name: "geo.Hidden".into(),
                    reason: "private class".into(),
                }],
                failures: vec![FailedClass {
                    name: "geo.Bad".into(),
                    error: "Failed to write stub out/geo/Bad.java".into(),
                }],
            }),
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(report.failure_count(), 1);
        assert_eq!(
            out.lines,
            vec![
                "warning: geo.Bad: Failed to write stub out/geo/Bad.java",
                "Stubs (1):",
                "  + geo/Pt.java",
                "",
                "Deferred (super class not resolved):",
                "  - geo.Late",
                "",
                "Skipped:",
                "  - geo.Hidden (private class)",
                "",
                "Generated: 1 of 4 declarations in out",
            ]
        );
    }

    #[test]
    fn test_preview_report() {
        let report = GenerateReport {
            output_dir: PathBuf::from("out"),
            classes: 1,
            result: GenerationResult::Preview(PreviewResult {
                files: vec![PreviewFile {
                    path: "geo/Pt.java".into(),
                    content: "public class Pt {\n}\n".into(),
                }],
            }),
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(report.failure_count(), 0);
        assert_eq!(out.lines[0], "── geo/Pt.java ──");
        assert_eq!(out.lines.last().unwrap(), "1 stubs would be generated");
    }
}
