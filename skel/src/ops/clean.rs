//! Clean operation - remove the stubs a model generates.

use eyre::{Context, Result};
use skelgen_codegen::generation::StubRegistry;
use skelgen_codegen_java::{Decision, StubGenerator, StubOptions};
use skelgen_core::stub_path;
use skelgen_model::{ClassIndex, DeclarationModel};

use crate::reports::CleanReport;

/// Options for the clean operation.
pub struct CleanOptions {
    /// Stub options; only the output directory and skip rules matter here.
    pub stubs: StubOptions,
    /// Whether to preview without deleting.
    pub dry_run: bool,
}

/// Execute the clean operation.
///
/// Recomputes the stub set of `model` and deletes those files. Stubs that
/// are already gone are reported, not treated as errors.
pub fn clean(model: &DeclarationModel, opts: CleanOptions) -> Result<CleanReport> {
    let mut registry = StubRegistry::new(opts.stubs.output_dir.clone(), "java");
    let generator = StubGenerator::new(opts.stubs, ClassIndex::new());

    for class in model.units.iter().flat_map(|unit| &unit.classes) {
        if generator.decide(class) == Decision::Render {
            registry.register(stub_path(&class.name));
        }
    }

    if opts.dry_run {
        return Ok(CleanReport {
            dry_run: true,
            deleted: display_all(registry.preview_clean()),
            missing: Vec::new(),
        });
    }

    let result = registry.clean().wrap_err("Failed to remove stubs")?;
    Ok(CleanReport {
        dry_run: false,
        deleted: display_all(result.deleted),
        missing: display_all(result.missing),
    })
}

fn display_all(paths: Vec<std::path::PathBuf>) -> Vec<String> {
    paths.iter().map(|p| p.display().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use skelgen_model::{ClassDecl, Modifiers, SourceUnit};
    use tempfile::TempDir;

    use super::*;
    use crate::ops::generate::{GenerateOptions, generate};

    fn model() -> DeclarationModel {
        DeclarationModel::new().unit(
            SourceUnit::default()
                .class(ClassDecl::new("geo.Pt").modifiers(Modifiers::PUBLIC))
                .class(ClassDecl::new("geo.Line").modifiers(Modifiers::PUBLIC)),
        )
    }

    fn generate_into(dir: &TempDir) {
        generate(
            &mut model(),
            GenerateOptions {
                stubs: StubOptions::new(dir.path()),
                dry_run: false,
            },
        );
    }

    #[test]
    fn test_clean_removes_generated_stubs() {
        let dir = TempDir::new().unwrap();
        generate_into(&dir);
        std::fs::write(dir.path().join("notes.txt"), "keep me").unwrap();

        let report = clean(
            &model(),
            CleanOptions {
                stubs: StubOptions::new(dir.path()),
                dry_run: false,
            },
        )
        .unwrap();

        assert_eq!(report.deleted.len(), 2);
        assert!(report.missing.is_empty());
        assert!(!dir.path().join("geo").exists());
        assert!(dir.path().join("notes.txt").exists());
    }

    #[test]
    fn test_dry_run_keeps_files() {
        let dir = TempDir::new().unwrap();
        generate_into(&dir);

        let report = clean(
            &model(),
            CleanOptions {
                stubs: StubOptions::new(dir.path()),
                dry_run: true,
            },
        )
        .unwrap();

        assert!(report.dry_run);
        assert_eq!(report.deleted.len(), 2);
        assert!(dir.path().join("geo/Pt.java").exists());
    }

    #[test]
    fn test_missing_stubs_are_reported() {
        let dir = TempDir::new().unwrap();

        let report = clean(
            &model(),
            CleanOptions {
                stubs: StubOptions::new(dir.path()),
                dry_run: false,
            },
        )
        .unwrap();

        assert!(report.deleted.is_empty());
        assert_eq!(report.missing.len(), 2);
    }
}
