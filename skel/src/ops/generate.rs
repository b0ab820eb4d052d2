//! Generate operation - one stub per top-level declaration.

use std::{error::Error as StdError, path::Path};

use skelgen_codegen_java::{GenerateOutcome, SkipReason, StubGenerator, StubOptions};
use skelgen_model::{ClassIndex, DeclarationModel};

use crate::reports::{
    FailedClass, GenerateReport, GenerationResult, PreviewResult, SkippedClass, WrittenResult,
};

/// Options for the generate operation.
pub struct GenerateOptions {
    /// Stub rendering options, output directory included.
    pub stubs: StubOptions,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Every top-level declaration of every source unit is rendered on its
/// own; a failure is recorded in the report and the pass carries on.
pub fn generate(model: &mut DeclarationModel, opts: GenerateOptions) -> GenerateReport {
    let output_dir = opts.stubs.output_dir.clone();
    let classes = model.top_level_count();
    let mut generator = StubGenerator::new(opts.stubs, ClassIndex::from_model(model));

    let result = if opts.dry_run {
        let files = model
            .units
            .iter_mut()
            .flat_map(|unit| {
                let imports = &unit.imports;
                unit.classes
                    .iter_mut()
                    .filter_map(|class| generator.preview(class, imports))
                    .collect::<Vec<_>>()
            })
            .collect();
        GenerationResult::Preview(PreviewResult { files })
    } else {
        let mut written = WrittenResult::default();
        for unit in &mut model.units {
            for outcome in generator.generate_unit(unit) {
                match outcome.result {
                    Ok(GenerateOutcome::Written(path)) => {
                        written.written.push(relative(&path, &output_dir));
                    }
                    Ok(GenerateOutcome::Skipped(SkipReason::UnresolvedSuper)) => {
                        written.deferred.push(outcome.class);
                    }
                    Ok(GenerateOutcome::Skipped(reason)) => written.skipped.push(SkippedClass {
                        name: outcome.class,
                        reason: reason.to_string(),
                    }),
                    Err(err) => {
                        tracing::debug!(class = %outcome.class, error = %err, "stub failed");
                        written.failures.push(FailedClass {
                            name: outcome.class,
                            error: describe(&err),
                        });
                    }
                }
            }
        }
        GenerationResult::Written(written)
    };

    GenerateReport {
        output_dir,
        classes,
        result,
    }
}

fn relative(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .unwrap_or(path)
        .display()
        .to_string()
}

/// The error message followed by its causes.
fn describe(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
