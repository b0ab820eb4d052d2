//! Stub generator: decides, renders and writes one file per top-level class.

use std::{fmt, path::PathBuf};

use eyre::Result as EyreResult;
use skelgen_codegen::{
    builder::CodeBuilder,
    generation::{CleanResult, PreviewFile, StubRegistry},
};
use skelgen_core::{GeneratedFile, stub_path};
use skelgen_model::{
    ClassDecl, ClassIndex, ImportSet, SourceUnit,
    transform::{NormalizationTransform, StandardNormalizer},
};

use crate::{
    CallStrategy, DEFAULT_STRATEGIES, Error, JavaFile, JavaTypeMapper, Result,
    printer::DeclarationPrinter,
};

/// Options controlling stub generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubOptions {
    /// Directory the stubs are written under.
    pub output_dir: PathBuf,
    /// Render generics; `false` renders erased types.
    pub generics: bool,
    /// Defer classes whose super class is not resolved yet.
    pub require_super_resolved: bool,
}

impl StubOptions {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            generics: true,
            require_super_resolved: false,
        }
    }

    pub fn generics(mut self, generics: bool) -> Self {
        self.generics = generics;
        self
    }

    pub fn require_super_resolved(mut self, require: bool) -> Self {
        self.require_super_resolved = require;
        self
    }
}

/// Why a declaration produces no stub file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The super class is unresolved; retry once it resolves.
    UnresolvedSuper,
    /// Rendered inside its owner's stub.
    Nested,
    /// Never rendered.
    Anonymous,
    /// Only visible within its own source file.
    Private,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::UnresolvedSuper => "super class not resolved",
            Self::Nested => "nested class",
            Self::Anonymous => "anonymous class",
            Self::Private => "private class",
        };
        f.write_str(reason)
    }
}

/// Whether a declaration gets its own stub file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Skip(SkipReason),
    Render,
}

/// Result of generating one declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    Written(PathBuf),
    Skipped(SkipReason),
}

/// Per-class result of [`StubGenerator::generate_unit`].
#[derive(Debug)]
pub struct ClassOutcome {
    pub class: String,
    pub result: Result<GenerateOutcome>,
}

/// Java stub generator.
///
/// Stateless apart from the registry of files it wrote, which
/// [`clean`](Self::clean) deletes again.
pub struct StubGenerator {
    options: StubOptions,
    types: JavaTypeMapper,
    index: ClassIndex,
    transform: Box<dyn NormalizationTransform>,
    strategies: Vec<&'static dyn CallStrategy>,
    registry: StubRegistry,
}

impl StubGenerator {
    /// Create a generator using the standard normalization transform.
    pub fn new(options: StubOptions, index: ClassIndex) -> Self {
        let registry = StubRegistry::new(options.output_dir.clone(), "java");
        Self {
            types: JavaTypeMapper::new(options.generics),
            options,
            index,
            transform: Box::new(StandardNormalizer::new()),
            strategies: DEFAULT_STRATEGIES.to_vec(),
            registry,
        }
    }

    /// Use the front end's own normalization transform.
    pub fn with_transform(mut self, transform: Box<dyn NormalizationTransform>) -> Self {
        self.transform = transform;
        self
    }

    /// Replace the constructor call strategies, in priority order.
    pub fn with_strategies(mut self, strategies: Vec<&'static dyn CallStrategy>) -> Self {
        self.strategies = strategies;
        self
    }

    pub fn options(&self) -> &StubOptions {
        &self.options
    }

    pub fn registry(&self) -> &StubRegistry {
        &self.registry
    }

    /// Decide whether `class` gets its own stub file.
    pub fn decide(&self, class: &ClassDecl) -> Decision {
        if self.options.require_super_resolved && !class.is_super_resolved() {
            return Decision::Skip(SkipReason::UnresolvedSuper);
        }
        if class.is_anonymous() {
            return Decision::Skip(SkipReason::Anonymous);
        }
        if class.is_nested() {
            return Decision::Skip(SkipReason::Nested);
        }
        if class.is_private() {
            return Decision::Skip(SkipReason::Private);
        }
        Decision::Render
    }

    fn printer(&self) -> DeclarationPrinter<'_> {
        DeclarationPrinter {
            types: self.types,
            index: &self.index,
            transform: self.transform.as_ref(),
            strategies: &self.strategies,
        }
    }

    #[tracing::instrument(level = "debug", skip_all, fields(class = %class.name))]
    fn java_file<'i>(&self, class: &mut ClassDecl, imports: &'i ImportSet) -> JavaFile<'i> {
        let mut body = CodeBuilder::java();
        self.printer().print(class, &mut body);
        JavaFile::new(stub_path(&class.name), imports, body.build()).package(package_of(class))
    }

    /// Render the stub for `class`, or `None` if it is skipped.
    pub fn render(&self, class: &mut ClassDecl, imports: &ImportSet) -> Option<String> {
        match self.decide(class) {
            Decision::Skip(_) => None,
            Decision::Render => Some(self.java_file(class, imports).render()),
        }
    }

    /// Render the stub for `class` without touching the file system.
    pub fn preview(&self, class: &mut ClassDecl, imports: &ImportSet) -> Option<PreviewFile> {
        if self.decide(class) != Decision::Render {
            return None;
        }
        let file = self.java_file(class, imports);
        Some(PreviewFile {
            path: file.relative_path().display().to_string(),
            content: file.render(),
        })
    }

    /// Write the stub for `class` and register it.
    ///
    /// A file that could not be written completely is removed and not
    /// registered.
    pub fn generate(
        &mut self,
        class: &mut ClassDecl,
        imports: &ImportSet,
    ) -> Result<GenerateOutcome> {
        if let Decision::Skip(reason) = self.decide(class) {
            tracing::debug!(class = %class.name, %reason, "skipped class");
            return Ok(GenerateOutcome::Skipped(reason));
        }

        let file = self.java_file(class, imports);
        let base = &self.options.output_dir;
        let path = file.write(base).map_err(|source| Error::Write {
            path: file.path(base),
            source,
        })?;
        self.registry.register(file.stub());
        tracing::debug!(class = %class.name, path = %path.display(), "wrote stub");
        Ok(GenerateOutcome::Written(path))
    }

    /// Generate every top-level class of `unit`; failures do not stop the rest.
    pub fn generate_unit(&mut self, unit: &mut SourceUnit) -> Vec<ClassOutcome> {
        let SourceUnit { imports, classes } = unit;
        classes
            .iter_mut()
            .map(|class| ClassOutcome {
                class: class.name.clone(),
                result: self.generate(class, &*imports),
            })
            .collect()
    }

    /// Paths [`clean`](Self::clean) would delete.
    pub fn preview_clean(&self) -> Vec<PathBuf> {
        self.registry.preview_clean()
    }

    /// Delete every stub this generator wrote.
    pub fn clean(&mut self) -> EyreResult<CleanResult> {
        self.registry.clean()
    }
}

fn package_of(class: &ClassDecl) -> Option<String> {
    class
        .package
        .clone()
        .or_else(|| class.name.rfind('.').map(|i| class.name[..i].to_string()))
}

#[cfg(test)]
mod tests {
    use skelgen_model::{ClassType, Modifiers, Nesting};

    use super::*;

    fn generator() -> StubGenerator {
        StubGenerator::new(StubOptions::new("out"), ClassIndex::new())
    }

    #[test]
    fn test_decide() {
        let generator = generator();

        assert_eq!(generator.decide(&ClassDecl::new("a.A")), Decision::Render);
        assert_eq!(
            generator.decide(&ClassDecl::new("a.A").modifiers(Modifiers::PRIVATE)),
            Decision::Skip(SkipReason::Private)
        );
        assert_eq!(
            generator.decide(&ClassDecl::new("a.A$B").nesting(Nesting::Member)),
            Decision::Skip(SkipReason::Nested)
        );
        assert_eq!(
            generator.decide(&ClassDecl::new("a.A$1").nesting(Nesting::Anonymous)),
            Decision::Skip(SkipReason::Anonymous)
        );
    }

    #[test]
    fn test_unresolved_super_only_deferred_on_request() {
        let class = ClassDecl::new("a.A").extends(ClassType::unresolved("a.Base"));

        assert_eq!(generator().decide(&class), Decision::Render);

        let strict = StubGenerator::new(
            StubOptions::new("out").require_super_resolved(true),
            ClassIndex::new(),
        );
        assert_eq!(
            strict.decide(&class),
            Decision::Skip(SkipReason::UnresolvedSuper)
        );
    }

    #[test]
    fn test_package_falls_back_to_name_prefix() {
        assert_eq!(package_of(&ClassDecl::new("a.b.C")).as_deref(), Some("a.b"));
        assert_eq!(package_of(&ClassDecl::new("C")), None);
        assert_eq!(
            package_of(&ClassDecl::new("C").package("x")).as_deref(),
            Some("x")
        );
    }

    #[test]
    fn test_preview_path() {
        let mut class = ClassDecl::new("geo.Pt");
        let preview = generator().preview(&mut class, &ImportSet::new()).unwrap();

        assert_eq!(
            preview.path,
            PathBuf::from("geo/Pt.java").display().to_string()
        );
        assert!(
            preview
                .content
                .starts_with("package geo;\n\npublic class Pt")
        );
    }
}
