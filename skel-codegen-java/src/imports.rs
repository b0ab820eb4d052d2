//! Import statements of a stub.

use skelgen_codegen::builder::{CodeFragment, Renderable};
use skelgen_core::source_name;
use skelgen_model::ImportSet;

/// The import block of a stub, rendered from a source unit's imports.
///
/// Wildcard imports come first, in declaration order, followed by
/// single-type imports.
#[derive(Debug, Clone, Copy)]
pub struct Imports<'a> {
    imports: &'a ImportSet,
}

impl<'a> Imports<'a> {
    pub fn new(imports: &'a ImportSet) -> Self {
        Self { imports }
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    /// One `import ...;` line per import.
    pub fn lines(&self) -> Vec<String> {
        let star = self.imports.star_imports.iter().map(|package| {
            format!("import {}.*;", source_name(package.trim_end_matches('.')))
        });
        let single = self
            .imports
            .imports
            .iter()
            .map(|name| format!("import {};", source_name(name)));
        star.chain(single).collect()
    }
}

impl Renderable for Imports<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.is_empty() {
            return Vec::new();
        }
        let mut fragments: Vec<CodeFragment> =
            self.lines().into_iter().map(CodeFragment::Line).collect();
        fragments.push(CodeFragment::Blank);
        fragments
    }
}
