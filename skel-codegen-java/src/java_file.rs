//! JavaFile abstraction for structured stub file generation.

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use skelgen_codegen::builder::CodeBuilder;
use skelgen_core::GeneratedFile;
use skelgen_model::ImportSet;

use crate::Imports;

/// A stub source file: package clause, imports and one rendered declaration.
#[derive(Debug, Clone)]
pub struct JavaFile<'a> {
    stub: PathBuf,
    package: Option<String>,
    imports: Imports<'a>,
    body: String,
}

impl<'a> JavaFile<'a> {
    /// `stub` is the path relative to the output directory, without extension.
    pub fn new(stub: impl Into<PathBuf>, imports: &'a ImportSet, body: impl Into<String>) -> Self {
        Self {
            stub: stub.into(),
            package: None,
            imports: Imports::new(imports),
            body: body.into(),
        }
    }

    pub fn package(mut self, package: Option<String>) -> Self {
        self.package = package;
        self
    }

    pub fn stub(&self) -> &Path {
        &self.stub
    }

    /// Path relative to the output directory, with extension.
    pub fn relative_path(&self) -> PathBuf {
        let mut name = OsString::from(self.stub.as_os_str());
        name.push(".java");
        PathBuf::from(name)
    }
}

impl GeneratedFile for JavaFile<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.relative_path())
    }

    fn render(&self) -> String {
        let mut builder = CodeBuilder::java();
        if let Some(package) = &self.package {
            builder
                .push_line(&format!("package {};", package))
                .push_blank();
        }
        builder.emit(&self.imports).push_raw(&self.body);
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_layout() {
        let imports = ImportSet::new().star("java.util");
        let file = JavaFile::new("geo/Pt", &imports, "public class Pt {\n}\n")
            .package(Some("geo".into()));

        assert_eq!(
            file.render(),
            "package geo;\n\nimport java.util.*;\n\npublic class Pt {\n}\n"
        );
        assert_eq!(
            file.path(Path::new("out")),
            PathBuf::from("out/geo/Pt.java")
        );
    }

    #[test]
    fn test_default_package() {
        let imports = ImportSet::new();
        let file = JavaFile::new("Pt", &imports, "class Pt {\n}\n");

        assert_eq!(file.render(), "class Pt {\n}\n");
        assert_eq!(file.relative_path(), PathBuf::from("Pt.java"));
    }
}
