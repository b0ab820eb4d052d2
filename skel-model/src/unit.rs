//! Source units and the whole declaration model.

use serde::{Deserialize, Serialize};

use crate::{ClassDecl, ConstructorDecl};

/// Imports attached to a source unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSet {
    /// Packages imported with a wildcard (`java.util` or `java.util.`).
    #[serde(default)]
    pub star_imports: Vec<String>,
    /// Qualified names of single-type imports (`java.util.Map$Entry`).
    #[serde(default)]
    pub imports: Vec<String>,
}

impl ImportSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn star(mut self, package: impl Into<String>) -> Self {
        self.star_imports.push(package.into());
        self
    }

    pub fn single(mut self, type_name: impl Into<String>) -> Self {
        self.imports.push(type_name.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.star_imports.is_empty() && self.imports.is_empty()
    }
}

/// One source file's worth of declarations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceUnit {
    #[serde(default)]
    pub imports: ImportSet,
    #[serde(default)]
    pub classes: Vec<ClassDecl>,
}

impl SourceUnit {
    pub fn new(imports: ImportSet) -> Self {
        Self {
            imports,
            classes: Vec::new(),
        }
    }

    pub fn class(mut self, class: ClassDecl) -> Self {
        self.classes.push(class);
        self
    }
}

/// A class compiled elsewhere, known only by its visible constructors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalClass {
    pub name: String,
    #[serde(default)]
    pub constructors: Vec<ConstructorDecl>,
}

impl ExternalClass {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constructors: Vec::new(),
        }
    }

    pub fn constructor(mut self, constructor: ConstructorDecl) -> Self {
        self.constructors.push(constructor);
        self
    }
}

/// The full model handed over by the front end.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeclarationModel {
    #[serde(default)]
    pub units: Vec<SourceUnit>,
    /// Dependencies compiled outside this model.
    #[serde(default)]
    pub external: Vec<ExternalClass>,
}

impl DeclarationModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unit(mut self, unit: SourceUnit) -> Self {
        self.units.push(unit);
        self
    }

    pub fn external(mut self, class: ExternalClass) -> Self {
        self.external.push(class);
        self
    }

    /// Number of top-level declarations across all units.
    pub fn top_level_count(&self) -> usize {
        self.units.iter().map(|u| u.classes.len()).sum()
    }
}
