//! Name index over every class the model knows about.

use indexmap::IndexMap;

use crate::{ClassDecl, ConstructorDecl, DeclarationModel, ExternalClass};

/// Where a class declaration comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassOrigin {
    /// Declared in the model itself.
    Source,
    /// Compiled outside the model.
    External,
}

/// What the index records per class.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedClass {
    pub origin: ClassOrigin,
    /// Declared constructors (empty when the class relies on the implicit one).
    pub constructors: Vec<ConstructorDecl>,
}

/// Owned lookup table from qualified name to constructor information.
///
/// The index is a snapshot: it owns its data, so declarations can be
/// mutated while the index is consulted.
#[derive(Debug, Clone, Default)]
pub struct ClassIndex {
    classes: IndexMap<String, IndexedClass>,
}

impl ClassIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index every source class (nested ones included) and external class.
    pub fn from_model(model: &DeclarationModel) -> Self {
        let mut index = Self::new();
        for class in model.units.iter().flat_map(|u| &u.classes) {
            index.insert_source(class);
        }
        for class in &model.external {
            index.insert_external(class);
        }
        tracing::debug!(classes = index.len(), "built class index");
        index
    }

    /// Index a source declaration and its nested declarations.
    pub fn insert_source(&mut self, class: &ClassDecl) {
        self.classes.insert(
            class.name.clone(),
            IndexedClass {
                origin: ClassOrigin::Source,
                constructors: class.constructors.clone(),
            },
        );
        for inner in &class.inner {
            self.insert_source(inner);
        }
    }

    /// Index an external class. Source entries with the same name win.
    pub fn insert_external(&mut self, class: &ExternalClass) {
        self.classes
            .entry(class.name.clone())
            .or_insert_with(|| IndexedClass {
                origin: ClassOrigin::External,
                constructors: class.constructors.clone(),
            });
    }

    pub fn get(&self, name: &str) -> Option<&IndexedClass> {
        self.classes.get(name)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
