//! Java field declarations.

use skelgen_codegen::builder::{CodeFragment, Renderable};

/// A field declaration, with an initializer only where Java demands one.
#[derive(Debug, Clone)]
pub struct Field {
    modifiers: Vec<&'static str>,
    ty: String,
    name: String,
    initializer: Option<String>,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            modifiers: Vec::new(),
            ty: ty.into(),
            name: name.into(),
            initializer: None,
        }
    }

    pub fn modifiers(mut self, modifiers: impl IntoIterator<Item = &'static str>) -> Self {
        self.modifiers.extend(modifiers);
        self
    }

    pub fn initializer(mut self, value: impl Into<String>) -> Self {
        self.initializer = Some(value.into());
        self
    }

    pub fn build(&self) -> String {
        let mut line = format!(
            "{}{} {}",
            super::modifier_prefix(&self.modifiers),
            self.ty,
            self.name
        );
        if let Some(value) = &self.initializer {
            line.push_str(" = ");
            line.push_str(value);
        }
        line.push(';');
        line
    }
}

impl Renderable for Field {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(self.build())]
    }
}

/// The enum constant list, `A, B, C;`.
#[derive(Debug, Clone, Default)]
pub struct EnumConstants {
    names: Vec<String>,
}

impl EnumConstants {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn constant(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    /// The constant list; a lone `;` when there are no constants.
    pub fn build(&self) -> String {
        format!("{};", self.names.join(", "))
    }
}

impl Renderable for EnumConstants {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(self.build())]
    }
}
