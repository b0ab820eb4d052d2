//! Java method and constructor builders.

use skelgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A parameter in a Java method or constructor.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

fn param_list(params: &[Param]) -> String {
    params
        .iter()
        .map(|p| format!("{} {}", p.ty, p.name))
        .collect::<Vec<_>>()
        .join(", ")
}

fn throws_clause(throws: &[String]) -> String {
    if throws.is_empty() {
        String::new()
    } else {
        format!(" throws {}", throws.join(", "))
    }
}

/// Body of a stub method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MethodBody {
    /// No body, the signature ends with `;`.
    Abstract,
    /// `{ }`
    Empty,
    /// `{ return <value>; }`
    Return(String),
}

/// Builder for Java methods.
#[derive(Debug, Clone)]
pub struct Method {
    name: String,
    modifiers: Vec<&'static str>,
    generics: String,
    return_type: String,
    params: Vec<Param>,
    throws: Vec<String>,
    body: MethodBody,
}

impl Method {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modifiers: Vec::new(),
            generics: String::new(),
            return_type: "void".to_string(),
            params: Vec::new(),
            throws: Vec::new(),
            body: MethodBody::Empty,
        }
    }

    pub fn modifiers(mut self, modifiers: impl IntoIterator<Item = &'static str>) -> Self {
        self.modifiers.extend(modifiers);
        self
    }

    /// Rendered generic parameter list, `<...>`.
    pub fn generics(mut self, generics: impl Into<String>) -> Self {
        self.generics = generics.into();
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = ty.into();
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn throws(mut self, exception: impl Into<String>) -> Self {
        self.throws.push(exception.into());
        self
    }

    pub fn body(mut self, body: MethodBody) -> Self {
        self.body = body;
        self
    }

    pub fn build(&self) -> String {
        let mut line = super::modifier_prefix(&self.modifiers);
        if !self.generics.is_empty() {
            line.push_str(&self.generics);
            line.push(' ');
        }
        line.push_str(&format!(
            "{} {}({}){}",
            self.return_type,
            self.name,
            param_list(&self.params),
            throws_clause(&self.throws)
        ));
        match &self.body {
            MethodBody::Abstract => line.push(';'),
            MethodBody::Empty => line.push_str(" { }"),
            MethodBody::Return(value) => line.push_str(&format!(" {{ return {}; }}", value)),
        }
        line
    }
}

impl Renderable for Method {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(self.build())]
    }
}

/// Builder for Java constructors. Stub constructors are always public.
#[derive(Debug, Clone)]
pub struct Constructor {
    class_name: String,
    params: Vec<Param>,
    throws: Vec<String>,
    delegation: Option<String>,
}

impl Constructor {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            params: Vec::new(),
            throws: Vec::new(),
            delegation: None,
        }
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn throws(mut self, exception: impl Into<String>) -> Self {
        self.throws.push(exception.into());
        self
    }

    /// The `super(...)`/`this(...)` statement opening the body.
    pub fn delegation(mut self, call: impl Into<String>) -> Self {
        self.delegation = Some(call.into());
        self
    }

    fn signature(&self) -> String {
        format!(
            "public {}({}){}",
            self.class_name,
            param_list(&self.params),
            throws_clause(&self.throws)
        )
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::java();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Constructor {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        match &self.delegation {
            None => vec![CodeFragment::Line(format!("{} {{ }}", self.signature()))],
            Some(call) => vec![CodeFragment::block(
                format!("{} {{", self.signature()),
                vec![CodeFragment::line(call.as_str())],
            )],
        }
    }
}
