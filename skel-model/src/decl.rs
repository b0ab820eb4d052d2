//! Class and member declarations.

use serde::{Deserialize, Serialize};

use crate::{ClassType, Expression, GenericsType, Modifiers, TypeRef};

/// Kind of a type declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassKind {
    #[default]
    Class,
    Interface,
    Enum,
}

impl ClassKind {
    /// Java keyword introducing the declaration.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Enum => "enum",
        }
    }
}

/// Where a declaration sits in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nesting {
    #[default]
    TopLevel,
    /// A named class declared inside another class.
    Member,
    /// An anonymous class body.
    Anonymous,
}

/// A class, interface or enum declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassDecl {
    /// Qualified name; nested classes use `$` (`pkg.Outer$Inner`).
    pub name: String,
    #[serde(default)]
    pub package: Option<String>,
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(default)]
    pub kind: ClassKind,
    #[serde(default)]
    pub nesting: Nesting,
    /// Declared super class; `None` means "none" (the universal superclass).
    #[serde(default)]
    pub super_class: Option<ClassType>,
    #[serde(default)]
    pub interfaces: Vec<ClassType>,
    #[serde(default)]
    pub generics: Vec<GenericsType>,
    #[serde(default)]
    pub fields: Vec<FieldDecl>,
    #[serde(default)]
    pub properties: Vec<PropertyDecl>,
    #[serde(default)]
    pub methods: Vec<MethodDecl>,
    #[serde(default)]
    pub constructors: Vec<ConstructorDecl>,
    #[serde(default)]
    pub inner: Vec<ClassDecl>,
}

impl ClassDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: None,
            modifiers: Modifiers::PUBLIC,
            kind: ClassKind::Class,
            nesting: Nesting::TopLevel,
            super_class: None,
            interfaces: Vec::new(),
            generics: Vec::new(),
            fields: Vec::new(),
            properties: Vec::new(),
            methods: Vec::new(),
            constructors: Vec::new(),
            inner: Vec::new(),
        }
    }

    /// Set the package; the qualified name is left untouched.
    pub fn package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    pub fn modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn kind(mut self, kind: ClassKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn nesting(mut self, nesting: Nesting) -> Self {
        self.nesting = nesting;
        self
    }

    pub fn extends(mut self, super_class: ClassType) -> Self {
        self.super_class = Some(super_class);
        self
    }

    pub fn implements(mut self, interface: ClassType) -> Self {
        self.interfaces.push(interface);
        self
    }

    pub fn generic(mut self, generic: GenericsType) -> Self {
        self.generics.push(generic);
        self
    }

    pub fn field(mut self, field: FieldDecl) -> Self {
        self.fields.push(field);
        self
    }

    pub fn property(mut self, property: PropertyDecl) -> Self {
        self.properties.push(property);
        self
    }

    pub fn method(mut self, method: MethodDecl) -> Self {
        self.methods.push(method);
        self
    }

    pub fn constructor(mut self, constructor: ConstructorDecl) -> Self {
        self.constructors.push(constructor);
        self
    }

    pub fn inner_class(mut self, inner: ClassDecl) -> Self {
        self.inner.push(inner);
        self
    }

    pub fn is_interface(&self) -> bool {
        self.kind == ClassKind::Interface
    }

    pub fn is_enum(&self) -> bool {
        self.kind == ClassKind::Enum
    }

    pub fn is_private(&self) -> bool {
        self.modifiers.is_private()
    }

    pub fn is_nested(&self) -> bool {
        self.nesting != Nesting::TopLevel
    }

    pub fn is_anonymous(&self) -> bool {
        self.nesting == Nesting::Anonymous
    }

    /// Whether the super class is resolved; "none" counts as resolved.
    pub fn is_super_resolved(&self) -> bool {
        self.super_class.as_ref().is_none_or(|s| s.resolved)
    }

    /// Name without package prefix (`Outer$Inner` for nested classes).
    pub fn name_without_package(&self) -> &str {
        match self.name.rfind('.') {
            Some(index) => &self.name[index + 1..],
            None => &self.name,
        }
    }

    /// The name as written in the declaration header.
    pub fn simple_name(&self) -> &str {
        let name = self.name_without_package();
        match name.rfind('$') {
            Some(index) => &name[index + 1..],
            None => name,
        }
    }

    /// Whether a method with this name and arity is declared.
    pub fn declares_method(&self, name: &str, arity: usize) -> bool {
        self.methods
            .iter()
            .any(|m| m.name == name && m.parameters.len() == arity)
    }
}

/// A field declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDecl {
    pub name: String,
    pub ty: TypeRef,
    #[serde(default)]
    pub modifiers: Modifiers,
    /// Whether this field is an enum constant.
    #[serde(default)]
    pub enum_constant: bool,
}

impl FieldDecl {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            modifiers: Modifiers::empty(),
            enum_constant: false,
        }
    }

    /// An enum constant of the given enum type.
    pub fn enum_constant(name: impl Into<String>, enum_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: TypeRef::class(enum_type),
            modifiers: Modifiers::PUBLIC | Modifiers::STATIC | Modifiers::FINAL,
            enum_constant: true,
        }
    }

    pub fn modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn is_synthetic(&self) -> bool {
        self.modifiers.is_synthetic()
    }
}

/// A source-language property, from which accessor methods are materialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDecl {
    pub name: String,
    pub ty: TypeRef,
    #[serde(default = "public_modifiers")]
    pub modifiers: Modifiers,
}

fn public_modifiers() -> Modifiers {
    Modifiers::PUBLIC
}

impl PropertyDecl {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            modifiers: Modifiers::PUBLIC,
        }
    }

    pub fn modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// A method or constructor parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub ty: TypeRef,
    /// Default-value expression, for parameters that may be omitted.
    #[serde(default)]
    pub default: Option<Expression>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            default: None,
        }
    }

    pub fn with_default(mut self, default: Expression) -> Self {
        self.default = Some(default);
        self
    }

    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }
}

/// A method declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodDecl {
    pub name: String,
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(default = "TypeRef::void")]
    pub return_type: TypeRef,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub generics: Vec<GenericsType>,
    #[serde(default)]
    pub exceptions: Vec<ClassType>,
    /// Whether the source declares a body; body-less methods are abstract.
    #[serde(default = "has_body_by_default")]
    pub has_body: bool,
}

fn has_body_by_default() -> bool {
    true
}

impl MethodDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modifiers: Modifiers::PUBLIC,
            return_type: TypeRef::void(),
            parameters: Vec::new(),
            generics: Vec::new(),
            exceptions: Vec::new(),
            has_body: true,
        }
    }

    pub fn modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn returns(mut self, ty: TypeRef) -> Self {
        self.return_type = ty;
        self
    }

    pub fn param(mut self, param: Parameter) -> Self {
        self.parameters.push(param);
        self
    }

    pub fn generic(mut self, generic: GenericsType) -> Self {
        self.generics.push(generic);
        self
    }

    pub fn throws(mut self, exception: ClassType) -> Self {
        self.exceptions.push(exception);
        self
    }

    /// Mark as abstract: sets the flag and drops the body.
    pub fn abstract_(mut self) -> Self {
        self.modifiers |= Modifiers::ABSTRACT;
        self.has_body = false;
        self
    }

    pub fn is_private(&self) -> bool {
        self.modifiers.is_private()
    }

    pub fn is_synthetic(&self) -> bool {
        self.modifiers.is_synthetic()
    }

    pub fn is_abstract(&self) -> bool {
        self.modifiers.is_abstract() || !self.has_body
    }
}

/// Which constructor a delegation call targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallKind {
    Super,
    This,
}

impl CallKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Super => "super",
            Self::This => "this",
        }
    }
}

/// A `super(...)` / `this(...)` call opening a constructor body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialCall {
    pub kind: CallKind,
    #[serde(default)]
    pub arguments: Vec<Expression>,
}

impl SpecialCall {
    pub fn super_call(arguments: Vec<Expression>) -> Self {
        Self {
            kind: CallKind::Super,
            arguments,
        }
    }

    pub fn this_call(arguments: Vec<Expression>) -> Self {
        Self {
            kind: CallKind::This,
            arguments,
        }
    }
}

/// A constructor declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstructorDecl {
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub exceptions: Vec<ClassType>,
    /// First statement of the body, when it delegates to another constructor.
    #[serde(default)]
    pub first_call: Option<SpecialCall>,
}

impl ConstructorDecl {
    pub fn new(modifiers: Modifiers) -> Self {
        Self {
            modifiers,
            parameters: Vec::new(),
            exceptions: Vec::new(),
            first_call: None,
        }
    }

    pub fn param(mut self, param: Parameter) -> Self {
        self.parameters.push(param);
        self
    }

    pub fn throws(mut self, exception: ClassType) -> Self {
        self.exceptions.push(exception);
        self
    }

    pub fn delegating(mut self, call: SpecialCall) -> Self {
        self.first_call = Some(call);
        self
    }

    /// Whether this constructor can be called from a subclass in another package.
    pub fn is_accessible(&self) -> bool {
        self.modifiers.is_public() || self.modifiers.is_protected()
    }
}
