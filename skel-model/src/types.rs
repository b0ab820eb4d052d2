//! Type references.

use serde::{Deserialize, Serialize};

/// Qualified name of the universal superclass.
pub const OBJECT: &str = "java.lang.Object";

/// Qualified name of the string type.
pub const STRING: &str = "java.lang.String";

/// Reference types that never carry generic arguments.
const NON_GENERIC: &[&str] = &[
    OBJECT,
    STRING,
    "java.lang.Boolean",
    "java.lang.Character",
    "java.lang.Byte",
    "java.lang.Short",
    "java.lang.Integer",
    "java.lang.Long",
    "java.lang.Float",
    "java.lang.Double",
    "java.lang.Void",
    "java.lang.Number",
    "java.math.BigInteger",
    "java.math.BigDecimal",
];

/// Primitive types, including the `void` pseudo-type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveType {
    Boolean,
    Char,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    Void,
}

impl PrimitiveType {
    /// Java keyword for this primitive.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Char => "char",
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::Void => "void",
        }
    }
}

/// A reference to a named class, interface or enum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassType {
    /// Qualified name; nested classes use `$` (`pkg.Outer$Inner`).
    pub name: String,
    /// Generic arguments applied to the type.
    #[serde(default)]
    pub generics: Vec<GenericsType>,
    /// Whether the front end has resolved this reference.
    #[serde(default = "resolved_by_default")]
    pub resolved: bool,
}

fn resolved_by_default() -> bool {
    true
}

impl ClassType {
    /// Create a resolved reference.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            generics: Vec::new(),
            resolved: true,
        }
    }

    /// Create a reference the front end has not resolved yet.
    pub fn unresolved(name: impl Into<String>) -> Self {
        Self {
            resolved: false,
            ..Self::new(name)
        }
    }

    /// `java.lang.Object`.
    pub fn object() -> Self {
        Self::new(OBJECT)
    }

    /// `java.lang.String`.
    pub fn string() -> Self {
        Self::new(STRING)
    }

    /// Add a generic argument.
    pub fn generic(mut self, arg: GenericsType) -> Self {
        self.generics.push(arg);
        self
    }

    /// Whether this is exactly `java.lang.Object`.
    pub fn is_object(&self) -> bool {
        self.name == OBJECT
    }

    /// Whether this type is known never to take generic arguments.
    pub fn is_well_known_non_generic(&self) -> bool {
        NON_GENERIC.contains(&self.name.as_str())
    }
}

/// A type reference as attached to fields, parameters and return types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeRef {
    /// A primitive or `void`.
    Primitive(PrimitiveType),
    /// A class, interface or enum reference.
    Class(ClassType),
    /// An array of the component type.
    Array(Box<TypeRef>),
    /// A generic placeholder (`T`), with the type it erases to.
    Placeholder { name: String, erasure: ClassType },
}

impl TypeRef {
    pub fn primitive(ty: PrimitiveType) -> Self {
        Self::Primitive(ty)
    }

    pub fn boolean() -> Self {
        Self::Primitive(PrimitiveType::Boolean)
    }

    pub fn int() -> Self {
        Self::Primitive(PrimitiveType::Int)
    }

    pub fn long() -> Self {
        Self::Primitive(PrimitiveType::Long)
    }

    pub fn double() -> Self {
        Self::Primitive(PrimitiveType::Double)
    }

    pub fn void() -> Self {
        Self::Primitive(PrimitiveType::Void)
    }

    pub fn object() -> Self {
        Self::Class(ClassType::object())
    }

    pub fn string() -> Self {
        Self::Class(ClassType::string())
    }

    /// A resolved class reference by qualified name.
    pub fn class(name: impl Into<String>) -> Self {
        Self::Class(ClassType::new(name))
    }

    pub fn array(component: TypeRef) -> Self {
        Self::Array(Box::new(component))
    }

    /// A placeholder erasing to `java.lang.Object`.
    pub fn placeholder(name: impl Into<String>) -> Self {
        Self::Placeholder {
            name: name.into(),
            erasure: ClassType::object(),
        }
    }

    /// A placeholder erasing to the given bound.
    pub fn bounded_placeholder(name: impl Into<String>, erasure: ClassType) -> Self {
        Self::Placeholder {
            name: name.into(),
            erasure,
        }
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive(p) if *p != PrimitiveType::Void)
    }

    pub fn is_void(&self) -> bool {
        matches!(self, Self::Primitive(PrimitiveType::Void))
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, Self::Primitive(PrimitiveType::Boolean))
    }

    /// Whether this is exactly `java.lang.Object` (placeholders do not count).
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Class(class) if class.is_object())
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Self::Class(class) if class.name == STRING)
    }
}

/// A generic parameter declaration or a generic argument.
///
/// Declarations use a placeholder name with optional bounds (`T extends Number`);
/// arguments use a concrete type (`String`) or the wildcard placeholder `?`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenericsType {
    /// Placeholder name (`T`, `?`); ignored for concrete arguments.
    #[serde(default)]
    pub name: String,
    /// Concrete argument type, when this is not a placeholder.
    #[serde(default)]
    pub ty: Option<TypeRef>,
    #[serde(default)]
    pub upper_bounds: Vec<TypeRef>,
    #[serde(default)]
    pub lower_bound: Option<TypeRef>,
}

impl GenericsType {
    /// A placeholder declaration or use (`T`).
    pub fn placeholder(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: None,
            upper_bounds: Vec::new(),
            lower_bound: None,
        }
    }

    /// The wildcard `?`.
    pub fn wildcard() -> Self {
        Self::placeholder("?")
    }

    /// A concrete generic argument.
    pub fn of(ty: TypeRef) -> Self {
        Self {
            name: String::new(),
            ty: Some(ty),
            upper_bounds: Vec::new(),
            lower_bound: None,
        }
    }

    /// Add an upper bound (`extends`).
    pub fn extends(mut self, bound: TypeRef) -> Self {
        self.upper_bounds.push(bound);
        self
    }

    /// Set the lower bound (`super`).
    pub fn super_bound(mut self, bound: TypeRef) -> Self {
        self.lower_bound = Some(bound);
        self
    }

    pub fn is_placeholder(&self) -> bool {
        self.ty.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_keywords() {
        assert_eq!(PrimitiveType::Boolean.keyword(), "boolean");
        assert_eq!(PrimitiveType::Int.keyword(), "int");
        assert_eq!(PrimitiveType::Void.keyword(), "void");
    }

    #[test]
    fn test_void_is_not_a_value_primitive() {
        assert!(TypeRef::int().is_primitive());
        assert!(!TypeRef::void().is_primitive());
        assert!(TypeRef::void().is_void());
    }

    #[test]
    fn test_placeholder_is_not_object() {
        assert!(TypeRef::object().is_object());
        assert!(!TypeRef::placeholder("T").is_object());
    }

    #[test]
    fn test_well_known_non_generic() {
        assert!(ClassType::string().is_well_known_non_generic());
        assert!(!ClassType::new("java.util.List").is_well_known_non_generic());
    }

    #[test]
    fn test_class_type_defaults_to_resolved() {
        let ty: ClassType = serde_json::from_str(r#"{"name": "a.B"}"#).unwrap();
        assert!(ty.resolved);
        assert!(ty.generics.is_empty());
    }

    #[test]
    fn test_type_ref_json_shape() {
        let ty: TypeRef = serde_json::from_str(r#"{"array": {"primitive": "int"}}"#).unwrap();
        assert_eq!(ty, TypeRef::array(TypeRef::int()));
    }
}
