//! Java type rendering.

use skelgen_core::source_name;
use skelgen_model::{ClassType, GenericsType, TypeRef};

/// Renders type references as Java syntax.
///
/// With generics disabled, placeholders render as their erasure and no
/// argument lists or bounds are emitted.
#[derive(Debug, Clone, Copy)]
pub struct JavaTypeMapper {
    generics: bool,
}

impl JavaTypeMapper {
    pub fn new(generics: bool) -> Self {
        Self { generics }
    }

    /// Mapper for the erased (pre-generics) dialect.
    pub fn erased() -> Self {
        Self::new(false)
    }

    pub fn generics_enabled(&self) -> bool {
        self.generics
    }

    pub fn render(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Primitive(primitive) => primitive.keyword().to_string(),
            TypeRef::Class(class) => self.render_class_type(class),
            TypeRef::Array(component) => format!("{}[]", self.render(component)),
            TypeRef::Placeholder { name, .. } if self.generics => name.clone(),
            TypeRef::Placeholder { erasure, .. } => self.render_class_type(erasure),
        }
    }

    pub fn render_class_type(&self, class: &ClassType) -> String {
        let name = source_name(&class.name);
        if !self.generics || class.is_well_known_non_generic() {
            return name;
        }
        format!("{}{}", name, self.render_generics(&class.generics))
    }

    /// Render a generic parameter or argument list, `<...>`.
    ///
    /// Empty when the list is empty or generics are disabled.
    pub fn render_generics(&self, generics: &[GenericsType]) -> String {
        if !self.generics || generics.is_empty() {
            return String::new();
        }
        let rendered: Vec<String> = generics
            .iter()
            .map(|g| self.render_generics_type(g))
            .collect();
        format!("<{}>", rendered.join(", "))
    }

    pub fn render_generics_type(&self, generic: &GenericsType) -> String {
        let mut out = match &generic.ty {
            Some(ty) => self.render(ty),
            None => generic.name.clone(),
        };
        if !generic.upper_bounds.is_empty() {
            let bounds: Vec<String> = generic
                .upper_bounds
                .iter()
                .map(|b| self.render(b))
                .collect();
            out.push_str(" extends ");
            out.push_str(&bounds.join(" & "));
        } else if let Some(lower) = &generic.lower_bound {
            out.push_str(" super ");
            out.push_str(&self.render(lower));
        }
        out
    }
}

impl Default for JavaTypeMapper {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use skelgen_model::PrimitiveType;

    use super::*;

    fn list_of(arg: GenericsType) -> TypeRef {
        TypeRef::Class(ClassType::new("java.util.List").generic(arg))
    }

    #[test]
    fn test_primitives_and_arrays() {
        let mapper = JavaTypeMapper::default();
        assert_eq!(mapper.render(&TypeRef::int()), "int");
        assert_eq!(
            mapper.render(&TypeRef::primitive(PrimitiveType::Char)),
            "char"
        );
        assert_eq!(
            mapper.render(&TypeRef::array(TypeRef::array(TypeRef::double()))),
            "double[][]"
        );
    }

    #[test]
    fn test_nested_names_use_dots() {
        let mapper = JavaTypeMapper::default();
        assert_eq!(
            mapper.render(&TypeRef::class("java.util.Map$Entry")),
            "java.util.Map.Entry"
        );
    }

    #[test]
    fn test_generic_arguments() {
        let mapper = JavaTypeMapper::default();
        let ty = TypeRef::Class(
            ClassType::new("java.util.Map")
                .generic(GenericsType::of(TypeRef::string()))
                .generic(GenericsType::placeholder("V")),
        );
        assert_eq!(mapper.render(&ty), "java.util.Map<java.lang.String, V>");
    }

    #[test]
    fn test_wildcard_bounds() {
        let mapper = JavaTypeMapper::default();
        let upper = list_of(GenericsType::wildcard().extends(TypeRef::class("java.lang.Number")));
        let lower =
            list_of(GenericsType::wildcard().super_bound(TypeRef::class("java.lang.Integer")));

        assert_eq!(
            mapper.render(&upper),
            "java.util.List<? extends java.lang.Number>"
        );
        assert_eq!(
            mapper.render(&lower),
            "java.util.List<? super java.lang.Integer>"
        );
    }

    #[test]
    fn test_multiple_upper_bounds() {
        let mapper = JavaTypeMapper::default();
        let generic = GenericsType::placeholder("T")
            .extends(TypeRef::class("java.lang.Number"))
            .extends(TypeRef::class("java.lang.Comparable"));
        assert_eq!(
            mapper.render_generics(&[generic]),
            "<T extends java.lang.Number & java.lang.Comparable>"
        );
    }

    #[test]
    fn test_well_known_types_drop_arguments() {
        let mapper = JavaTypeMapper::default();
        let ty = TypeRef::Class(ClassType::string().generic(GenericsType::placeholder("T")));
        assert_eq!(mapper.render(&ty), "java.lang.String");
    }

    #[test]
    fn test_erased_mode() {
        let mapper = JavaTypeMapper::erased();
        let placeholder = TypeRef::bounded_placeholder("T", ClassType::new("java.lang.Number"));

        assert_eq!(mapper.render(&placeholder), "java.lang.Number");
        assert_eq!(
            mapper.render(&TypeRef::placeholder("E")),
            "java.lang.Object"
        );
        assert_eq!(
            mapper.render(&list_of(GenericsType::placeholder("E"))),
            "java.util.List"
        );
        assert_eq!(
            mapper.render_generics(&[GenericsType::placeholder("T")]),
            ""
        );
    }
}
