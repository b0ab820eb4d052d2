//! Standard normalization transform.

use super::{NormalizationTransform, Overloads, TransformHooks};
use crate::{
    ClassDecl, ClassKind, ConstructorDecl, Expression, FieldDecl, MethodDecl, Modifiers,
    Parameter, PropertyDecl, SpecialCall, TypeRef,
};

const TIMESTAMP_FIELD: &str = "__timeStamp";
const STATIC_INITIALIZER: &str = "<clinit>";

/// The front end's default normalization.
///
/// Materializes, through the hooks:
/// - `getX`/`isX` and `setX` accessors for properties
/// - the implicit public no-argument constructor of classes declaring none
/// - overloads for methods and constructors with default arguments
/// - the synthetic enum helpers `values`, `valueOf`, `next` and `previous`
/// - configured object-protocol methods for classes lacking them
///
/// Timestamp fields and the static initializer are added to the class
/// itself, and only when the hooks allow it.
#[derive(Debug, Clone, Default)]
pub struct StandardNormalizer {
    protocol_methods: Vec<MethodDecl>,
}

impl StandardNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Materialize `method` on every class that does not declare it.
    pub fn with_protocol_method(mut self, method: MethodDecl) -> Self {
        self.protocol_methods.push(method);
        self
    }

    fn add_timestamp(class: &mut ClassDecl) {
        if class.fields.iter().any(|f| f.name == TIMESTAMP_FIELD) {
            return;
        }
        class.fields.push(
            FieldDecl::new(TIMESTAMP_FIELD, TypeRef::long())
                .modifiers(Modifiers::PUBLIC | Modifiers::STATIC | Modifiers::SYNTHETIC),
        );
    }

    fn add_static_initializer(class: &mut ClassDecl) {
        let has_static_fields = class
            .fields
            .iter()
            .any(|f| f.modifiers.is_static() && !f.is_synthetic());
        if has_static_fields && !class.declares_method(STATIC_INITIALIZER, 0) {
            class.methods.push(
                MethodDecl::new(STATIC_INITIALIZER).modifiers(Modifiers::STATIC),
            );
        }
    }

    fn add_accessors(class: &ClassDecl, hooks: &mut dyn TransformHooks) {
        for property in &class.properties {
            let suffix = capitalize(&property.name);
            let visibility = accessor_modifiers(property);

            let getter_prefix = if property.ty.is_boolean() { "is" } else { "get" };
            let getter = format!("{}{}", getter_prefix, suffix);
            if !class.declares_method(&getter, 0) {
                tracing::trace!(class = %class.name, method = %getter, "materialized getter");
                hooks.add_property_method(
                    MethodDecl::new(getter)
                        .modifiers(visibility)
                        .returns(property.ty.clone()),
                );
            }

            if property.modifiers.contains(Modifiers::FINAL) {
                continue;
            }
            let setter = format!("set{}", suffix);
            if !class.declares_method(&setter, 1) {
                tracing::trace!(class = %class.name, method = %setter, "materialized setter");
                hooks.add_property_method(
                    MethodDecl::new(setter)
                        .modifiers(visibility)
                        .param(Parameter::new("value", property.ty.clone())),
                );
            }
        }
    }

    fn add_enum_helpers(class: &ClassDecl, hooks: &mut dyn TransformHooks) {
        let self_type = TypeRef::class(class.name.clone());
        let helpers = [
            MethodDecl::new("values")
                .modifiers(Modifiers::PUBLIC | Modifiers::STATIC | Modifiers::SYNTHETIC)
                .returns(TypeRef::array(self_type.clone())),
            MethodDecl::new("valueOf")
                .modifiers(Modifiers::PUBLIC | Modifiers::STATIC | Modifiers::SYNTHETIC)
                .returns(self_type.clone())
                .param(Parameter::new("name", TypeRef::string())),
            MethodDecl::new("next")
                .modifiers(Modifiers::PUBLIC | Modifiers::SYNTHETIC)
                .returns(self_type.clone()),
            MethodDecl::new("previous")
                .modifiers(Modifiers::PUBLIC | Modifiers::SYNTHETIC)
                .returns(self_type),
        ];
        for helper in helpers {
            if !class.declares_method(&helper.name, helper.parameters.len()) {
                hooks.add_method(helper);
            }
        }
    }

    fn add_protocol_methods(&self, class: &ClassDecl, hooks: &mut dyn TransformHooks) {
        for method in &self.protocol_methods {
            if !class.declares_method(&method.name, method.parameters.len()) {
                hooks.add_method(method.clone());
            }
        }
    }

    fn expand_methods(class: &mut ClassDecl, hooks: &mut dyn TransformHooks) {
        for index in 0..class.methods.len() {
            if !class.methods[index].parameters.iter().any(Parameter::has_default) {
                continue;
            }
            let overloads = hooks.expand_default_arguments(
                &mut class.methods[index].parameters,
                &mut |params: &mut [Parameter]| expand_default_arguments(params),
            );
            for parameters in overloads {
                let mut overload = class.methods[index].clone();
                overload.parameters = parameters;
                hooks.add_method(overload);
            }
        }
    }

    fn expand_constructors(class: &mut ClassDecl, hooks: &mut dyn TransformHooks) {
        for index in 0..class.constructors.len() {
            if !class.constructors[index]
                .parameters
                .iter()
                .any(Parameter::has_default)
            {
                continue;
            }
            let original = class.constructors[index].parameters.clone();
            let overloads = hooks.expand_default_arguments(
                &mut class.constructors[index].parameters,
                &mut |params: &mut [Parameter]| expand_default_arguments(params),
            );
            for parameters in overloads {
                let call = SpecialCall::this_call(delegation_arguments(&original, &parameters));
                let mut overload = ConstructorDecl::new(class.constructors[index].modifiers)
                    .delegating(call);
                overload.parameters = parameters;
                overload.exceptions = class.constructors[index].exceptions.clone();
                hooks.add_constructor(overload);
            }
        }
    }
}

impl NormalizationTransform for StandardNormalizer {
    fn visit_class(&self, class: &mut ClassDecl, hooks: &mut dyn TransformHooks) {
        if hooks.keep_timestamp(class) && class.kind == ClassKind::Class {
            Self::add_timestamp(class);
        }
        if hooks.keep_initializers(class) {
            Self::add_static_initializer(class);
        }

        if class.kind == ClassKind::Class && class.constructors.is_empty() {
            hooks.add_constructor(
                ConstructorDecl::new(Modifiers::PUBLIC).delegating(SpecialCall::super_call(vec![])),
            );
        }

        Self::add_accessors(class, hooks);
        if class.is_enum() {
            Self::add_enum_helpers(class, hooks);
        }
        if !class.is_interface() {
            self.add_protocol_methods(class, hooks);
        }

        Self::expand_methods(class, hooks);
        Self::expand_constructors(class, hooks);
    }
}

/// Expand default arguments into overload parameter lists.
///
/// With N defaulted parameters, N overloads are produced; the k-th drops the
/// k right-most defaulted parameters. Default metadata on `parameters` is
/// cleared afterwards, as the front end does once defaults are compiled in.
pub fn expand_default_arguments(parameters: &mut [Parameter]) -> Overloads {
    let defaulted: Vec<usize> = parameters
        .iter()
        .enumerate()
        .filter(|(_, p)| p.has_default())
        .map(|(i, _)| i)
        .collect();

    let overloads = (1..=defaulted.len())
        .map(|dropped| {
            let removed = &defaulted[defaulted.len() - dropped..];
            parameters
                .iter()
                .enumerate()
                .filter(|(i, _)| !removed.contains(i))
                .map(|(_, p)| Parameter::new(p.name.clone(), p.ty.clone()))
                .collect()
        })
        .collect();

    for parameter in parameters.iter_mut() {
        parameter.default = None;
    }
    overloads
}

/// Arguments of `this(...)` from an overload to the full constructor.
fn delegation_arguments(original: &[Parameter], kept: &[Parameter]) -> Vec<Expression> {
    original
        .iter()
        .map(|param| {
            if kept.iter().any(|k| k.name == param.name) {
                Expression::variable(param.name.clone(), param.ty.clone())
            } else {
                param
                    .default
                    .clone()
                    .unwrap_or_else(|| Expression::other(param.ty.clone()))
            }
        })
        .collect()
}

fn accessor_modifiers(property: &PropertyDecl) -> Modifiers {
    let mut modifiers = Modifiers::PUBLIC;
    if property.modifiers.is_static() {
        modifiers |= Modifiers::STATIC;
    }
    modifiers
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Literal, transform::TransformHooks};

    #[derive(Default)]
    struct Recorder {
        allow_all: bool,
        methods: Vec<MethodDecl>,
        constructors: Vec<ConstructorDecl>,
    }

    impl TransformHooks for Recorder {
        fn keep_timestamp(&mut self, _class: &ClassDecl) -> bool {
            self.allow_all
        }

        fn keep_initializers(&mut self, _class: &ClassDecl) -> bool {
            self.allow_all
        }

        fn keep_covariant_methods(&mut self, _class: &ClassDecl) -> bool {
            self.allow_all
        }

        fn keep_return_insertion(&mut self, _method: &MethodDecl) -> bool {
            self.allow_all
        }

        fn add_property_method(&mut self, method: MethodDecl) {
            self.methods.push(method);
        }

        fn add_method(&mut self, method: MethodDecl) {
            self.methods.push(method);
        }

        fn add_constructor(&mut self, constructor: ConstructorDecl) {
            self.constructors.push(constructor);
        }
    }

    fn names(methods: &[MethodDecl]) -> Vec<&str> {
        methods.iter().map(|m| m.name.as_str()).collect()
    }

    #[test]
    fn test_property_accessors() {
        let mut class = ClassDecl::new("a.Person")
            .property(PropertyDecl::new("name", TypeRef::string()))
            .property(PropertyDecl::new("active", TypeRef::boolean()))
            .property(
                PropertyDecl::new("id", TypeRef::long())
                    .modifiers(Modifiers::PUBLIC | Modifiers::FINAL),
            );
        let mut hooks = Recorder::default();

        StandardNormalizer::new().visit_class(&mut class, &mut hooks);

        assert_eq!(
            names(&hooks.methods),
            vec!["getName", "setName", "isActive", "setActive", "getId"]
        );
    }

    #[test]
    fn test_declared_accessor_is_not_duplicated() {
        let mut class = ClassDecl::new("a.Person")
            .property(PropertyDecl::new("name", TypeRef::string()))
            .method(MethodDecl::new("getName").returns(TypeRef::string()));
        let mut hooks = Recorder::default();

        StandardNormalizer::new().visit_class(&mut class, &mut hooks);

        assert_eq!(names(&hooks.methods), vec!["setName"]);
    }

    #[test]
    fn test_implicit_constructor_delegates_to_super() {
        let mut class = ClassDecl::new("a.Pt");
        let mut hooks = Recorder::default();

        StandardNormalizer::new().visit_class(&mut class, &mut hooks);

        assert_eq!(hooks.constructors.len(), 1);
        assert!(hooks.constructors[0].parameters.is_empty());
        assert_eq!(
            hooks.constructors[0].first_call,
            Some(SpecialCall::super_call(vec![]))
        );
    }

    #[test]
    fn test_interfaces_get_no_constructor() {
        let mut class = ClassDecl::new("a.Shape").kind(ClassKind::Interface);
        let mut hooks = Recorder::default();

        StandardNormalizer::new().visit_class(&mut class, &mut hooks);

        assert!(hooks.constructors.is_empty());
    }

    #[test]
    fn test_expand_default_arguments_drops_from_the_right() {
        let mut params = vec![
            Parameter::new("a", TypeRef::int()),
            Parameter::new("b", TypeRef::int()).with_default(Expression::constant(Literal::Int(1))),
            Parameter::new("c", TypeRef::int()).with_default(Expression::constant(Literal::Int(2))),
        ];

        let overloads = expand_default_arguments(&mut params);

        let shapes: Vec<Vec<&str>> = overloads
            .iter()
            .map(|o| o.iter().map(|p| p.name.as_str()).collect())
            .collect();
        assert_eq!(shapes, vec![vec!["a", "b"], vec!["a"]]);
        assert!(params.iter().all(|p| !p.has_default()));
    }

    #[test]
    fn test_constructor_overload_delegates_with_defaults() {
        let mut class = ClassDecl::new("a.Box").constructor(
            ConstructorDecl::new(Modifiers::PUBLIC)
                .param(Parameter::new("w", TypeRef::int()))
                .param(
                    Parameter::new("h", TypeRef::int())
                        .with_default(Expression::constant(Literal::Int(7))),
                ),
        );
        let mut hooks = Recorder::default();

        StandardNormalizer::new().visit_class(&mut class, &mut hooks);

        assert_eq!(hooks.constructors.len(), 1);
        let overload = &hooks.constructors[0];
        assert_eq!(overload.parameters.len(), 1);
        assert_eq!(
            overload.first_call,
            Some(SpecialCall::this_call(vec![
                Expression::variable("w", TypeRef::int()),
                Expression::constant(Literal::Int(7)),
            ]))
        );
    }

    #[test]
    fn test_enum_helpers_are_synthetic() {
        let mut class = ClassDecl::new("a.Color").kind(ClassKind::Enum);
        let mut hooks = Recorder::default();

        StandardNormalizer::new().visit_class(&mut class, &mut hooks);

        assert_eq!(
            names(&hooks.methods),
            vec!["values", "valueOf", "next", "previous"]
        );
        assert!(hooks.methods.iter().all(MethodDecl::is_synthetic));
    }

    #[test]
    fn test_timestamp_and_initializer_follow_hooks() {
        let field = FieldDecl::new("COUNT", TypeRef::int())
            .modifiers(Modifiers::PUBLIC | Modifiers::STATIC);

        let mut suppressed = ClassDecl::new("a.A").field(field.clone());
        StandardNormalizer::new().visit_class(&mut suppressed, &mut Recorder::default());
        assert_eq!(suppressed.fields.len(), 1);
        assert!(suppressed.methods.is_empty());

        let mut allowed = ClassDecl::new("a.A").field(field);
        let mut hooks = Recorder {
            allow_all: true,
            ..Recorder::default()
        };
        StandardNormalizer::new().visit_class(&mut allowed, &mut hooks);
        assert!(allowed.fields.iter().any(|f| f.name == TIMESTAMP_FIELD));
        assert!(allowed.declares_method(STATIC_INITIALIZER, 0));
    }

    #[test]
    fn test_protocol_methods_skip_interfaces() {
        let normalizer = StandardNormalizer::new().with_protocol_method(
            MethodDecl::new("getMetaClass").returns(TypeRef::class("groovy.lang.MetaClass")),
        );

        let mut class = ClassDecl::new("a.A");
        let mut hooks = Recorder::default();
        normalizer.visit_class(&mut class, &mut hooks);
        assert_eq!(names(&hooks.methods), vec!["getMetaClass"]);

        let mut iface = ClassDecl::new("a.I").kind(ClassKind::Interface);
        let mut hooks = Recorder::default();
        normalizer.visit_class(&mut iface, &mut hooks);
        assert!(hooks.methods.is_empty());
    }
}
