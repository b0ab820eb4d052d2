//! Member synthesis pass.
//!
//! Runs the front end's normalization transform over a class and captures
//! the members it materializes, without letting it change the class.

use skelgen_model::{
    ClassDecl, ConstructorDecl, Expression, MethodDecl, Parameter,
    transform::{NormalizationTransform, Overloads, TransformHooks},
};

/// Members materialized for one declaration.
///
/// Owned by the declaration being rendered and dropped once its body is
/// closed; nested declarations get their own.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SynthesizedMembers {
    pub methods: Vec<MethodDecl>,
    pub constructors: Vec<ConstructorDecl>,
}

impl SynthesizedMembers {
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty() && self.constructors.is_empty()
    }
}

/// Hooks that capture materialized members and suppress everything else.
#[derive(Debug, Default)]
pub struct StubHooks {
    members: SynthesizedMembers,
}

impl StubHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_members(self) -> SynthesizedMembers {
        self.members
    }
}

impl TransformHooks for StubHooks {
    fn keep_timestamp(&mut self, _class: &ClassDecl) -> bool {
        false
    }

    fn keep_initializers(&mut self, _class: &ClassDecl) -> bool {
        false
    }

    fn keep_covariant_methods(&mut self, _class: &ClassDecl) -> bool {
        false
    }

    fn keep_return_insertion(&mut self, _method: &MethodDecl) -> bool {
        false
    }

    fn add_property_method(&mut self, method: MethodDecl) {
        self.members.methods.push(method);
    }

    fn add_method(&mut self, method: MethodDecl) {
        self.members.methods.push(method);
    }

    fn add_constructor(&mut self, constructor: ConstructorDecl) {
        self.members.constructors.push(constructor);
    }

    fn expand_default_arguments(
        &mut self,
        parameters: &mut [Parameter],
        expand: &mut dyn FnMut(&mut [Parameter]) -> Overloads,
    ) -> Overloads {
        let saved: Vec<Option<Expression>> =
            parameters.iter().map(|p| p.default.clone()).collect();
        let overloads = expand(parameters);
        for (parameter, default) in parameters.iter_mut().zip(saved) {
            if default.is_some() {
                parameter.default = default;
            }
        }
        overloads
    }
}

/// Run `transform` over `class`, returning what it materialized.
#[tracing::instrument(level = "trace", skip_all, fields(class = %class.name))]
pub fn synthesize(
    class: &mut ClassDecl,
    transform: &dyn NormalizationTransform,
) -> SynthesizedMembers {
    let mut hooks = StubHooks::new();
    transform.visit_class(class, &mut hooks);
    let members = hooks.into_members();
    tracing::trace!(
        methods = members.methods.len(),
        constructors = members.constructors.len(),
        "synthesized members"
    );
    members
}
