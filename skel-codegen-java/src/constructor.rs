//! Constructor delegation calls.
//!
//! A stub constructor cannot replay its original `super(...)`/`this(...)`
//! arguments, since those reference code the stub does not carry. The
//! strategies below rebuild a call Java will accept, tried in order.

use skelgen_model::{
    ClassDecl, ClassIndex, ClassOrigin, ConstructorDecl, Expression, OBJECT, SpecialCall, TypeRef,
};

use crate::{JavaTypeMapper, default_value};

/// What a strategy can see of the constructor being rendered.
#[derive(Debug, Clone, Copy)]
pub struct CallContext<'a> {
    pub class: &'a ClassDecl,
    pub constructor: &'a ConstructorDecl,
    pub call: &'a SpecialCall,
    pub index: &'a ClassIndex,
    pub types: &'a JavaTypeMapper,
}

impl CallContext<'_> {
    /// Qualified name of the immediate super class.
    pub fn super_name(&self) -> &str {
        self.class
            .super_class
            .as_ref()
            .map_or(OBJECT, |s| s.name.as_str())
    }
}

/// One way of producing a delegation call.
pub trait CallStrategy {
    /// Name used in logs.
    fn name(&self) -> &'static str;

    /// The call statement, or `None` if this strategy does not apply.
    fn synthesize(&self, ctx: &CallContext<'_>) -> Option<String>;
}

/// Call the first public or protected constructor of the super class.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessibleSuperConstructor;

impl CallStrategy for AccessibleSuperConstructor {
    fn name(&self) -> &'static str {
        "accessible-super-constructor"
    }

    fn synthesize(&self, ctx: &CallContext<'_>) -> Option<String> {
        let target = ctx
            .index
            .get(ctx.super_name())?
            .constructors
            .iter()
            .find(|c| c.is_accessible())?;
        let args: Vec<String> = target
            .parameters
            .iter()
            .map(|p| default_value(&p.ty, ctx.types))
            .collect();
        Some(format!("super({});", args.join(", ")))
    }
}

/// Call the implicit no-argument constructor of a source super class.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImplicitSourceConstructor;

impl CallStrategy for ImplicitSourceConstructor {
    fn name(&self) -> &'static str {
        "implicit-source-constructor"
    }

    fn synthesize(&self, ctx: &CallContext<'_>) -> Option<String> {
        let parent = ctx.index.get(ctx.super_name())?;
        (parent.origin == ClassOrigin::Source && parent.constructors.is_empty())
            .then(|| "super();".to_string())
    }
}

/// Re-render the original call with placeholder arguments. Always applies.
#[derive(Debug, Clone, Copy, Default)]
pub struct OriginalArguments;

impl OriginalArguments {
    fn argument(ctx: &CallContext<'_>, arg: &Expression) -> String {
        match arg {
            Expression::Constant(literal) if literal.is_string() => {
                default_value(&TypeRef::string(), ctx.types)
            }
            Expression::Constant(literal) => literal.text(),
            Expression::Variable { name, ty } => {
                let ty = ctx
                    .constructor
                    .parameters
                    .iter()
                    .find(|p| &p.name == name)
                    .map_or(ty, |p| &p.ty);
                default_value(ty, ctx.types)
            }
            Expression::Other { ty } => default_value(ty, ctx.types),
        }
    }

    pub fn render(ctx: &CallContext<'_>) -> String {
        let args: Vec<String> = ctx
            .call
            .arguments
            .iter()
            .map(|arg| Self::argument(ctx, arg))
            .collect();
        format!("{}({});", ctx.call.kind.keyword(), args.join(", "))
    }
}

impl CallStrategy for OriginalArguments {
    fn name(&self) -> &'static str {
        "original-arguments"
    }

    fn synthesize(&self, ctx: &CallContext<'_>) -> Option<String> {
        Some(Self::render(ctx))
    }
}

/// Strategies in priority order.
pub const DEFAULT_STRATEGIES: &[&dyn CallStrategy] = &[
    &AccessibleSuperConstructor,
    &ImplicitSourceConstructor,
    &OriginalArguments,
];

/// Build the delegation call with the first strategy that applies.
///
/// Falls back to [`OriginalArguments`] if none of `strategies` does.
pub fn delegation_call(ctx: &CallContext<'_>, strategies: &[&dyn CallStrategy]) -> String {
    strategies
        .iter()
        .find_map(|strategy| {
            let call = strategy.synthesize(ctx)?;
            tracing::trace!(
                class = %ctx.class.name,
                strategy = strategy.name(),
                "chose constructor call"
            );
            Some(call)
        })
        .unwrap_or_else(|| OriginalArguments::render(ctx))
}
