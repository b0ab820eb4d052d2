//! Normalization transform seam.
//!
//! The front end normalizes every class before code generation: it
//! materializes implicit members (property accessors, default-argument
//! overloads, the implicit constructor, compiled-artifact methods) and adds
//! runtime plumbing (timestamps, initializers, covariant bridges, implicit
//! returns).
//!
//! Consumers do not subclass the transform to change what it does. Instead
//! the transform routes every effect through a [`TransformHooks`] object the
//! consumer supplies, which decides whether each effect happens and where
//! materialized members end up.

mod normalizer;

pub use normalizer::{StandardNormalizer, expand_default_arguments};

use crate::{ClassDecl, ConstructorDecl, MethodDecl, Parameter};

/// Overload parameter lists produced by default-argument expansion.
pub type Overloads = Vec<Vec<Parameter>>;

/// Capabilities a normalization transform delegates to its caller.
pub trait TransformHooks {
    /// Whether timestamp fields may be added to the class.
    fn keep_timestamp(&mut self, class: &ClassDecl) -> bool;

    /// Whether field initializers may be injected into constructors.
    fn keep_initializers(&mut self, class: &ClassDecl) -> bool;

    /// Whether covariant bridge methods may be generated.
    fn keep_covariant_methods(&mut self, class: &ClassDecl) -> bool;

    /// Whether an implicit `return` may be inserted into the method body.
    fn keep_return_insertion(&mut self, method: &MethodDecl) -> bool;

    /// Receive an accessor materialized from a property.
    fn add_property_method(&mut self, method: MethodDecl);

    /// Receive any other materialized method.
    fn add_method(&mut self, method: MethodDecl);

    /// Receive a materialized constructor.
    fn add_constructor(&mut self, constructor: ConstructorDecl);

    /// Run default-argument expansion over `parameters`.
    ///
    /// `expand` may clear default-value metadata on `parameters`. The default
    /// implementation lets it.
    fn expand_default_arguments(
        &mut self,
        parameters: &mut [Parameter],
        expand: &mut dyn FnMut(&mut [Parameter]) -> Overloads,
    ) -> Overloads {
        expand(parameters)
    }
}

/// A normalization pass over one class.
pub trait NormalizationTransform {
    /// Normalize `class`, routing every effect through `hooks`.
    fn visit_class(&self, class: &mut ClassDecl, hooks: &mut dyn TransformHooks);
}
