//! Declaration model for the Skel stub generator.
//!
//! This crate provides the resolved declaration tree handed over by the
//! source-language front end. The tree is the single input of stub
//! generation: it describes classes, interfaces and enums together with
//! their members, but never their executable bodies.
//!
//! # Architecture
//!
//! ```text
//! front end → DeclarationModel (this crate) → skelgen-codegen-java → *.java stubs
//! ```
//!
//! The model is:
//! - Resolved (type references carry their resolution state)
//! - Serializable (a model can be exchanged as JSON)
//! - Body-free (only the first delegation call of a constructor is kept)
//!
//! The [`transform`] module defines the normalization transform seam the
//! front end exposes, plus a standard implementation of it.

mod decl;
mod expr;
mod index;
mod modifiers;
mod types;
mod unit;

pub mod transform;

pub use decl::{
    CallKind, ClassDecl, ClassKind, ConstructorDecl, FieldDecl, MethodDecl, Nesting, Parameter,
    PropertyDecl, SpecialCall,
};
pub use expr::{Expression, Literal};
pub use index::{ClassIndex, ClassOrigin, IndexedClass};
pub use modifiers::Modifiers;
pub use types::{ClassType, GenericsType, OBJECT, PrimitiveType, STRING, TypeRef};
pub use unit::{DeclarationModel, ExternalClass, ImportSet, SourceUnit};
