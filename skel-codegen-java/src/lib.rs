//! Java stub generator for Skel.
//!
//! Renders declaration models as Java "skeleton" sources: headers, fields
//! and member signatures with placeholder bodies, enough for a Java
//! compiler to resolve references against them.
//!
//! # Example
//!
//! ```no_run
//! use skelgen_codegen_java::{StubGenerator, StubOptions};
//! use skelgen_model::{ClassDecl, ClassIndex, ImportSet};
//!
//! let mut generator = StubGenerator::new(StubOptions::new("build/stubs"), ClassIndex::new());
//! let mut class = ClassDecl::new("geo.Pt");
//! generator.generate(&mut class, &ImportSet::new())?;
//! # Ok::<(), skelgen_codegen_java::Error>(())
//! ```

mod constructor;
mod defaults;
mod error;
mod generator;
mod imports;
mod java_file;
mod printer;
mod synthesis;
mod type_mapper;

pub mod ast;

pub use constructor::{
    AccessibleSuperConstructor, CallContext, CallStrategy, DEFAULT_STRATEGIES,
    ImplicitSourceConstructor, OriginalArguments, delegation_call,
};
pub use defaults::default_value;
pub use error::{Error, Result};
pub use generator::{
    ClassOutcome, Decision, GenerateOutcome, SkipReason, StubGenerator, StubOptions,
};
pub use imports::Imports;
pub use java_file::JavaFile;
pub use printer::DeclarationPrinter;
pub use synthesis::{StubHooks, SynthesizedMembers, synthesize};
pub use type_mapper::JavaTypeMapper;
