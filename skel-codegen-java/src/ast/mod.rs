//! Java AST builders for stub declarations.
//!
//! These provide a small API for constructing Java declaration syntax,
//! which can then be rendered via CodeBuilder.

mod class;
mod fields;
mod methods;

pub use class::ClassHeader;
pub use fields::{EnumConstants, Field};
pub use methods::{Constructor, Method, MethodBody, Param};

/// Render modifier keywords, each followed by a space.
pub(crate) fn modifier_prefix(keywords: &[&str]) -> String {
    keywords.iter().map(|k| format!("{} ", k)).collect()
}
