//! Placeholder values for stub bodies and delegation calls.

use skelgen_model::TypeRef;

use crate::JavaTypeMapper;

/// A legal placeholder expression of type `ty`.
///
/// Every value except those of exactly `java.lang.Object` is cast to its
/// type, so that overloaded targets stay unambiguous.
pub fn default_value(ty: &TypeRef, types: &JavaTypeMapper) -> String {
    let literal = if ty.is_boolean() {
        "false"
    } else if ty.is_primitive() {
        "0"
    } else {
        "null"
    };

    if ty.is_object() {
        literal.to_string()
    } else {
        format!("({}){}", types.render(ty), literal)
    }
}
