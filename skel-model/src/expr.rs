//! Minimal expressions: delegation call arguments and default values.

use serde::{Deserialize, Serialize};

use crate::TypeRef;

/// A constant value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Literal {
    Null,
    Bool(bool),
    /// An integral constant; values outside `int` range render as `long`.
    Int(i64),
    Float(f32),
    Double(f64),
    Char(char),
    Str(String),
}

impl Literal {
    /// Java source text of the literal.
    pub fn text(&self) -> String {
        match self {
            Self::Null => "null".to_string(),
            Self::Bool(b) => b.to_string(),
            Self::Int(i) if i32::try_from(*i).is_ok() => i.to_string(),
            Self::Int(i) => format!("{}L", i),
            Self::Float(f) => match non_finite(f64::from(*f)) {
                Some(text) => format!("(float){}", text),
                None => format!("{:?}f", f),
            },
            Self::Double(d) => non_finite(*d).map_or_else(|| format!("{:?}", d), str::to_string),
            Self::Char(c) => format!("'{}'", java_char(*c)),
            Self::Str(s) => format!("\"{}\"", java_string(s)),
        }
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Self::Str(_))
    }
}

/// Constant expressions for values Java has no literal for.
fn non_finite(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("(0.0/0.0)")
    } else if value == f64::INFINITY {
        Some("(1.0/0.0)")
    } else if value == f64::NEG_INFINITY {
        Some("(-1.0/0.0)")
    } else {
        None
    }
}

/// Escape one UTF-16 unit of a char or string literal.
///
/// Unicode escapes are translated before lexing, so line terminators and
/// other ASCII controls must use the escape sequences or octal forms.
fn escape_unit(unit: u16, quote: u16, out: &mut String) {
    match unit {
        0x08 => out.push_str("\\b"),
        0x09 => out.push_str("\\t"),
        0x0a => out.push_str("\\n"),
        0x0c => out.push_str("\\f"),
        0x0d => out.push_str("\\r"),
        0x5c => out.push_str("\\\\"),
        u if u == quote => {
            out.push('\\');
            out.push(char::from(u as u8));
        }
        0x00..=0x1f | 0x7f => out.push_str(&format!("\\{:03o}", unit)),
        0x20..=0x7e => out.push(char::from(unit as u8)),
        _ => out.push_str(&format!("\\u{:04x}", unit)),
    }
}

fn java_char(c: char) -> String {
    let mut out = String::new();
    let mut units = [0u16; 2];
    match c.encode_utf16(&mut units) {
        [unit] => escape_unit(*unit, u16::from(b'\''), &mut out),
        // A Java char holds one UTF-16 unit.
        _ => escape_unit(0xfffd, u16::from(b'\''), &mut out),
    }
    out
}

fn java_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for unit in s.encode_utf16() {
        escape_unit(unit, u16::from(b'"'), &mut out);
    }
    out
}

/// An expression as far as stub generation needs to see it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expression {
    /// A literal constant.
    Constant(Literal),
    /// A reference to a variable, typically a parameter.
    Variable { name: String, ty: TypeRef },
    /// Any other expression, known only by its static type.
    Other { ty: TypeRef },
}

impl Expression {
    pub fn constant(value: Literal) -> Self {
        Self::Constant(value)
    }

    pub fn variable(name: impl Into<String>, ty: TypeRef) -> Self {
        Self::Variable {
            name: name.into(),
            ty,
        }
    }

    pub fn other(ty: TypeRef) -> Self {
        Self::Other { ty }
    }
}
