//! Indentation of generated sources.

use std::iter;

/// Indentation unit, repeated once per nesting level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    Spaces(u8),
    Tab,
}

impl Indent {
    /// Four spaces, the layout of the Java stubs.
    pub const JAVA: Self = Self::Spaces(4);

    /// Append `depth` levels of indentation to `out`.
    pub fn write_to(&self, out: &mut String, depth: usize) {
        match *self {
            Self::Spaces(width) => out.extend(iter::repeat_n(' ', depth * usize::from(width))),
            Self::Tab => out.extend(iter::repeat_n('\t', depth)),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::JAVA
    }
}
