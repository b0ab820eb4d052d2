//! Fragments produced by AST nodes, consumed by [`CodeBuilder`](super::CodeBuilder).

/// A piece of generated code, independent of its final indentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeFragment {
    /// A line at the current indentation.
    Line(String),
    /// An empty line.
    Blank,
    /// `header`, the body one level deeper, then a closing `}`.
    Block {
        header: String,
        body: Vec<CodeFragment>,
    },
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn block(header: impl Into<String>, body: Vec<CodeFragment>) -> Self {
        Self::Block {
            header: header.into(),
            body,
        }
    }
}

/// AST nodes that render to code fragments.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}
