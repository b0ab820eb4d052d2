//! Indented text buffer for generated sources.

use super::{CodeFragment, Indent, Renderable};

/// Builds indented source text line by line.
///
/// The `push_*` methods take `&mut self` so a buffer can be threaded
/// through recursive rendering; the consuming methods chain.
///
/// ```
/// use skelgen_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::java()
///     .line("class A {")
///     .indent()
///     .line("int x;")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "class A {\n    int x;\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    depth: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            depth: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Builder with Java's four-space indentation.
    pub fn java() -> Self {
        Self::new(Indent::JAVA)
    }

    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.indent.write_to(&mut self.buffer, self.depth);
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Append pre-rendered text as is.
    pub fn push_raw(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.depth += 1;
        self
    }

    /// Decrease indentation; never below zero.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self
    }

    /// Render an AST node at the current indentation.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply(fragment);
        }
        self
    }

    fn apply(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block { header, body } => {
                self.push_line(&header).push_indent();
                for f in body {
                    self.apply(f);
                }
                self.push_dedent().push_line("}");
            }
        }
    }

    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    pub fn indent(mut self) -> Self {
        self.push_indent();
        self
    }

    pub fn dedent(mut self) -> Self {
        self.push_dedent();
        self
    }

    pub fn build(self) -> String {
        self.buffer
    }
}
