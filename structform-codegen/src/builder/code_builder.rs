//! Indented text buffer.

use super::CodeFragment;

/// One indentation level, as rustfmt writes it.
const INDENT: &str = "    ";

/// Accumulates generated lines at the current indentation level.
///
/// ```
/// use structform_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::new();
/// builder.push_line("impl M {").indent().push_line("fn a() {}").dedent().push_line("}");
///
/// assert_eq!(builder.build(), "impl M {\n    fn a() {}\n}\n");
/// ```
#[derive(Debug, Default)]
pub struct CodeBuilder {
    level: usize,
    buffer: String,
}

impl CodeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Blank lines never carry indentation.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    pub fn indent(&mut self) -> &mut Self {
        self.level += 1;
        self
    }

    pub fn dedent(&mut self) -> &mut Self {
        self.level = self.level.saturating_sub(1);
        self
    }

    pub fn push_fragment(&mut self, fragment: &CodeFragment) -> &mut Self {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block { header, body, close } => {
                self.push_line(header).indent();
                for f in body {
                    self.push_fragment(f);
                }
                self.dedent();
                if let Some(close) = close {
                    self.push_line(close);
                }
            }
            CodeFragment::Sequence(fragments) => {
                for f in fragments {
                    self.push_fragment(f);
                }
            }
            CodeFragment::Comment(text) => {
                self.push_line(&format!("// {}", text));
            }
            CodeFragment::Doc(text) => {
                self.push_line(&format!("/// {}", text));
            }
        }
        self
    }

    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.level {
            self.buffer.push_str(INDENT);
        }
    }
}
