//! Code fragments.

use super::CodeBuilder;

/// A piece of generated code.
///
/// Field transformers return fragments instead of text, so a record's output
/// can still be thrown away after every field has been visited.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    Line(String),
    Blank,
    /// `header`, the body one level deeper, then `close` back at the header's level.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    Sequence(Vec<CodeFragment>),
    /// `// text`
    Comment(String),
    /// `/// text`
    Doc(String),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn blank() -> Self {
        Self::Blank
    }

    pub fn block(header: impl Into<String>, body: Vec<CodeFragment>, close: Option<String>) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close,
        }
    }

    pub fn sequence(fragments: Vec<CodeFragment>) -> Self {
        Self::Sequence(fragments)
    }

    pub fn comment(s: impl Into<String>) -> Self {
        Self::Comment(s.into())
    }

    pub fn doc(s: impl Into<String>) -> Self {
        Self::Doc(s.into())
    }

    /// True when rendering would write nothing (nested empty sequences).
    pub fn is_empty(&self) -> bool {
        match self {
            CodeFragment::Sequence(fragments) => fragments.iter().all(CodeFragment::is_empty),
            _ => false,
        }
    }

    /// Render at indentation level zero.
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::new();
        builder.push_fragment(self);
        builder.build()
    }
}
