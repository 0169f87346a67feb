//! Per-function source buffers.

use crate::builder::CodeFragment;

/// Accumulates the body of one generated function in traversal order.
///
/// The signature is fixed when the buffer is opened and the footer is only
/// written by [`FunctionSource::finish`], so a half-built function can never
/// be rendered.
#[derive(Debug)]
pub struct FunctionSource {
    doc: &'static str,
    signature: String,
    body: Vec<CodeFragment>,
}

impl FunctionSource {
    /// Open a function with its doc line, signature and leading statements.
    pub fn open(
        doc: &'static str,
        signature: impl Into<String>,
        prologue: Vec<CodeFragment>,
    ) -> Self {
        let mut body = prologue;
        if !body.is_empty() {
            body.push(CodeFragment::blank());
        }
        Self {
            doc,
            signature: signature.into(),
            body,
        }
    }

    /// Append one field fragment followed by its blank-line separator.
    pub fn append(&mut self, fragment: CodeFragment) {
        if fragment.is_empty() {
            return;
        }
        self.body.push(fragment);
        self.body.push(CodeFragment::blank());
    }

    /// Number of fragments appended so far, separators included.
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Close the function with its trailing statements.
    pub fn finish(mut self, epilogue: Vec<CodeFragment>) -> CodeFragment {
        self.body.extend(epilogue);
        CodeFragment::sequence(vec![
            CodeFragment::doc(self.doc),
            CodeFragment::block(
                format!("{} {{", self.signature),
                self.body,
                Some("}".to_string()),
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragments_are_separated_by_one_blank_line() {
        let mut source = FunctionSource::open(
            "Render.",
            "pub fn to_html(&self) -> String",
            vec![CodeFragment::line("let mut out = String::new();")],
        );
        source.append(CodeFragment::line("a();"));
        source.append(CodeFragment::sequence(vec![]));
        source.append(CodeFragment::line("b();"));

        assert_eq!(
            source.finish(vec![CodeFragment::line("out")]).render(),
            "/// Render.\npub fn to_html(&self) -> String {\n    let mut out = String::new();\n\n    a();\n\n    b();\n\n    out\n}\n"
        );
    }
}
