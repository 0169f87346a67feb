//! Typed template context and string-literal helpers.
//!
//! Every piece of user-controlled text that ends up inside a generated
//! string literal passes through [`escape_literal`] first. Text that lands in
//! HTML markup also goes through [`escape_html`] before that.

use crate::resolve::{FieldDescriptor, FieldPath};

/// Escape text for embedding between the quotes of a Rust string literal.
///
/// Uses the `Debug` rendering of `str` with the surrounding quotes removed,
/// so quotes, backslashes and control characters survive unchanged.
pub fn escape_literal(text: &str) -> String {
    let quoted = format!("{:?}", text);
    quoted[1..quoted.len() - 1].to_string()
}

/// Escape text for HTML content and double-quoted attribute values.
///
/// Generated code applies the same mapping at render time through
/// [`crate::generation::escape_fn`].
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Quote already-escaped text as a string literal.
pub fn quoted(escaped: &str) -> String {
    format!("\"{}\"", escaped)
}

/// Quote raw text as a string literal.
pub fn literal(text: &str) -> String {
    quoted(&escape_literal(text))
}

/// Everything a fragment template may reference about one field.
#[derive(Debug, Clone, Copy)]
pub struct FieldContext<'a> {
    pub path: &'a FieldPath,
    /// Escaped qualified name.
    pub qualified_name: &'a str,
    /// HTML- and literal-escaped documentation.
    pub documentation: &'a str,
    pub value_expression: &'a str,
}

impl<'a> FieldContext<'a> {
    pub fn new(descriptor: &'a FieldDescriptor<'_>) -> Self {
        Self {
            path: &descriptor.path,
            qualified_name: &descriptor.qualified_name,
            documentation: &descriptor.documentation,
            value_expression: &descriptor.value_expression,
        }
    }

    /// Qualified name as a string literal.
    pub fn name_literal(&self) -> String {
        quoted(self.qualified_name)
    }

    /// Documentation as a string literal.
    pub fn doc_literal(&self) -> String {
        quoted(self.documentation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_literal() {
        assert_eq!(escape_literal("plain"), "plain");
        assert_eq!(escape_literal("say \"hi\""), "say \\\"hi\\\"");
        assert_eq!(escape_literal("a\\b"), "a\\\\b");
        assert_eq!(escape_literal("line\nnext\t"), "line\\nnext\\t");
        assert_eq!(escape_literal(""), "");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("plain text"), "plain text");
        assert_eq!(
            escape_html("x\" onfocus=\"alert(1)"),
            "x&quot; onfocus=&quot;alert(1)"
        );
        assert_eq!(escape_html("<b>&amp;</b>"), "&lt;b&gt;&amp;amp;&lt;/b&gt;");
    }

    #[test]
    fn test_literal() {
        assert_eq!(literal("<br>\n"), "\"<br>\\n\"");
    }
}
