//! Private helpers emitted next to the record impls.

use crate::builder::CodeFragment;
use crate::template::literal;

/// Name of the generated attribute-escaping function.
pub const ESCAPE_FN: &str = "escape_html";

/// The generated `escape_html`, which rendered values pass through before
/// they are placed in a `value="..."` attribute.
pub fn escape_fn() -> CodeFragment {
    let arm = |c: &str, entity: &str| CodeFragment::line(format!("'{}' => escaped.push_str(\"{}\"),", c, entity));

    CodeFragment::sequence(vec![
        CodeFragment::doc("Escape text for HTML content and double-quoted attribute values."),
        CodeFragment::block(
            format!("fn {}(text: &str) -> String {{", ESCAPE_FN),
            vec![
                CodeFragment::line("let mut escaped = String::with_capacity(text.len());"),
                CodeFragment::block(
                    "for c in text.chars() {",
                    vec![CodeFragment::block(
                        "match c {",
                        vec![
                            arm("&", "&amp;"),
                            arm("\\\"", "&quot;"),
                            arm("<", "&lt;"),
                            arm(">", "&gt;"),
                            CodeFragment::line("_ => escaped.push(c),"),
                        ],
                        Some("}".to_string()),
                    )],
                    Some("}".to_string()),
                ),
                CodeFragment::line("escaped"),
            ],
            Some("}".to_string()),
        ),
    ])
}

/// Call expression that formats `value` with `format` and escapes the result.
pub fn escaped_value(format: &str, value: &str) -> String {
    format!("{}(&format!({}, {}))", ESCAPE_FN, literal(format), value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_fn_source() {
        assert_eq!(
            escape_fn().render(),
            r#"/// Escape text for HTML content and double-quoted attribute values.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '\"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
"#
        );
    }

    #[test]
    fn test_escaped_value() {
        assert_eq!(escaped_value("{}", "self.a"), "escape_html(&format!(\"{}\", self.a))");
    }
}
