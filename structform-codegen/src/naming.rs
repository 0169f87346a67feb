//! Naming rules for identifiers in generated code.

/// Rust reserved words; a field with one of these names needs a raw identifier.
const RUST_RESERVED: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut",
    "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true", "type",
    "unsafe", "use", "where", "while", "abstract", "become", "box", "do", "final", "macro",
    "override", "priv", "try", "typeof", "unsized", "virtual", "yield",
];

/// Check if a name is a Rust reserved word.
pub fn is_reserved(name: &str) -> bool {
    RUST_RESERVED.contains(&name)
}

/// Field name as it must appear in a Rust field access (`r#type`).
pub fn field_accessor(name: &str) -> String {
    if is_reserved(name) {
        format!("r#{}", name)
    } else {
        name.to_string()
    }
}

/// JavaScript identifier prefix derived from a dotted qualified name.
pub fn script_ident(qualified_name: &str) -> String {
    qualified_name.replace('.', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_accessor() {
        assert_eq!(field_accessor("name"), "name");
        assert_eq!(field_accessor("type"), "r#type");
        assert_eq!(field_accessor("match"), "r#match");
    }

    #[test]
    fn test_script_ident() {
        assert_eq!(script_ident("M.h"), "M_h");
        assert_eq!(script_ident("M.d.list"), "M_d_list");
    }
}
