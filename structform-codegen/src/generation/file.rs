//! Generated file assembly.

use super::ImportSet;
use crate::builder::{CodeBuilder, CodeFragment};

/// First line of every generated file.
pub const GENERATED_HEADER: &str = "// Code generated by structform. DO NOT EDIT.";

/// Render the generated file: header, imports, then one item per record.
pub fn render_file(imports: &ImportSet, items: Vec<CodeFragment>) -> String {
    let mut builder = CodeBuilder::new();
    builder.push_line(GENERATED_HEADER).push_blank();

    if !imports.is_empty() {
        for path in imports.iter() {
            builder.push_line(&format!("use {};", path));
        }
        builder.push_blank();
    }

    let count = items.len();
    for (i, item) in items.iter().enumerate() {
        builder.push_fragment(item);
        if i + 1 < count {
            builder.push_blank();
        }
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_file_without_items() {
        let out = render_file(&ImportSet::new(), vec![]);
        assert_eq!(out, format!("{}\n\n", GENERATED_HEADER));
    }

    #[test]
    fn test_render_file_with_imports_and_items() {
        let mut imports = ImportSet::new();
        imports.add("super::*");

        let out = render_file(
            &imports,
            vec![CodeFragment::line("impl A {}"), CodeFragment::line("impl B {}")],
        );

        assert_eq!(
            out,
            format!(
                "{}\n\nuse super::*;\n\nimpl A {{}}\n\nimpl B {{}}\n",
                GENERATED_HEADER
            )
        );
    }
}
