use structform_ir::PrimitiveKind;

use super::Emission;
use crate::builder::CodeFragment;
use crate::generation::{FORMAT_IMPORT, escaped_value};
use crate::kinds::kind_spec;
use crate::naming::script_ident;
use crate::template::{FieldContext, literal};

/// One indexed input per existing element, an insertion anchor, the client
/// script that adds inputs, and the button that triggers it.
///
/// The script counter is seeded with the slice length at render time, so
/// added inputs continue the index sequence of the rendered ones.
pub(super) fn emit(ctx: &FieldContext<'_>, kind: PrimitiveKind) -> Emission {
    let spec = kind_spec(kind);
    let name = ctx.path.qualified_name();
    let ident = script_ident(&name);
    let value = ctx.value_expression;

    let label = CodeFragment::line(format!(
        "let _ = write!(out, {}, {});",
        literal("\n{} :<br>\n"),
        ctx.doc_literal()
    ));

    let item_markup = "<input type=\"text\" name=\"{}.{}\" value=\"{}\"><br>\n";
    let items = CodeFragment::block(
        format!("for (index, item) in {}.iter().enumerate() {{", value),
        vec![CodeFragment::block(
            "let _ = write!(",
            vec![
                CodeFragment::line("out,"),
                CodeFragment::line(format!("{},", literal(item_markup))),
                CodeFragment::line(format!("{},", ctx.name_literal())),
                CodeFragment::line("index,"),
                CodeFragment::line(escaped_value(spec.format, "item")),
            ],
            Some(");".to_string()),
        )],
        Some("}".to_string()),
    );

    let mut parts = vec![
        label,
        items,
        push_str(&format!("<br id=\"{}.anchor\">\n", name)),
        push_str("<script>\n"),
        CodeFragment::line(format!(
            "let _ = write!(out, {}, {}.len());",
            literal(&format!("var {}_counter = {{}};\n", ident)),
            value
        )),
    ];
    parts.extend(script(&name, &ident).iter().map(|text| push_str(text)));
    parts.push(push_str("</script>\n"));
    parts.push(push_str(&format!(
        "<button type=\"button\" onclick=\"{}_add()\">Add</button><br>\n",
        ident
    )));

    Emission::new(CodeFragment::sequence(parts))
        .import(FORMAT_IMPORT)
        .writing()
        .escaping()
}

fn push_str(text: &str) -> CodeFragment {
    CodeFragment::line(format!("out.push_str({});", literal(text)))
}

/// Client-side behaviors: insert-after-sibling, create, add.
fn script(name: &str, ident: &str) -> [String; 4] {
    [
        format!("var {ident}_last = null;\n"),
        format!(
            "function {ident}_insertAfter(node, reference) {{\n    \
             reference.parentNode.insertBefore(node, reference.nextSibling);\n}}\n"
        ),
        format!(
            "function {ident}_create() {{\n    \
             var input = document.createElement(\"input\");\n    \
             input.type = \"text\";\n    \
             input.name = \"{name}.\" + {ident}_counter;\n    \
             {ident}_counter++;\n    \
             return input;\n}}\n"
        ),
        format!(
            "function {ident}_add() {{\n    \
             if ({ident}_last === null) {{\n        \
             {ident}_last = document.getElementById(\"{name}.anchor\");\n    \
             }}\n    \
             var input = {ident}_create();\n    \
             {ident}_insertAfter(input, {ident}_last);\n    \
             var br = document.createElement(\"br\");\n    \
             {ident}_insertAfter(br, input);\n    \
             {ident}_last = br;\n}}\n"
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::{FieldDescriptor, FieldPath, TypeKind};

    #[test]
    fn test_counter_is_seeded_with_length() {
        let path = FieldPath::root("M").child("h");
        let descriptor = FieldDescriptor {
            qualified_name: "M.h".into(),
            documentation: "h with slice".into(),
            value_expression: path.value_expression(),
            kind: TypeKind::PrimitiveSlice(PrimitiveKind::String),
            path,
        };
        let emission = emit(&FieldContext::new(&descriptor), PrimitiveKind::String);

        let code = emission.fragment.render();

        assert!(code.contains("for (index, item) in self.h.iter().enumerate() {\n"));
        assert!(code.contains("let _ = write!(out, \"var M_h_counter = {};\\n\", self.h.len());\n"));
        assert!(code.contains("out.push_str(\"<br id=\\\"M.h.anchor\\\">\\n\");\n"));
        assert!(code.contains("input.name = \\\"M.h.\\\" + M_h_counter;"));
        assert!(code.contains("onclick=\\\"M_h_add()\\\""));
        assert!(code.contains("        escape_html(&format!(\"{}\", item))\n"));
        assert!(emission.imports.contains(FORMAT_IMPORT));
        assert!(emission.escapes);
    }
}
