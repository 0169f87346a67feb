use structform_ir::PrimitiveKind;

use super::Emission;
use crate::builder::CodeFragment;
use crate::generation::{FORMAT_IMPORT, escaped_value};
use crate::kinds::kind_spec;
use crate::template::{FieldContext, literal};

/// One labeled text input named after the field. The value is formatted
/// with the kind's format spec and escaped at render time.
pub(super) fn emit(ctx: &FieldContext<'_>, kind: PrimitiveKind) -> Emission {
    let spec = kind_spec(kind);
    let markup = "\n{} :<br>\n<input type=\"text\" name=\"{}\" value=\"{}\"><br>\n";

    let fragment = CodeFragment::block(
        "let _ = write!(",
        vec![
            CodeFragment::line("out,"),
            CodeFragment::line(format!("{},", literal(markup))),
            CodeFragment::line(format!("{},", ctx.doc_literal())),
            CodeFragment::line(format!("{},", ctx.name_literal())),
            CodeFragment::line(escaped_value(spec.format, ctx.value_expression)),
        ],
        Some(");".to_string()),
    );

    Emission::new(fragment)
        .import(FORMAT_IMPORT)
        .writing()
        .escaping()
}
