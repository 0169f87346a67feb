use structform_ir::FieldDecl;
use tracing::warn;

use super::{Emission, FieldTransformer};
use crate::builder::CodeFragment;
use crate::error::FieldError;
use crate::template::{FieldContext, escape_literal, quoted};

/// Section header labeled with the field's documentation, then every child
/// field in declaration order.
pub(super) fn emit(
    transformer: &FieldTransformer,
    ctx: &FieldContext<'_>,
    fields: &[FieldDecl],
) -> Result<Emission, FieldError> {
    let header = format!(
        "{}{}{}",
        escape_literal("\n<br><strong>"),
        ctx.documentation,
        escape_literal("</strong><br>\n")
    );

    let mut parts = vec![CodeFragment::line(format!("out.push_str({});", quoted(&header)))];
    let mut emission = Emission::new(CodeFragment::sequence(Vec::new())).writing();

    for field in fields {
        match transformer.transform_field(field, ctx.path) {
            Ok(child) => {
                parts.push(CodeFragment::blank());
                parts.push(child.fragment);
                emission.imports.merge(&child.imports);
                emission.diagnostics.extend(child.diagnostics);
                emission.skipped.extend(child.skipped);
                emission.escapes |= child.escapes;
            }
            Err(err) if err.is_recoverable() => {
                warn!(path = %ctx.path, error = %err, "skipping nested field");
                emission.skipped.push(err);
            }
            Err(err) => return Err(err),
        }
    }

    emission.fragment = CodeFragment::sequence(parts);
    Ok(emission)
}
