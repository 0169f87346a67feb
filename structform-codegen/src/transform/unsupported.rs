use tracing::debug;

use super::Emission;
use crate::builder::CodeFragment;
use crate::diagnostic::Diagnostic;
use crate::resolve::UnsupportedType;
use crate::template::FieldContext;

/// Soft-fail: a comment in place of the field and a warning.
pub(super) fn emit(ctx: &FieldContext<'_>, unsupported: &UnsupportedType) -> Emission {
    let path = ctx.path.qualified_name();
    let type_name = unsupported.type_name().replace('\n', " ");
    debug!(%path, %type_name, "skipping unsupported field");

    let message = match unsupported {
        UnsupportedType::Type(_) => format!("field '{}' has unsupported type '{}'", path, type_name),
        UnsupportedType::Element(_) => {
            format!("field '{}' has unsupported element type '{}'", path, type_name)
        }
    };

    Emission::new(CodeFragment::comment(format!(
        "structform: skipped field '{}': unsupported type '{}'",
        path, type_name
    )))
    .diagnostic(Diagnostic::warning(message).at(path))
}
