//! Population pass: statements that read submitted form values back into a
//! record.
//!
//! Every field is independent. A missing key leaves the field untouched, a
//! parse failure is pushed onto `errors` and the remaining fields are still
//! updated. Fields the rendering pass skipped or rejected produce nothing
//! here; their problems are reported once, by the rendering pass.

use structform_ir::{FieldDecl, PrimitiveKind};

use crate::builder::CodeFragment;
use crate::kinds::{ParseStrategy, kind_spec};
use crate::resolve::{FieldDescriptor, FieldPath, TypeKind, resolve};
use crate::template::{FieldContext, literal};

/// Emit the population statements for one declaration, if it has any.
pub fn populate_field(field: &FieldDecl, enclosing: &FieldPath) -> Option<CodeFragment> {
    let mut scratch = Vec::new();
    let descriptor = resolve(field, enclosing, &mut scratch).ok()?;
    populate(&descriptor)
}

/// Whether the statements for these declarations can push onto `errors`.
pub fn collects_errors(fields: &[FieldDecl], enclosing: &FieldPath) -> bool {
    fields.iter().any(|field| {
        let mut scratch = Vec::new();
        let Ok(descriptor) = resolve(field, enclosing, &mut scratch) else {
            return false;
        };
        match descriptor.kind {
            TypeKind::Primitive(kind) | TypeKind::PrimitiveSlice(kind) => {
                kind_spec(kind).parse == ParseStrategy::FromStr
            }
            TypeKind::NestedRecord(children) => collects_errors(children, &descriptor.path),
            TypeKind::Unsupported(_) => false,
        }
    })
}

fn populate(descriptor: &FieldDescriptor<'_>) -> Option<CodeFragment> {
    let ctx = FieldContext::new(descriptor);
    match &descriptor.kind {
        TypeKind::Primitive(kind) => Some(primitive(&ctx, *kind)),
        TypeKind::NestedRecord(fields) => nested(&descriptor.path, fields),
        TypeKind::PrimitiveSlice(kind) => Some(slice(&ctx, *kind)),
        TypeKind::Unsupported(_) => None,
    }
}

fn primitive(ctx: &FieldContext<'_>, kind: PrimitiveKind) -> CodeFragment {
    let spec = kind_spec(kind);
    let target = ctx.value_expression;

    let assign = match spec.parse {
        ParseStrategy::Assign => CodeFragment::line(format!("{} = raw.clone();", target)),
        ParseStrategy::FromStr => CodeFragment::block(
            format!("match raw.parse::<{}>() {{", spec.type_name),
            vec![
                CodeFragment::line(format!("Ok(value) => {} = value,", target)),
                CodeFragment::line(format!(
                    "Err(err) => errors.push(format!({}, {}, err)),",
                    literal("{}: {}"),
                    ctx.name_literal()
                )),
            ],
            Some("}".to_string()),
        ),
    };

    CodeFragment::block(
        format!("if let Some(raw) = form.get({}) {{", ctx.name_literal()),
        vec![assign],
        Some("}".to_string()),
    )
}

fn nested(path: &FieldPath, fields: &[FieldDecl]) -> Option<CodeFragment> {
    let mut parts = Vec::new();
    for field in fields {
        if let Some(fragment) = populate_field(field, path) {
            if !parts.is_empty() {
                parts.push(CodeFragment::blank());
            }
            parts.push(fragment);
        }
    }

    if parts.is_empty() {
        None
    } else {
        Some(CodeFragment::sequence(parts))
    }
}

/// Collect every `<name>.<index>` key, order by index, and replace the
/// vector. Parsed kinds replace it only when every element parsed.
fn slice(ctx: &FieldContext<'_>, kind: PrimitiveKind) -> CodeFragment {
    let spec = kind_spec(kind);
    let target = ctx.value_expression;
    let prefix = literal(&format!("{}.", ctx.path.qualified_name()));

    let entries = CodeFragment::block(
        "let mut entries: Vec<(usize, &String)> = form",
        vec![
            CodeFragment::line(".iter()"),
            CodeFragment::block(
                ".filter_map(|(key, raw)| {",
                vec![
                    CodeFragment::line(format!("key.strip_prefix({})", prefix)),
                    CodeFragment::line("    .and_then(|index| index.parse::<usize>().ok())"),
                    CodeFragment::line("    .map(|index| (index, raw))"),
                ],
                Some("})".to_string()),
            ),
            CodeFragment::line(".collect();"),
        ],
        None,
    );

    let update = match spec.parse {
        ParseStrategy::Assign => vec![CodeFragment::line(format!(
            "{} = entries.into_iter().map(|(_, raw)| raw.clone()).collect();",
            target
        ))],
        ParseStrategy::FromStr => vec![
            CodeFragment::line("let mut values = Vec::with_capacity(entries.len());"),
            CodeFragment::line("let mut failed = false;"),
            CodeFragment::block(
                "for (index, raw) in entries {",
                vec![CodeFragment::block(
                    format!("match raw.parse::<{}>() {{", spec.type_name),
                    vec![
                        CodeFragment::line("Ok(value) => values.push(value),"),
                        CodeFragment::block(
                            "Err(err) => {",
                            vec![
                                CodeFragment::line("failed = true;"),
                                CodeFragment::line(format!(
                                    "errors.push(format!({}, {}, index, err));",
                                    literal("{}.{}: {}"),
                                    ctx.name_literal()
                                )),
                            ],
                            Some("}".to_string()),
                        ),
                    ],
                    Some("}".to_string()),
                )],
                Some("}".to_string()),
            ),
            CodeFragment::block(
                "if !failed {",
                vec![CodeFragment::line(format!("{} = values;", target))],
                Some("}".to_string()),
            ),
        ],
    };

    let mut apply = vec![CodeFragment::line("entries.sort_by_key(|(index, _)| *index);")];
    apply.extend(update);

    CodeFragment::block(
        "{",
        vec![
            entries,
            CodeFragment::block("if !entries.is_empty() {", apply, Some("}".to_string())),
        ],
        Some("}".to_string()),
    )
}
