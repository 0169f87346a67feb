//! Record-level driver.
//!
//! For each record, in order: the rendering function, the optional page
//! wrapper, then the population function. Each record is generated against
//! scratch imports and diagnostics that are merged into the run only when
//! the record survives.

use structform_ir::RecordDecl;
use tracing::{debug, info, info_span, warn};

use crate::builder::CodeFragment;
use crate::diagnostic::Diagnostic;
use crate::error::{FieldError, RecordError};
use crate::generation::{
    ESCAPE_FN, FORM_MAP_IMPORT, FORMAT_IMPORT, FunctionSource, ImportSet, escape_fn, render_file,
};
use crate::populate::{collects_errors, populate_field};
use crate::resolve::FieldPath;
use crate::template::literal;
use crate::transform::FieldTransformer;

/// Default scope import: the records live in the parent module.
pub const DEFAULT_SCOPE: &str = "super::*";

/// Options for one generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Reject unsupported field types instead of skipping them.
    pub strict: bool,
    /// Emit `form_default`, the full-page wrapper around `to_html`.
    pub form_page: bool,
    /// Import that brings the records into scope. `None` emits no import.
    pub scope: Option<String>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            strict: false,
            form_page: true,
            scope: Some(DEFAULT_SCOPE.to_string()),
        }
    }
}

impl GenerateOptions {
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn form_page(mut self, form_page: bool) -> Self {
        self.form_page = form_page;
        self
    }

    /// Set the scope import; an empty path disables it.
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        let scope = scope.into();
        self.scope = (!scope.is_empty()).then_some(scope);
        self
    }
}

/// Everything one run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOutput {
    /// The complete generated file.
    pub source: String,
    pub imports: ImportSet,
    pub diagnostics: Vec<Diagnostic>,
    /// One entry per record that reported field errors.
    pub errors: Vec<RecordError>,
}

impl GenerationOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Names of the records left out of `source`.
    pub fn dropped_records(&self) -> impl Iterator<Item = &str> {
        self.errors
            .iter()
            .filter(|e| e.dropped())
            .map(|e| e.record.as_str())
    }
}

/// Generates form code for records.
///
/// Holds only immutable options; every [`Generator::generate`] call owns its
/// own accumulators.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    options: GenerateOptions,
}

/// Output of one record before it is merged into the run.
struct RecordOutput {
    item: CodeFragment,
    imports: ImportSet,
    diagnostics: Vec<Diagnostic>,
    errors: Vec<FieldError>,
    /// Calls the escape helper.
    escapes: bool,
}

impl Generator {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }

    /// Generate the file for `records`, in order.
    pub fn generate(&self, records: &[RecordDecl]) -> GenerationOutput {
        let mut imports = ImportSet::new();
        if let Some(scope) = &self.options.scope {
            imports.add(scope);
        }

        let mut items = Vec::new();
        let mut diagnostics = Vec::new();
        let mut errors = Vec::new();
        let mut escapes = false;

        for record in records {
            let _span = info_span!("record", name = %record.name).entered();
            let output = self.generate_record(record);

            let failure = RecordError {
                record: record.name.clone(),
                errors: output.errors,
            };

            if failure.dropped() {
                warn!(errors = failure.errors.len(), "record dropped");
                diagnostics.push(
                    Diagnostic::error(format!("record '{}' was not generated", record.name))
                        .at(record.name.clone()),
                );
            } else {
                imports.merge(&output.imports);
                diagnostics.extend(output.diagnostics);
                items.push(output.item);
                escapes |= output.escapes;
            }

            if !failure.errors.is_empty() {
                errors.push(failure);
            }
        }

        info!(
            records = items.len(),
            failed = errors.len(),
            "generation finished"
        );

        if escapes {
            items.push(escape_fn());
        }

        GenerationOutput {
            source: render_file(&imports, items),
            imports,
            diagnostics,
            errors,
        }
    }

    fn generate_record(&self, record: &RecordDecl) -> RecordOutput {
        let transformer = FieldTransformer::new(self.options.strict);
        let root = FieldPath::root(&record.name);

        let mut imports = ImportSet::new();
        let mut diagnostics = Vec::new();
        let mut errors = Vec::new();
        let mut fragments = Vec::new();
        let mut writes = false;
        let mut escapes = false;

        for field in &record.fields {
            match transformer.transform_field(field, &root) {
                Ok(emission) => {
                    fragments.push(emission.fragment);
                    imports.merge(&emission.imports);
                    diagnostics.extend(emission.diagnostics);
                    errors.extend(emission.skipped);
                    writes |= emission.writes;
                    escapes |= emission.escapes;
                }
                Err(err) => {
                    debug!(error = %err, "field failed");
                    errors.push(err);
                }
            }
        }

        let out = if writes {
            "let mut out = String::new();"
        } else {
            "let out = String::new();"
        };
        let mut render = FunctionSource::open(
            "Render the record as labeled HTML form inputs.",
            "pub fn to_html(&self) -> String",
            vec![CodeFragment::line(out)],
        );
        for fragment in fragments {
            render.append(fragment);
        }
        debug!(fragments = render.len(), "rendering function built");

        let mut functions = vec![render.finish(vec![CodeFragment::line("out")])];

        if self.options.form_page {
            imports.add(FORMAT_IMPORT);
            escapes = true;
            functions.push(form_page());
        }

        imports.add(FORM_MAP_IMPORT);
        let errors_decl = if collects_errors(&record.fields, &root) {
            "let mut errors: Vec<String> = Vec::new();"
        } else {
            "let errors: Vec<String> = Vec::new();"
        };
        let mut populate = FunctionSource::open(
            "Update fields from submitted form values, collecting parse failures.",
            "pub fn update_from_form(&mut self, form: &HashMap<String, String>) -> Result<(), Vec<String>>",
            vec![CodeFragment::line(errors_decl)],
        );
        for field in &record.fields {
            if let Some(fragment) = populate_field(field, &root) {
                populate.append(fragment);
            }
        }
        functions.push(populate.finish(vec![
            CodeFragment::block("if errors.is_empty() {", vec![CodeFragment::line("Ok(())")], None),
            CodeFragment::block(
                "} else {",
                vec![CodeFragment::line("Err(errors)")],
                Some("}".to_string()),
            ),
        ]));

        let mut body = Vec::new();
        for function in functions {
            if !body.is_empty() {
                body.push(CodeFragment::blank());
            }
            body.push(function);
        }

        RecordOutput {
            item: CodeFragment::block(format!("impl {} {{", record.name), body, Some("}".to_string())),
            imports,
            diagnostics,
            errors,
            escapes,
        }
    }
}

/// A complete page whose form submits the rendered inputs with GET.
fn form_page() -> CodeFragment {
    let push = |text: &str| CodeFragment::line(format!("out.push_str({});", literal(text)));

    let mut page = FunctionSource::open(
        "Render a complete HTML page with a form that submits to `handler_name`.",
        "pub fn form_default(&self, handler_name: &str) -> String",
        Vec::new(),
    );
    page.append(CodeFragment::sequence(vec![
        CodeFragment::line("let mut out = String::new();"),
        push("<!DOCTYPE html>\n"),
        push("<html>\n"),
        push("<body>\n"),
        CodeFragment::line(format!(
            "let _ = write!(out, {}, {}(handler_name));",
            literal("<form action=\"{}\" target=\"_blank\" method=\"GET\">\n"),
            ESCAPE_FN
        )),
        CodeFragment::line("out.push_str(&self.to_html());"),
        push("<input type=\"submit\" value=\"Submit\">"),
        push("</form>"),
        push("<br>\n"),
        push("</body>\n"),
        push("</html>\n"),
    ]));
    page.finish(vec![CodeFragment::line("out")])
}

#[cfg(test)]
mod tests {
    use super::*;
    use structform_ir::{FieldDecl, FieldType, PrimitiveKind};

    fn record(name: &str, fields: Vec<FieldDecl>) -> RecordDecl {
        RecordDecl::new(name, fields)
    }

    fn int(name: &str) -> FieldDecl {
        FieldDecl::new(name, FieldType::primitive(PrimitiveKind::I32)).doc(format!("/// {}", name))
    }

    #[test]
    fn test_scope_option() {
        let options = GenerateOptions::default().scope("");
        assert_eq!(options.scope, None);

        let options = GenerateOptions::default().scope("crate::model::*");
        assert_eq!(options.scope.as_deref(), Some("crate::model::*"));
    }

    #[test]
    fn test_fresh_imports_per_run() {
        let generator = Generator::default();
        let first = generator.generate(&[record("A", vec![int("x")])]);
        let second = generator.generate(&[]);

        assert!(first.imports.contains(FORMAT_IMPORT));
        assert!(!second.imports.contains(FORMAT_IMPORT));
        assert_eq!(second.imports.iter().collect::<Vec<_>>(), vec![DEFAULT_SCOPE]);
    }

    #[test]
    fn test_dropped_record_leaves_others() {
        let generator = Generator::new(GenerateOptions::default().strict(true));
        let output = generator.generate(&[
            record("A", vec![int("x")]),
            record("B", vec![FieldDecl::new("p", FieldType::unsupported("Box<P>"))]),
            record("C", vec![int("y")]),
        ]);

        assert!(output.source.contains("impl A {"));
        assert!(!output.source.contains("impl B {"));
        assert!(output.source.contains("impl C {"));
        assert_eq!(output.dropped_records().collect::<Vec<_>>(), vec!["B"]);
        assert!(output.diagnostics.iter().any(|d| d.is_error()));
    }

    #[test]
    fn test_empty_record_name_is_dropped() {
        let output = Generator::default().generate(&[record("", vec![int("x")])]);

        assert_eq!(output.errors.len(), 1);
        assert_eq!(
            output.errors[0].errors,
            vec![FieldError::MissingQualifiedSeparator { name: "x".into() }]
        );
        assert!(output.errors[0].dropped());
    }

    #[test]
    fn test_form_page_toggle() {
        let with_page = Generator::default().generate(&[record("A", vec![int("x")])]);
        assert!(with_page.source.contains("pub fn form_default(&self, handler_name: &str) -> String {"));

        let without = Generator::new(GenerateOptions::default().form_page(false))
            .generate(&[record("A", vec![int("x")])]);
        assert!(!without.source.contains("form_default"));
    }

    #[test]
    fn test_record_without_fields() {
        let output = Generator::new(GenerateOptions::default().form_page(false))
            .generate(&[record("E", vec![])]);

        assert!(output.source.contains(
            "    pub fn to_html(&self) -> String {\n        let out = String::new();\n\n        out\n    }\n"
        ));
        assert!(output.source.contains("        let errors: Vec<String> = Vec::new();\n"));
        assert!(!output.imports.contains(FORMAT_IMPORT));
        assert!(output.imports.contains(FORM_MAP_IMPORT));
        assert!(!output.source.contains("fn escape_html"));
    }

    #[test]
    fn test_errors_are_mutable_only_when_parsed() {
        let text = FieldDecl::new("s", FieldType::primitive(PrimitiveKind::String)).doc("/// s");
        let words = FieldDecl::new("w", FieldType::slice(FieldType::primitive(PrimitiveKind::String)))
            .doc("/// w");
        let assigned = Generator::default().generate(&[record("T", vec![text, words])]);
        assert!(assigned.source.contains("        let errors: Vec<String> = Vec::new();\n"));
        assert!(assigned.source.contains("        let mut out = String::new();\n"));

        let nested = FieldDecl::new("d", FieldType::record("D", vec![int("n")])).doc("/// d");
        let parsed = Generator::default().generate(&[record("P", vec![nested])]);
        assert!(parsed.source.contains("        let mut errors: Vec<String> = Vec::new();\n"));
    }

    #[test]
    fn test_escape_helper_is_emitted_once() {
        let output = Generator::default().generate(&[
            record("A", vec![int("x")]),
            record("B", vec![int("y")]),
        ]);

        assert_eq!(output.source.matches("fn escape_html(text: &str) -> String {").count(), 1);
        assert!(output.source.contains("escape_html(&format!(\"{}\", self.x))"));
        assert!(output.source.contains("escape_html(handler_name)"));
        assert!(output.source.ends_with("    escaped\n}\n"));
    }

    #[test]
    fn test_raw_identifier_fields_keep_plain_names_in_markup() {
        let field = FieldDecl::new("type", FieldType::slice(FieldType::primitive(PrimitiveKind::String)))
            .doc("/// kinds");
        let source = Generator::default().generate(&[record("M", vec![field])]).source;

        assert!(source.contains("for (index, item) in self.r#type.iter().enumerate() {"));
        assert!(source.contains("function M_type_add() {"));
        assert!(source.contains("key.strip_prefix(\"M.type.\")"));
        assert!(!source.contains("M_r#type"));
        assert!(!source.contains("\"M.r#type"));
    }
}
