//! Field resolution: from a declaration to a normalized descriptor.

use std::fmt;

use structform_ir::{FieldDecl, FieldType, PrimitiveKind};

use crate::diagnostic::Diagnostic;
use crate::error::FieldError;
use crate::naming::field_accessor;
use crate::template::{escape_html, escape_literal};

/// Separator between path segments in a qualified name.
pub const SEPARATOR: char = '.';

/// Comment-opening markers, longest first so `///` wins over `//`.
const COMMENT_MARKERS: &[&str] = &["///", "//!", "//", "/**", "/*!", "/*"];

/// Path of a field from the record root, one segment per nesting level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    /// Path of a record root. An empty name yields an empty path.
    pub fn root(record: &str) -> Self {
        let segments = if record.is_empty() {
            Vec::new()
        } else {
            vec![record.to_string()]
        };
        Self { segments }
    }

    /// Path of a field declared directly inside this one.
    pub fn child(&self, name: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(name.to_string());
        Self { segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Segments joined with `.`, root included: the form-control name.
    pub fn qualified_name(&self) -> String {
        self.segments.join(".")
    }

    /// Accessor expression on `self`: the path minus the root segment.
    pub fn value_expression(&self) -> String {
        let mut expr = String::from("self");
        for segment in self.segments.iter().skip(1) {
            expr.push('.');
            expr.push_str(&field_accessor(segment));
        }
        expr
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.qualified_name())
    }
}

/// Why a field type cannot be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnsupportedType {
    /// The field type itself.
    Type(String),
    /// The element type of a `Vec`.
    Element(String),
}

impl UnsupportedType {
    pub fn type_name(&self) -> &str {
        match self {
            UnsupportedType::Type(name) | UnsupportedType::Element(name) => name,
        }
    }

    pub fn into_error(self, path: &FieldPath) -> FieldError {
        match self {
            UnsupportedType::Type(type_name) => FieldError::UnsupportedType {
                path: path.qualified_name(),
                type_name,
            },
            UnsupportedType::Element(type_name) => FieldError::UnsupportedElementType {
                path: path.qualified_name(),
                type_name,
            },
        }
    }
}

/// Classification a transformer dispatches on.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeKind<'a> {
    Primitive(PrimitiveKind),
    NestedRecord(&'a [FieldDecl]),
    PrimitiveSlice(PrimitiveKind),
    Unsupported(UnsupportedType),
}

impl<'a> TypeKind<'a> {
    pub fn classify(ty: &'a FieldType) -> Self {
        match ty {
            FieldType::Primitive(kind) => TypeKind::Primitive(*kind),
            FieldType::Record(record) => TypeKind::NestedRecord(&record.fields),
            FieldType::Slice(element) => match element.as_ref() {
                FieldType::Primitive(kind) => TypeKind::PrimitiveSlice(*kind),
                other => TypeKind::Unsupported(UnsupportedType::Element(other.type_name())),
            },
            FieldType::Unsupported(name) => TypeKind::Unsupported(UnsupportedType::Type(name.clone())),
        }
    }
}

/// A resolved field, created fresh per field per pass.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor<'a> {
    pub path: FieldPath,
    /// Qualified name, escaped for a string literal.
    pub qualified_name: String,
    /// Leading comment text without markers, escaped for HTML and then for a
    /// string literal.
    pub documentation: String,
    pub value_expression: String,
    pub kind: TypeKind<'a>,
}

/// Resolve one field declared inside `enclosing`.
///
/// A missing documentation comment is reported as a warning in
/// `diagnostics`; it never fails resolution.
pub fn resolve<'a>(
    field: &'a FieldDecl,
    enclosing: &FieldPath,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<FieldDescriptor<'a>, FieldError> {
    let [name] = field.names.as_slice() else {
        return Err(FieldError::MultipleNamesUnsupported {
            path: enclosing.qualified_name(),
            count: field.names.len(),
        });
    };

    let path = enclosing.child(name);
    let qualified_name = path.qualified_name();

    let documentation = extract_documentation(&field.docs);
    if documentation.is_empty() {
        diagnostics.push(
            Diagnostic::warning(format!("field '{}' has no documentation", qualified_name))
                .at(qualified_name.clone()),
        );
    }

    Ok(FieldDescriptor {
        value_expression: path.value_expression(),
        qualified_name: escape_literal(&qualified_name),
        documentation: escape_literal(&escape_html(&documentation)),
        kind: TypeKind::classify(&field.ty),
        path,
    })
}

/// Concatenate comment lines without their markers and trim the result.
pub fn extract_documentation(lines: &[String]) -> String {
    let text: String = lines.iter().map(|line| strip_comment_marker(line)).collect();
    text.trim().to_string()
}

fn strip_comment_marker(line: &str) -> &str {
    let line = line.trim();
    let body = COMMENT_MARKERS
        .iter()
        .find_map(|marker| line.strip_prefix(marker))
        .unwrap_or(line);
    body.strip_suffix("*/").unwrap_or(body)
}
