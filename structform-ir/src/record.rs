//! Record declarations.

use serde::{Deserialize, Serialize};

use crate::PrimitiveKind;

/// A named record declaration: the root a form is generated for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordDecl {
    /// Record name (the Rust type name).
    pub name: String,
    /// Raw leading comment lines of the record itself.
    #[serde(default)]
    pub docs: Vec<String>,
    /// Fields in declaration order.
    pub fields: Vec<FieldDecl>,
}

impl RecordDecl {
    pub fn new(name: impl Into<String>, fields: Vec<FieldDecl>) -> Self {
        Self {
            name: name.into(),
            docs: Vec::new(),
            fields,
        }
    }
}

/// One field declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDecl {
    /// Declared identifiers. Exactly one is expected; several names is the
    /// shorthand for same-typed fields and is rejected by the generator.
    pub names: Vec<String>,
    /// Raw leading comment lines, comment markers included (`/// text`).
    #[serde(default)]
    pub docs: Vec<String>,
    /// Field type classification.
    pub ty: FieldType,
}

impl FieldDecl {
    /// Create a single-name field without documentation.
    pub fn new(name: impl Into<String>, ty: FieldType) -> Self {
        Self {
            names: vec![name.into()],
            docs: Vec::new(),
            ty,
        }
    }

    /// Attach a leading comment line.
    pub fn doc(mut self, line: impl Into<String>) -> Self {
        self.docs.push(line.into());
        self
    }
}

/// The closed set of field type classifications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// A primitive value rendered as one text input.
    Primitive(PrimitiveKind),
    /// A nested record with its own ordered fields.
    Record(RecordType),
    /// A growable sequence (`Vec<T>`).
    Slice(Box<FieldType>),
    /// Anything else, carrying the type as written.
    Unsupported(String),
}

impl FieldType {
    pub fn primitive(kind: PrimitiveKind) -> Self {
        Self::Primitive(kind)
    }

    pub fn record(name: impl Into<String>, fields: Vec<FieldDecl>) -> Self {
        Self::Record(RecordType {
            name: name.into(),
            fields,
        })
    }

    pub fn slice(element: FieldType) -> Self {
        Self::Slice(Box::new(element))
    }

    pub fn unsupported(type_name: impl Into<String>) -> Self {
        Self::Unsupported(type_name.into())
    }

    /// Render the type roughly as it is written in Rust source.
    pub fn type_name(&self) -> String {
        match self {
            FieldType::Primitive(kind) => kind.as_str().to_string(),
            FieldType::Record(record) => record.name.clone(),
            FieldType::Slice(element) => format!("Vec<{}>", element.type_name()),
            FieldType::Unsupported(name) => name.clone(),
        }
    }
}

/// The body of a nested record type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordType {
    /// Type name of the nested record.
    pub name: String,
    /// Fields in declaration order.
    pub fields: Vec<FieldDecl>,
}
