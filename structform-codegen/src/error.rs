//! Field- and record-level generation errors.

use thiserror::Error;

/// A failure to generate code for one field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("field at '{path}' declares {count} names; exactly one is required")]
    MultipleNamesUnsupported { path: String, count: usize },

    #[error("qualified name '{name}' has no '.' separator")]
    MissingQualifiedSeparator { name: String },

    #[error("field '{path}' has unsupported type '{type_name}'")]
    UnsupportedType { path: String, type_name: String },

    #[error("field '{path}' has unsupported element type '{type_name}'")]
    UnsupportedElementType { path: String, type_name: String },
}

impl FieldError {
    /// Whether the rest of the record can still be generated.
    ///
    /// A recoverable error skips only its field; any other error drops the
    /// whole record from the output.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, FieldError::MultipleNamesUnsupported { .. })
    }
}

/// Every field error collected for one record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("record '{record}' has {} error(s)", .errors.len())]
pub struct RecordError {
    pub record: String,
    pub errors: Vec<FieldError>,
}

impl RecordError {
    /// Whether the record was left out of the generated source.
    pub fn dropped(&self) -> bool {
        self.errors.iter().any(|e| !e.is_recoverable())
    }
}
