use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use proc_macro2::LineColumn;
use thiserror::Error;

/// Result type for structform-source operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(structform::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse Rust source: {message}")]
    #[diagnostic(code(structform::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("failed to parse structform.toml")]
    #[diagnostic(code(structform::config_error))]
    ConfigParse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("record '{name}' not found in the input files")]
    #[diagnostic(code(structform::record_not_found), help("available structs: {available}"))]
    RecordNotFound { name: String, available: String },

    #[error("'{name}' is not a struct with named fields")]
    #[diagnostic(
        code(structform::not_named_struct),
        help("forms can only be generated for structs like `struct {name} {{ field: Type }}`")
    )]
    NotNamedStruct {
        #[source_code]
        src: NamedSource<String>,
        #[label("declared here")]
        span: Option<SourceSpan>,
        name: String,
    },
}

impl Error {
    /// Create a parse error from a syn error with source context
    pub fn parse(source: syn::Error, src: &str, filename: &str) -> Box<Self> {
        let span = span_of(src, source.span().start(), source.span().end());
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            message: source.to_string(),
        })
    }

    /// Create a config parse error from a toml error with source context
    pub fn config(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::ConfigParse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }
}

/// Convert a line/column range into a byte span of `src`.
///
/// Lines are 1-based and columns count characters, as reported by
/// `proc-macro2` with span locations enabled.
pub(crate) fn span_of(src: &str, start: LineColumn, end: LineColumn) -> Option<SourceSpan> {
    let from = offset_of(src, start)?;
    let to = offset_of(src, end).unwrap_or(from).max(from);
    Some(SourceSpan::from(from..to))
}

fn offset_of(src: &str, at: LineColumn) -> Option<usize> {
    if at.line == 0 {
        return None;
    }
    let mut offset = 0;
    for (index, line) in src.split_inclusive('\n').enumerate() {
        if index + 1 == at.line {
            let column = line
                .char_indices()
                .nth(at.column)
                .map(|(i, _)| i)
                .unwrap_or(line.len());
            return Some(offset + column);
        }
        offset += line.len();
    }
    Some(src.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_of() {
        let src = "struct A {\n    x: u8,\n}\n";
        let span = span_of(
            src,
            LineColumn { line: 2, column: 4 },
            LineColumn { line: 2, column: 5 },
        )
        .unwrap();
        assert_eq!(span.offset(), 15);
        assert_eq!(span.len(), 1);
        assert_eq!(&src[15..16], "x");
    }

    #[test]
    fn test_span_of_unknown_line() {
        assert!(span_of("", LineColumn { line: 0, column: 0 }, LineColumn { line: 0, column: 0 }).is_none());
    }

    #[test]
    fn test_parse_error_has_span() {
        let src = "struct A {\n    x u8,\n}\n";
        let err = syn::parse_file(src).unwrap_err();
        let err = Error::parse(err, src, "model.rs");
        match *err {
            Error::Parse { span, .. } => assert!(span.is_some()),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
