//! Field transformer: one resolved field in, one code fragment out.
//!
//! Dispatch is a single `match` over [`TypeKind`]; each arm lives in its own
//! module. Imports and diagnostics are returned in the [`Emission`] and
//! merged by the caller.

mod nested;
mod primitive;
mod slice;
mod unsupported;

use structform_ir::FieldDecl;

use crate::builder::CodeFragment;
use crate::diagnostic::Diagnostic;
use crate::error::FieldError;
use crate::generation::ImportSet;
use crate::resolve::{FieldDescriptor, FieldPath, SEPARATOR, TypeKind, resolve};
use crate::template::FieldContext;

/// Output of transforming one field.
#[derive(Debug, Clone, PartialEq)]
pub struct Emission {
    pub fragment: CodeFragment,
    pub imports: ImportSet,
    pub diagnostics: Vec<Diagnostic>,
    /// Recoverable errors of nested fields that were skipped.
    pub skipped: Vec<FieldError>,
    /// The fragment appends to `out`.
    pub writes: bool,
    /// The fragment calls the generated escape helper.
    pub escapes: bool,
}

impl Emission {
    pub fn new(fragment: CodeFragment) -> Self {
        Self {
            fragment,
            imports: ImportSet::new(),
            diagnostics: Vec::new(),
            skipped: Vec::new(),
            writes: false,
            escapes: false,
        }
    }

    /// Mark the fragment as appending to `out`.
    pub fn writing(mut self) -> Self {
        self.writes = true;
        self
    }

    /// Mark the fragment as needing the escape helper.
    pub fn escaping(mut self) -> Self {
        self.escapes = true;
        self
    }

    /// Declare an import the fragment needs.
    pub fn import(mut self, path: &str) -> Self {
        self.imports.add(path);
        self
    }

    pub fn diagnostic(mut self, diagnostic: Diagnostic) -> Self {
        self.diagnostics.push(diagnostic);
        self
    }
}

/// Turns field declarations into rendering fragments.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldTransformer {
    strict: bool,
}

impl FieldTransformer {
    /// Create a transformer. In strict mode unsupported types are errors
    /// instead of skipped fields.
    pub fn new(strict: bool) -> Self {
        Self { strict }
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Resolve a declaration inside `enclosing` and transform it.
    pub fn transform_field(
        &self,
        field: &FieldDecl,
        enclosing: &FieldPath,
    ) -> Result<Emission, FieldError> {
        let mut diagnostics = Vec::new();
        let descriptor = resolve(field, enclosing, &mut diagnostics)?;
        let mut emission = self.transform(&descriptor)?;
        diagnostics.append(&mut emission.diagnostics);
        emission.diagnostics = diagnostics;
        Ok(emission)
    }

    /// Emit the rendering fragment of one resolved field.
    pub fn transform(&self, descriptor: &FieldDescriptor<'_>) -> Result<Emission, FieldError> {
        if !descriptor.path.qualified_name().contains(SEPARATOR) {
            return Err(FieldError::MissingQualifiedSeparator {
                name: descriptor.path.qualified_name(),
            });
        }

        let ctx = FieldContext::new(descriptor);
        match &descriptor.kind {
            TypeKind::Primitive(kind) => Ok(primitive::emit(&ctx, *kind)),
            TypeKind::NestedRecord(fields) => nested::emit(self, &ctx, fields),
            TypeKind::PrimitiveSlice(kind) => Ok(slice::emit(&ctx, *kind)),
            TypeKind::Unsupported(unsupported) => {
                if self.strict {
                    Err(unsupported.clone().into_error(&descriptor.path))
                } else {
                    Ok(unsupported::emit(&ctx, unsupported))
                }
            }
        }
    }
}
