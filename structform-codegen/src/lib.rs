//! Field-to-code transformer for structform.
//!
//! Given record declarations from [`structform_ir`], this crate generates a
//! Rust module that renders each record as an HTML form (`to_html`,
//! `form_default`) and repopulates it from submitted values
//! (`update_from_form`). It never touches the filesystem.
//!
//! # Pipeline
//!
//! ```text
//! RecordDecl → Generator → (resolve → FieldTransformer) per field → CodeFragment
//!                        → populate_field per field                → CodeFragment
//!                        → render_file → GenerationOutput
//! ```
//!
//! # Modules
//!
//! - [`builder`] - Indented code buffer and code fragments
//! - [`generation`] - Imports, function buffers, file assembly
//! - [`resolve`] - Field paths and descriptors
//! - [`transform`] - Rendering fragments per type kind
//! - [`populate`] - Population statements per type kind
//! - [`kinds`] - Per-primitive format and parse behavior
//!
//! # Example
//!
//! ```
//! use structform_codegen::{Generator, GenerateOptions};
//! use structform_ir::{FieldDecl, FieldType, PrimitiveKind, RecordDecl};
//!
//! let record = RecordDecl::new(
//!     "M",
//!     vec![FieldDecl::new("a", FieldType::primitive(PrimitiveKind::I64)).doc("/// parameter a")],
//! );
//!
//! let output = Generator::new(GenerateOptions::default()).generate(&[record]);
//! assert!(output.source.contains("impl M {"));
//! assert!(output.errors.is_empty());
//! ```

pub mod builder;
mod diagnostic;
mod error;
mod generator;
pub mod generation;
pub mod kinds;
pub mod naming;
pub mod populate;
pub mod resolve;
pub mod template;
pub mod transform;

pub use diagnostic::{Diagnostic, Severity};
pub use error::{FieldError, RecordError};
pub use generator::{DEFAULT_SCOPE, GenerateOptions, GenerationOutput, Generator};
pub use resolve::{FieldDescriptor, FieldPath, TypeKind, UnsupportedType, resolve};
pub use transform::{Emission, FieldTransformer};
