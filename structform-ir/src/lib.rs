//! Intermediate representation types for the structform generator.
//!
//! This crate holds the declaration model shared by the source loader and
//! the code generator. A declaration is a named record with an ordered list
//! of typed fields; nested records carry their own field lists.
//!
//! # Architecture
//!
//! ```text
//! *.rs (Rust source) → structform-source (syn) → structform-ir → structform-codegen
//! ```
//!
//! The IR types are:
//! - Front-end agnostic (no `syn` types leak in)
//! - Serializable, so declarations can also be supplied as data
//! - Trees: a nested record owns its fields, no back references

mod record;
mod types;

pub use record::{FieldDecl, FieldType, RecordDecl, RecordType};
pub use types::{PrimitiveFamily, PrimitiveKind};
