//! Declaration loading for structform.
//!
//! Parses Rust source files with `syn`, finds the requested structs and
//! lowers them into [`structform_ir`] records. Named structs referenced by a
//! field are expanded into nested records when they are declared anywhere in
//! the loaded files. Also reads `structform.toml`.
//!
//! ```
//! use structform_source::{SourceFile, SourceSet};
//!
//! let mut set = SourceSet::new();
//! set.add(SourceFile::parse("struct M { /// parameter a\n a: i64 }", "model.rs").unwrap());
//!
//! let record = set.record("M").unwrap();
//! assert_eq!(record.fields[0].names, vec!["a"]);
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod file;
mod lower;
mod set;

pub use config::{CONFIG_FILE, Config, GenerateConfig};
pub use error::{Error, Result};
pub use file::SourceFile;
pub use set::SourceSet;
