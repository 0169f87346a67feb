//! Output management: import tracking, function buffers, emitted helpers and
//! file assembly.

mod file;
mod imports;
mod source;
mod support;

pub use file::{GENERATED_HEADER, render_file};
pub use imports::{FORM_MAP_IMPORT, FORMAT_IMPORT, ImportSet};
pub use source::FunctionSource;
pub use support::{ESCAPE_FN, escape_fn, escaped_value};
