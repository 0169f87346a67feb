//! Generated code as data, and the buffer that turns it into text.

mod code_builder;
mod fragment;

pub use code_builder::CodeBuilder;
pub use fragment::CodeFragment;
