//! Core operations.
//!
//! This module contains the business logic for structform commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;

use std::path::PathBuf;

pub use check::check;
pub use generate::generate;
use structform_codegen::GenerateOptions;
use structform_ir::RecordDecl;
use structform_source::SourceSet;

/// Resolved settings: `structform.toml` values with command-line overrides
/// applied.
#[derive(Debug, Clone)]
pub struct Settings {
    pub inputs: Vec<PathBuf>,
    pub records: Vec<String>,
    pub output: Option<PathBuf>,
    pub options: GenerateOptions,
    /// Run rustfmt on the written file.
    pub format: bool,
}

impl Settings {
    /// Every problem with the settings, so they can be reported together.
    pub fn problems(&self, require_output: bool) -> Vec<String> {
        let mut problems = Vec::new();

        if self.inputs.is_empty() {
            problems.push("no input file given (use -i or [generate] inputs)".to_string());
        }
        if self.records.is_empty() {
            problems.push("no record given (use -r or [generate] records)".to_string());
        }
        if require_output && self.output.as_ref().is_none_or(|o| o.as_os_str().is_empty()) {
            problems.push("no output file given (use -o or [generate] output)".to_string());
        }
        for input in &self.inputs {
            if !input.is_file() {
                problems.push(format!("input file '{}' does not exist", input.display()));
            }
        }

        problems
    }

    /// Fail with every problem at once.
    pub fn validate(&self, require_output: bool) -> eyre::Result<()> {
        let problems = self.problems(require_output);
        if problems.is_empty() {
            return Ok(());
        }

        let list: Vec<String> = problems.iter().map(|p| format!("  - {}", p)).collect();
        eyre::bail!("invalid arguments:\n{}", list.join("\n"))
    }

    /// Load and lower the requested records.
    pub fn load(&self) -> structform_source::Result<Vec<RecordDecl>> {
        SourceSet::open_all(self.inputs.as_slice())?.records(self.records.as_slice())
    }
}
