//! Check command report data structures.

use std::path::PathBuf;

use serde::Serialize;

use super::output::{Output, Report};

/// Report data from a check run.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// Input files the records were read from.
    pub inputs: Vec<PathBuf>,
    pub records: Vec<RecordSummary>,
    /// Error messages.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
}

/// One checked record.
#[derive(Debug, Serialize)]
pub struct RecordSummary {
    pub name: String,
    /// Leaf fields, nested records counted through.
    pub fields: usize,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }

        for warning in &self.warnings {
            out.warning(warning);
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() {
            out.newline();
        }

        if self.is_valid() {
            let inputs: Vec<String> = self.inputs.iter().map(|p| p.display().to_string()).collect();
            out.preformatted(&format!("✓ {} ok", inputs.join(", ")));
            out.newline();
        }

        out.section(&format!("Records ({})", self.records.len()));
        for record in &self.records {
            out.list_item(&format!(
                "{} ({} field{})",
                record.name,
                record.fields,
                if record.fields == 1 { "" } else { "s" }
            ));
        }
    }
}
