//! Check operation - generation without writing.

use structform_codegen::{Generator, Severity};
use structform_ir::{FieldType, RecordDecl};

use super::Settings;
use crate::reports::{CheckReport, RecordSummary};

/// Execute the check operation.
///
/// Runs the generator and collects its diagnostics and errors together with
/// a summary of every record.
pub fn check(records: &[RecordDecl], settings: &Settings) -> CheckReport {
    let output = Generator::new(settings.options.clone()).generate(records);

    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    for diag in &output.diagnostics {
        let msg = if let Some(loc) = &diag.location {
            format!("{}\n  --> {}", diag.message, loc)
        } else {
            diag.message.clone()
        };

        match diag.severity {
            Severity::Error => errors.push(msg),
            Severity::Warning => warnings.push(msg),
        }
    }
    for record in &output.errors {
        errors.extend(record.errors.iter().map(|e| e.to_string()));
    }

    let records = records
        .iter()
        .map(|record| RecordSummary {
            name: record.name.clone(),
            fields: count_fields(&record.fields),
        })
        .collect();

    CheckReport {
        inputs: settings.inputs.clone(),
        records,
        errors,
        warnings,
    }
}

/// Leaf fields, counting through nested records.
fn count_fields(fields: &[structform_ir::FieldDecl]) -> usize {
    fields
        .iter()
        .map(|f| match &f.ty {
            FieldType::Record(record) => count_fields(&record.fields),
            _ => 1,
        })
        .sum()
}
