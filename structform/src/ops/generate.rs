//! Generate operation - form code from records.

use std::{path::Path, process::Command};

use eyre::{Context, Result};
use structform_codegen::{Generator, Severity};
use structform_ir::RecordDecl;
use tracing::{debug, info};

use super::Settings;
use crate::reports::{GenerateReport, GenerationResult, WrittenResult};

/// Execute the generate operation.
///
/// Generates code for `records`, then either returns it as a preview or
/// writes it to the configured output file and formats it.
pub fn generate(records: &[RecordDecl], settings: &Settings, dry_run: bool) -> Result<GenerateReport> {
    let output = Generator::new(settings.options.clone()).generate(records);

    let warnings = output
        .diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Warning)
        .map(|d| d.message.clone())
        .collect();

    let errors = output
        .errors
        .iter()
        .flat_map(|record| {
            let status = if record.dropped() { "not generated" } else { "generated partially" };
            std::iter::once(format!("{} ({})", record, status))
                .chain(record.errors.iter().map(|e| format!("  {}", e)))
        })
        .collect();

    let dropped: Vec<&str> = output.dropped_records().collect();
    let generated = records
        .iter()
        .map(|r| r.name.clone())
        .filter(|name| !dropped.contains(&name.as_str()))
        .collect();

    let result = if dry_run {
        GenerationResult::Preview(output.source)
    } else {
        let path = settings
            .output
            .as_deref()
            .ok_or_else(|| eyre::eyre!("no output file given"))?;
        write_file(path, &output.source)
            .wrap_err_with(|| format!("Failed to write '{}'", path.display()))?;
        info!(path = %path.display(), "generated file written");

        let formatted = settings.format && rustfmt(path);
        GenerationResult::Written(WrittenResult {
            path: path.to_path_buf(),
            formatted,
        })
    };

    Ok(GenerateReport {
        generated,
        warnings,
        errors,
        result,
    })
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Pretty-print the file in place. Failure leaves the file as written.
fn rustfmt(path: &Path) -> bool {
    match Command::new("rustfmt").args(["--edition", "2024"]).arg(path).output() {
        Ok(output) if output.status.success() => true,
        Ok(output) => {
            debug!(
                stderr = %String::from_utf8_lossy(&output.stderr),
                "rustfmt failed, keeping unformatted output"
            );
            false
        }
        Err(err) => {
            debug!(error = %err, "rustfmt unavailable, keeping unformatted output");
            false
        }
    }
}
