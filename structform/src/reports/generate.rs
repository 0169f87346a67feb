//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Records present in the generated source.
    pub generated: Vec<String>,

    /// Warning messages from the generator.
    pub warnings: Vec<String>,

    /// Record errors, one line per record followed by its field errors.
    pub errors: Vec<String>,

    /// Generation result (file written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// The file was written to disk.
    Written(WrittenResult),
    /// Dry-run preview of the generated source.
    Preview(String),
}

/// Result when the file was written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    pub path: PathBuf,
    /// Whether rustfmt ran successfully on it.
    pub formatted: bool,
}

impl GenerateReport {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }
        for error in &self.errors {
            out.error(error);
        }
        if !self.warnings.is_empty() || !self.errors.is_empty() {
            out.newline();
        }

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(source) => self.render_preview(out, source),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.section(&format!("Records ({})", self.generated.len()));
        for name in &self.generated {
            out.list_item(name);
        }
        out.newline();

        let suffix = if written.formatted { "" } else { " (not formatted)" };
        out.key_value("Generated", &format!("{}{}", written.path.display(), suffix));
    }

    fn render_preview(&self, out: &mut dyn Output, source: &str) {
        out.divider("Generated source");
        out.preformatted(source);
        out.divider("Summary");
        out.preformatted(&format!(
            "{} record{} would be generated",
            self.generated.len(),
            if self.generated.len() == 1 { "" } else { "s" }
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::testing::RecordingOutput;

    #[test]
    fn test_render_written() {
        let report = GenerateReport {
            generated: vec!["M".into()],
            warnings: vec!["field 'M.a' has no documentation".into()],
            errors: Vec::new(),
            result: GenerationResult::Written(WrittenResult {
                path: PathBuf::from("src/form_gen.rs"),
                formatted: true,
            }),
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "warning: field 'M.a' has no documentation",
                "",
                "Records (1):",
                "  - M",
                "",
                "Generated: src/form_gen.rs",
            ]
        );
    }

    #[test]
    fn test_render_preview() {
        let report = GenerateReport {
            generated: vec!["A".into(), "B".into()],
            warnings: Vec::new(),
            errors: Vec::new(),
            result: GenerationResult::Preview("// source".into()),
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "── Generated source ──",
                "// source",
                "── Summary ──",
                "2 records would be generated",
            ]
        );
    }
}
