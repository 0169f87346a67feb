use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::{SourceArgs, UnwrapOrExit};
use crate::ops;
use crate::reports::{Report, TerminalOutput};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Generated file (overrides config)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Do not run rustfmt on the generated file
    #[arg(long)]
    pub no_format: bool,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let config = self.source.config().unwrap_or_exit();
        let mut settings = self.source.settings(config);
        if let Some(output) = &self.output {
            settings.output = Some(output.clone());
        }
        settings.format = settings.format && !self.no_format;

        settings.validate(!self.dry_run)?;
        let records = settings.load().unwrap_or_exit();

        let report = ops::generate(&records, &settings, self.dry_run)?;
        report.render(&mut TerminalOutput::new());

        if report.has_errors() {
            std::process::exit(1);
        }
        Ok(())
    }
}
