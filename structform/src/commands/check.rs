use clap::Args;
use eyre::{Context, Result};

use super::{SourceArgs, UnwrapOrExit};
use crate::ops;
use crate::reports::{Report, TerminalOutput};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let config = self.source.config().unwrap_or_exit();
        let settings = self.source.settings(config);

        settings.validate(false)?;
        let records = settings.load().unwrap_or_exit();

        let report = ops::check(&records, &settings);
        if self.json {
            let json = serde_json::to_string_pretty(&report).wrap_err("Failed to serialize report")?;
            println!("{}", json);
        } else {
            report.render(&mut TerminalOutput::new());
        }

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
