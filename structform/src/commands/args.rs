use std::path::{Path, PathBuf};

use clap::Args;
use structform_codegen::GenerateOptions;
use structform_source::{CONFIG_FILE, Config, GenerateConfig};

use crate::ops::Settings;

/// Arguments shared by every command that loads records.
#[derive(Args)]
pub struct SourceArgs {
    /// Path to structform.toml (defaults to ./structform.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Rust source file to read records from (repeatable, overrides config)
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub inputs: Vec<PathBuf>,

    /// Record to generate a form for (repeatable, overrides config)
    #[arg(short = 'r', long = "record", value_name = "NAME")]
    pub records: Vec<String>,

    /// Reject unsupported field types instead of skipping them
    #[arg(long)]
    pub strict: bool,

    /// Do not emit the form_default page wrapper
    #[arg(long)]
    pub no_form_page: bool,
}

impl SourceArgs {
    /// Open the config file, if one was given or one exists in the
    /// current directory.
    pub fn config(&self) -> structform_source::Result<GenerateConfig> {
        match &self.config {
            Some(path) => Ok(Config::open(path)?.generate),
            None if Path::new(CONFIG_FILE).is_file() => Ok(Config::open(CONFIG_FILE)?.generate),
            None => Ok(GenerateConfig::default()),
        }
    }

    /// Apply command-line overrides to the config values.
    pub fn settings(&self, config: GenerateConfig) -> Settings {
        let inputs = if self.inputs.is_empty() {
            config.inputs
        } else {
            self.inputs.clone()
        };
        let records = if self.records.is_empty() {
            config.records
        } else {
            self.records.clone()
        };

        let options = GenerateOptions::default()
            .strict(config.strict || self.strict)
            .form_page(config.form_page && !self.no_form_page)
            .scope(config.scope);

        Settings {
            inputs,
            records,
            output: config.output,
            options,
            format: config.format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> SourceArgs {
        SourceArgs {
            config: None,
            inputs: Vec::new(),
            records: Vec::new(),
            strict: false,
            no_form_page: false,
        }
    }

    #[test]
    fn test_flags_override_config() {
        let config = GenerateConfig {
            inputs: vec![PathBuf::from("config.rs")],
            records: vec!["FromConfig".into()],
            scope: "crate::model::*".into(),
            ..GenerateConfig::default()
        };
        let mut args = args();
        args.inputs = vec![PathBuf::from("flag.rs")];
        args.strict = true;
        args.no_form_page = true;

        let settings = args.settings(config);

        assert_eq!(settings.inputs, vec![PathBuf::from("flag.rs")]);
        assert_eq!(settings.records, vec!["FromConfig"]);
        assert!(settings.options.strict);
        assert!(!settings.options.form_page);
        assert_eq!(settings.options.scope.as_deref(), Some("crate::model::*"));
    }

    #[test]
    fn test_empty_scope_disables_import() {
        let config = GenerateConfig {
            scope: String::new(),
            ..GenerateConfig::default()
        };
        assert_eq!(args().settings(config).options.scope, None);
    }
}
