//! `structform.toml` configuration.

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;

use crate::{Error, Result};

/// Default configuration file name.
pub const CONFIG_FILE: &str = "structform.toml";

/// Root of `structform.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub generate: GenerateConfig,
}

/// The `[generate]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerateConfig {
    /// Rust source files to read records from.
    pub inputs: Vec<PathBuf>,
    /// Names of the records to generate forms for.
    pub records: Vec<String>,
    /// Generated file.
    pub output: Option<PathBuf>,
    /// Reject unsupported field types instead of skipping them.
    pub strict: bool,
    /// Emit the full-page `form_default` wrapper.
    pub form_page: bool,
    /// Import that brings the records into scope; empty disables it.
    pub scope: String,
    /// Run rustfmt on the generated file.
    pub format: bool,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            records: Vec::new(),
            output: None,
            strict: false,
            form_page: true,
            scope: "super::*".to_string(),
            format: true,
        }
    }
}

impl Config {
    /// Open a config file. Relative paths in it are resolved against the
    /// directory containing the file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let mut config = Self::from_str_with_filename(&content, &filename)?;

        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            config.generate.relative_to(dir);
        }
        Ok(config)
    }

    /// Parse a config with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(e, content, filename))
    }
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, CONFIG_FILE)
    }
}

impl GenerateConfig {
    /// Resolve relative input and output paths against `dir`.
    pub fn relative_to(&mut self, dir: &Path) {
        for input in &mut self.inputs {
            if input.is_relative() {
                *input = dir.join(&*input);
            }
        }
        if let Some(output) = &mut self.output {
            if output.is_relative() {
                *output = dir.join(&*output);
            }
        }
    }
}
