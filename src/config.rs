//! Run configuration: JSON file defaults overridden by command-line flags

use crate::cli::{Cli, OutputFormat};
use crate::error::{Result, SheetDiffError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffConfig {
    /// "pretty" or "json"
    pub format: String,
    pub show_progress: bool,
    pub show_summary: bool,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            format: "pretty".to_string(),
            show_progress: true,
            show_summary: false,
        }
    }
}

impl DiffConfig {
    /// Load a JSON config file; missing keys take their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            SheetDiffError::config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            SheetDiffError::config(format!("invalid config {}: {}", path.display(), e))
        })?;
        config.output_format()?;
        Ok(config)
    }

    /// Config file (if any) with command-line overrides applied
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Some(format) = &cli.format {
            config.format = format.clone();
        }
        if cli.no_progress {
            config.show_progress = false;
        }
        if cli.summary {
            config.show_summary = true;
        }

        config.output_format()?;
        Ok(config)
    }

    pub fn output_format(&self) -> Result<OutputFormat> {
        OutputFormat::parse(&self.format).map_err(SheetDiffError::config)
    }

    /// Progress bars would interleave with machine-readable output
    pub fn progress_enabled(&self) -> bool {
        self.show_progress && !matches!(self.output_format(), Ok(OutputFormat::Json))
    }
}
