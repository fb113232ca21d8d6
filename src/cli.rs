//! Command-line interface for sheetdiff

use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sheetdiff")]
#[command(about = "Compare two spreadsheet workbooks cell by cell")]
#[command(version)]
pub struct Cli {
    /// First workbook
    #[arg(long = "f1", value_name = "FILE")]
    pub file_a: Option<PathBuf>,

    /// Second workbook
    #[arg(long = "f2", value_name = "FILE")]
    pub file_b: Option<PathBuf>,

    /// Output format: "pretty" or "json"
    #[arg(long)]
    pub format: Option<String>,

    /// JSON configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Disable the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Print a one-line summary after the differences
    #[arg(long)]
    pub summary: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Both workbook paths, if both were given
    pub fn files(&self) -> Option<(&PathBuf, &PathBuf)> {
        Some((self.file_a.as_ref()?, self.file_b.as_ref()?))
    }

    /// Default log level before `RUST_LOG` is applied
    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}

/// Parse output format string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Pretty,
    Json,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid output format: {}. Use 'pretty' or 'json'", s)),
        }
    }
}
