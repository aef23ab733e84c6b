//! Configuration management and validation.
//!
//! Provides configuration structures for the report pipeline: input
//! selection, ranking parameters, and logging settings. Defaults are
//! overridden by CLI arguments in `cli::commands::shared`.

use crate::constants::{DEFAULT_TOP_N, MAX_TOP_N};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration for a report run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Input file settings
    pub processing: ProcessingConfig,
    /// Ranking and output settings
    pub report: ReportConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

/// Input processing settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// Path to the delimited storm-event input file
    pub input_path: PathBuf,
}

/// Ranking and output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Number of entries per ranking table
    pub top_n: usize,
    /// Optional file to write rendered tables to instead of stdout
    pub output_file: Option<PathBuf>,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter ("error", "warn", "info", "debug", "trace")
    pub level: String,
    /// Suppress progress bars and summary chrome
    pub quiet: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            output_file: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            quiet: false,
        }
    }
}

impl Config {
    /// Create a configuration for the given input file with default
    /// ranking and logging settings
    pub fn new(input_path: PathBuf) -> Self {
        Self {
            processing: ProcessingConfig { input_path },
            report: ReportConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    /// Validate the configuration for consistency
    pub fn validate(&self) -> Result<()> {
        let input = &self.processing.input_path;
        if !input.exists() {
            return Err(Error::file_not_found(input.display().to_string()));
        }
        if !input.is_file() {
            return Err(Error::configuration(format!(
                "Input path is not a file: {}",
                input.display()
            )));
        }

        if self.report.top_n == 0 {
            return Err(Error::configuration(
                "Ranking size must be greater than 0".to_string(),
            ));
        }
        if self.report.top_n > MAX_TOP_N {
            return Err(Error::configuration(format!(
                "Ranking size cannot exceed {}",
                MAX_TOP_N
            )));
        }

        // Output file directory must exist; the file itself is created
        if let Some(output_file) = &self.report.output_file {
            if let Some(parent) = output_file.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(Error::configuration(format!(
                        "Output file directory does not exist: {}",
                        parent.display()
                    )));
                }
            }
        }

        Ok(())
    }
}
