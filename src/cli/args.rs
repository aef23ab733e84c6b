//! Command-line argument definitions for storm reporter
//!
//! This module defines the complete CLI interface using the clap derive
//! API.

use crate::constants::{DEFAULT_TOP_N, MAX_TOP_N};
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the storm-event report generator
///
/// Aggregates NOAA storm-event casualty and economic-damage figures per
/// event type and renders top-N ranking tables.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "storm-reporter",
    version,
    about = "Summarise NOAA storm-event data into casualty and damage rankings",
    long_about = "Loads a NOAA Storm Events style CSV file, canonicalises the free-text \
                  event-type field, resolves damage magnitude/exponent pairs into dollar \
                  amounts, and renders top-N tables of event types by fatalities, injuries, \
                  property damage, and crop damage."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the storm reporter
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Generate the four ranking tables from an input file (main command)
    Report(ReportArgs),
    /// Check an input file without rendering tables
    Validate(ValidateArgs),
}

/// Arguments for the report command (main report generation)
#[derive(Debug, Clone, Parser)]
pub struct ReportArgs {
    /// Input storm-event CSV file
    ///
    /// Must contain the EVTYPE, FATALITIES, INJURIES, PROPDMG, PROPDMGEXP,
    /// CROPDMG, and CROPDMGEXP columns; all other columns are ignored.
    #[arg(value_name = "FILE", help = "Input storm-event CSV file")]
    pub input_path: PathBuf,

    /// Number of entries per ranking table
    #[arg(
        short = 'n',
        long = "top-n",
        value_name = "COUNT",
        default_value_t = DEFAULT_TOP_N,
        help = "Number of entries per ranking table"
    )]
    pub top_n: usize,

    /// Output format for the ranking tables
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the ranking tables"
    )]
    pub output_format: OutputFormat,

    /// Output file for the rendered tables
    ///
    /// If not specified, tables are written to stdout.
    #[arg(
        short = 'o',
        long = "output-file",
        value_name = "FILE",
        help = "Output file for the rendered tables"
    )]
    pub output_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors and the rendered tables. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors and tables",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the validate command (input diagnostics)
#[derive(Debug, Clone, Parser)]
pub struct ValidateArgs {
    /// Input storm-event CSV file to check
    #[arg(value_name = "FILE", help = "Input storm-event CSV file to check")]
    pub input_path: PathBuf,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Output format options for the rendered ranking tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables
    Human,
    /// JSON format for scripting
    Json,
    /// CSV format for data analysis
    Csv,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl ReportArgs {
    /// Validate the report command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input_path.exists() {
            return Err(Error::configuration(format!(
                "Input file does not exist: {}",
                self.input_path.display()
            )));
        }

        if self.input_path.is_dir() {
            return Err(Error::configuration(format!(
                "Input path is a directory, not a file: {}",
                self.input_path.display()
            )));
        }

        if self.top_n == 0 {
            return Err(Error::configuration(
                "Ranking size must be greater than 0".to_string(),
            ));
        }

        if self.top_n > MAX_TOP_N {
            return Err(Error::configuration(format!(
                "Ranking size cannot exceed {}",
                MAX_TOP_N
            )));
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode, and not
    /// when tables go to stdout in a machine format)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl ValidateArgs {
    /// Validate the validate command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input_path.exists() {
            return Err(Error::configuration(format!(
                "Input file does not exist: {}",
                self.input_path.display()
            )));
        }

        if self.input_path.is_dir() {
            return Err(Error::configuration(format!(
                "Input path is a directory, not a file: {}",
                self.input_path.display()
            )));
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info", // Validation output is the point of the command
            1 => "debug",
            _ => "trace",
        }
    }
}
