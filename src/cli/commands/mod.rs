//! Command implementations for storm reporter CLI
//!
//! This module contains the main command execution logic, progress
//! reporting, and error handling for the CLI interface. Each command is
//! implemented in its own module.

pub mod report;
pub mod shared;
pub mod validate;

// Re-export the main types for convenience
pub use shared::ProcessingStats;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for storm reporter
///
/// Dispatches to the appropriate subcommand handler based on CLI args:
/// - `report`: full pipeline with rendered ranking tables
/// - `validate`: load and aggregation diagnostics without tables
pub fn run(args: Args) -> Result<ProcessingStats> {
    match args.get_command() {
        Commands::Report(report_args) => report::run_report(report_args),
        Commands::Validate(validate_args) => validate::run_validate(validate_args),
    }
}
