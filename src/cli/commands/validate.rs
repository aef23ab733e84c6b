//! Validate command implementation for storm reporter CLI
//!
//! Runs the load and aggregation stages against an input file and reports
//! what the fail-fast pipeline finds, without rendering ranking tables.
//! Useful for checking a new dataset export for unknown damage exponent
//! codes or malformed rows before generating a report.

use super::shared::{ProcessingStats, setup_logging};
use crate::app::services::aggregator::aggregate_records;
use crate::app::services::storm_csv_parser::StormCsvLoader;
use crate::cli::args::ValidateArgs;
use crate::{Error, Result};
use colored::Colorize;
use std::time::Instant;
use tracing::{debug, info};

/// Validate command runner for storm reporter
pub fn run_validate(args: ValidateArgs) -> Result<ProcessingStats> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level(), false)?;

    info!("Validating storm-event file: {}", args.input_path.display());
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let loader = StormCsvLoader::new();
    let load_result = loader.load_file(&args.input_path, None)?;

    // Aggregation exercises the normaliser and the exponent resolver on
    // every record; any invalid code surfaces here
    let aggregation = aggregate_records(&load_result.records)?;

    let stats = ProcessingStats {
        rows_read: load_result.stats.rows_read,
        distinct_event_types: aggregation.stats.distinct_event_types,
        zero_damage_groups: aggregation.stats.zero_damage_groups,
        tables_rendered: 0,
        processing_time: start_time.elapsed(),
    };

    print_validation_summary(&args, &stats)?;

    Ok(stats)
}

/// Print the validation summary to stdout
fn print_validation_summary(args: &ValidateArgs, stats: &ProcessingStats) -> Result<()> {
    use std::io::Write;

    let mut stdout = std::io::stdout();

    writeln!(stdout, "\n{}", "Validation passed".bold().green())
        .and_then(|_| writeln!(stdout, "  File:                {}", args.input_path.display()))
        .and_then(|_| writeln!(stdout, "  Rows read:           {}", stats.rows_read))
        .and_then(|_| {
            writeln!(
                stdout,
                "  Distinct event types: {}",
                stats.distinct_event_types
            )
        })
        .and_then(|_| {
            writeln!(
                stdout,
                "  Zero-damage groups:  {}",
                stats.zero_damage_groups
            )
        })
        .and_then(|_| {
            writeln!(
                stdout,
                "  Elapsed:             {:.2?}",
                stats.processing_time
            )
        })
        .map_err(|e| Error::io("Failed to write validation summary", e))?;

    Ok(())
}
