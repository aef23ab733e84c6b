//! Shared components for CLI commands
//!
//! This module contains common types, utilities, and functions used
//! across the CLI command implementations.

use crate::cli::args::ReportArgs;
use crate::config::Config;
use crate::{Error, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::BufReader;
use tracing::debug;

/// Processing statistics for reporting across all commands
#[derive(Debug, Clone, Default)]
pub struct ProcessingStats {
    /// Number of data rows read from the input
    pub rows_read: usize,
    /// Number of distinct normalised event types
    pub distinct_event_types: usize,
    /// Groups with no recorded economic damage
    pub zero_damage_groups: usize,
    /// Number of ranking tables rendered
    pub tables_rendered: usize,
    /// Total processing time
    pub processing_time: std::time::Duration,
}

/// Set up structured logging writing to stderr
///
/// Stderr keeps log lines out of rendered tables when stdout is piped.
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("storm_reporter={}", log_level)));

    if quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with uptime timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Build configuration from report arguments (defaults + CLI overrides)
pub fn load_configuration(args: &ReportArgs) -> Result<Config> {
    let mut config = Config::new(args.input_path.clone());

    // Apply CLI argument overrides
    config.report.top_n = args.top_n;
    config.report.output_file = args.output_file.clone();
    config.logging.level = args.get_log_level().to_string();
    config.logging.quiet = args.quiet;

    // Final validation
    config.validate()?;

    Ok(config)
}

/// Create a progress bar for row loading
///
/// Row count is unknown before the pass, so the bar length is estimated
/// from the file size and a sampled average row width.
pub fn create_load_progress_bar(config: &Config) -> Result<ProgressBar> {
    let estimated_rows = estimate_row_count(config)?;

    let pb = ProgressBar::new(estimated_rows);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos} rows {msg}")
            .map_err(|e| Error::configuration(format!("Invalid progress template: {}", e)))?
            .progress_chars("#>-"),
    );
    pb.set_message("Loading records");
    Ok(pb)
}

/// Estimate the number of data rows from the file size and the width of
/// the first data row
fn estimate_row_count(config: &Config) -> Result<u64> {
    use std::io::BufRead;

    let path = &config.processing.input_path;
    let file_size = std::fs::metadata(path)
        .map_err(|e| Error::io(format!("Failed to stat '{}'", path.display()), e))?
        .len();

    let file = File::open(path)
        .map_err(|e| Error::io(format!("Failed to open '{}'", path.display()), e))?;
    let mut reader = BufReader::new(file);

    // Header plus first data row give a workable average width
    let mut line = String::new();
    let mut sampled_bytes = 0usize;
    let mut sampled_lines = 0usize;
    for _ in 0..2 {
        line.clear();
        let read = reader
            .read_line(&mut line)
            .map_err(|e| Error::io("Failed to sample input rows", e))?;
        if read == 0 {
            break;
        }
        sampled_bytes += read;
        sampled_lines += 1;
    }

    if sampled_lines < 2 || sampled_bytes == 0 {
        return Ok(0);
    }

    let avg_row_bytes = (sampled_bytes / sampled_lines).max(1) as u64;
    Ok(file_size / avg_row_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::OutputFormat;
    use crate::constants::DEFAULT_TOP_N;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn report_args(input_path: PathBuf) -> ReportArgs {
        ReportArgs {
            input_path,
            top_n: DEFAULT_TOP_N,
            output_format: OutputFormat::Human,
            output_file: None,
            verbose: 0,
            quiet: false,
        }
    }

    #[test]
    fn test_load_configuration_applies_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("storms.csv");
        fs::write(&input, "EVTYPE\n").unwrap();

        let mut args = report_args(input.clone());
        args.top_n = 5;
        args.quiet = true;
        args.output_file = Some(temp_dir.path().join("out.txt"));

        let config = load_configuration(&args).unwrap();
        assert_eq!(config.processing.input_path, input);
        assert_eq!(config.report.top_n, 5);
        assert!(config.logging.quiet);
        assert_eq!(config.logging.level, "error");
    }

    #[test]
    fn test_load_configuration_rejects_bad_args() {
        let mut args = report_args(PathBuf::from("/nonexistent/storms.csv"));
        assert!(load_configuration(&args).is_err());

        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("storms.csv");
        fs::write(&input, "EVTYPE\n").unwrap();
        args.input_path = input;
        args.top_n = 0;
        assert!(load_configuration(&args).is_err());
    }

    #[test]
    fn test_estimate_row_count() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("storms.csv");
        let mut content = String::from("EVTYPE,FATALITIES\n");
        for _ in 0..100 {
            content.push_str("TORNADO,1\n");
        }
        fs::write(&input, content).unwrap();

        let config = Config::new(input);
        let estimate = estimate_row_count(&config).unwrap();
        // A rough estimate is fine; it only sizes a progress bar
        assert!(estimate > 50);
        assert!(estimate < 200);
    }

    #[test]
    fn test_estimate_row_count_header_only() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("storms.csv");
        fs::write(&input, "EVTYPE,FATALITIES\n").unwrap();

        let config = Config::new(input);
        assert_eq!(estimate_row_count(&config).unwrap(), 0);
    }
}
