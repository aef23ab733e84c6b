//! Report command implementation for storm reporter CLI
//!
//! This module contains the complete report workflow: configuration
//! loading, record loading, aggregation, ranking, and table rendering in
//! human, JSON, or CSV form.

use super::shared::{ProcessingStats, create_load_progress_bar, load_configuration, setup_logging};
use crate::app::services::aggregator::aggregate_records;
use crate::app::services::ranker::{RankedTable, standard_rankings};
use crate::app::services::storm_csv_parser::StormCsvLoader;
use crate::cli::args::{OutputFormat, ReportArgs};
use crate::config::Config;
use crate::{Error, Result};
use colored::Colorize;
use indicatif::HumanDuration;
use std::fs::File;
use std::io::Write;
use std::time::Instant;
use tracing::{debug, info};

/// Report command runner for storm reporter
///
/// Orchestrates the full pipeline:
/// 1. Set up logging and configuration
/// 2. Load records from the input file
/// 3. Aggregate casualty and damage totals per event type
/// 4. Rank the four standard views and render them
pub fn run_report(args: ReportArgs) -> Result<ProcessingStats> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level(), args.quiet)?;

    info!("Starting storm reporter");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;
    let config = load_configuration(&args)?;
    debug!("Loaded configuration: {:?}", config);

    // Load records with optional progress reporting
    let progress = if args.show_progress() {
        Some(create_load_progress_bar(&config)?)
    } else {
        None
    };

    let loader = StormCsvLoader::new();
    let load_result = loader.load_file(&config.processing.input_path, progress.as_ref())?;

    if let Some(pb) = progress {
        pb.finish_with_message(format!("Loaded {} records", load_result.records.len()));
    }

    // Aggregate and rank
    let aggregation = aggregate_records(&load_result.records)?;
    let tables = standard_rankings(&aggregation.aggregates, config.report.top_n);

    // Render to the requested sink
    render_tables(&tables, args.output_format, &config)?;

    let stats = ProcessingStats {
        rows_read: load_result.stats.rows_read,
        distinct_event_types: aggregation.stats.distinct_event_types,
        zero_damage_groups: aggregation.stats.zero_damage_groups,
        tables_rendered: tables.len(),
        processing_time: start_time.elapsed(),
    };

    info!(
        "Report complete: {} rows, {} event types, {} tables in {}",
        stats.rows_read,
        stats.distinct_event_types,
        stats.tables_rendered,
        HumanDuration(stats.processing_time)
    );

    Ok(stats)
}

/// Render the ranking tables in the requested format
fn render_tables(tables: &[RankedTable], format: OutputFormat, config: &Config) -> Result<()> {
    let mut writer = open_output(config)?;

    match format {
        OutputFormat::Human => render_human(tables, &mut writer),
        OutputFormat::Json => render_json(tables, &mut writer),
        OutputFormat::Csv => render_csv(tables, &mut writer),
    }
}

/// Open the configured output file, or stdout
fn open_output(config: &Config) -> Result<Box<dyn Write>> {
    match &config.report.output_file {
        Some(path) => {
            let file = File::create(path)
                .map_err(|e| Error::io(format!("Failed to create '{}'", path.display()), e))?;
            info!("Writing tables to {}", path.display());
            Ok(Box::new(file))
        }
        None => Ok(Box::new(std::io::stdout())),
    }
}

/// Render tables as aligned, colored text
fn render_human(tables: &[RankedTable], writer: &mut Box<dyn Write>) -> Result<()> {
    for table in tables {
        let heading = format!(
            "Top {} event types by {}",
            table.entries.len(),
            table.metric.label().to_lowercase()
        );
        writeln!(writer, "\n{}", heading.bold().cyan())
            .map_err(|e| Error::io("Failed to write report table", e))?;

        if table.entries.is_empty() {
            writeln!(writer, "  (no eligible event types)")
                .map_err(|e| Error::io("Failed to write report table", e))?;
            continue;
        }

        for entry in &table.entries {
            writeln!(
                writer,
                "  {:>3}. {:<30} {:>18}",
                entry.rank,
                entry.event_type,
                format_metric_value(entry.value)
            )
            .map_err(|e| Error::io("Failed to write report table", e))?;
        }
    }

    writer
        .flush()
        .map_err(|e| Error::io("Failed to flush report output", e))
}

/// Render tables as pretty-printed JSON
fn render_json(tables: &[RankedTable], writer: &mut Box<dyn Write>) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, tables)
        .map_err(|e| Error::report_rendering(format!("JSON serialisation failed: {}", e)))?;
    writeln!(writer).map_err(|e| Error::io("Failed to flush report output", e))?;
    writer
        .flush()
        .map_err(|e| Error::io("Failed to flush report output", e))
}

/// Render tables as flat CSV rows (metric,rank,event_type,value)
fn render_csv(tables: &[RankedTable], writer: &mut Box<dyn Write>) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(&mut *writer);

    csv_writer
        .write_record(["metric", "rank", "event_type", "value"])
        .map_err(|e| Error::report_rendering(format!("CSV rendering failed: {}", e)))?;

    for table in tables {
        for entry in &table.entries {
            csv_writer
                .write_record([
                    table.metric.label(),
                    &entry.rank.to_string(),
                    &entry.event_type,
                    &entry.value.to_string(),
                ])
                .map_err(|e| Error::report_rendering(format!("CSV rendering failed: {}", e)))?;
        }
    }

    csv_writer
        .flush()
        .map_err(|e| Error::io("Failed to flush report output", e))
}

/// Format a metric value with thousands separators, dropping the
/// fractional part when it is integral
fn format_metric_value(value: f64) -> String {
    let rendered = if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    };

    let (integral, fraction) = match rendered.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (rendered, None),
    };

    let mut grouped = String::new();
    let digits: Vec<char> = integral.chars().collect();
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*ch);
    }

    match fraction {
        Some(f) => format!("{}.{}", grouped, f),
        None => grouped,
    }
}
