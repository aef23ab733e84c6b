//! Core loading orchestration for storm-event CSV files

use super::column_mapping::ColumnMapping;
use super::field_parsers::{get_field, get_required_field, parse_required_f64};
use super::stats::{LoadResult, LoadStats};
use crate::app::models::StormRecord;
use crate::constants::{
    CROP_DAMAGE_COLUMN, CROP_DAMAGE_EXP_COLUMN, EVENT_TYPE_COLUMN, FATALITIES_COLUMN,
    INJURIES_COLUMN, PROGRESS_TICK_ROWS, PROPERTY_DAMAGE_COLUMN, PROPERTY_DAMAGE_EXP_COLUMN,
};
use crate::{Error, Result};
use indicatif::ProgressBar;
use std::fs::File;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Loader for storm-event CSV files
///
/// Reads the whole file into memory in one pass. The report is a batch
/// computation over the full dataset, so there is no streaming mode.
#[derive(Debug, Default)]
pub struct StormCsvLoader;

impl StormCsvLoader {
    /// Create a new loader
    pub fn new() -> Self {
        Self
    }

    /// Load all storm-event records from a CSV file.
    ///
    /// Fails fast: a missing required column, a short row, or a malformed
    /// casualty/magnitude field aborts the load with row context. An
    /// optional progress bar is ticked as rows are read.
    pub fn load_file(&self, path: &Path, progress: Option<&ProgressBar>) -> Result<LoadResult> {
        let start_time = Instant::now();

        if !path.exists() {
            return Err(Error::file_not_found(path.display().to_string()));
        }

        debug!("Opening storm-event file: {}", path.display());
        let file = File::open(path)
            .map_err(|e| Error::io(format!("Failed to open '{}'", path.display()), e))?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        let headers = reader
            .headers()
            .map_err(|e| {
                Error::csv_parsing(
                    path.display().to_string(),
                    "Failed to read header row",
                    Some(e),
                )
            })?
            .clone();

        let mapping = ColumnMapping::analyze(&headers, path)?;
        debug!(
            "Header mapped: {} columns, all required columns present",
            mapping.column_count()
        );

        let mut records = Vec::new();
        for (index, row_result) in reader.records().enumerate() {
            // 1-based data row number for error context
            let row = index + 1;

            let record = row_result.map_err(|e| {
                Error::csv_parsing(
                    path.display().to_string(),
                    format!("Failed to read row {}", row),
                    Some(e),
                )
            })?;

            records.push(parse_record(&record, &mapping, row)?);

            if let Some(pb) = progress {
                if row % PROGRESS_TICK_ROWS == 0 {
                    pb.inc(PROGRESS_TICK_ROWS as u64);
                }
            }
        }

        if let Some(pb) = progress {
            pb.set_position(records.len() as u64);
        }

        let stats = LoadStats {
            rows_read: records.len(),
            columns_in_header: mapping.column_count(),
            load_time_ms: start_time.elapsed().as_millis(),
        };

        info!(
            "Loaded {} records from {} in {}ms",
            stats.rows_read,
            path.display(),
            stats.load_time_ms
        );

        Ok(LoadResult { records, stats })
    }
}

/// Parse one data row into a `StormRecord`
fn parse_record(
    record: &csv::StringRecord,
    mapping: &ColumnMapping,
    row: usize,
) -> Result<StormRecord> {
    let event_type_raw = get_required_field(record, mapping, EVENT_TYPE_COLUMN, row)?.to_string();

    let fatalities = parse_required_f64(record, mapping, FATALITIES_COLUMN, row)?;
    let injuries = parse_required_f64(record, mapping, INJURIES_COLUMN, row)?;

    let property_damage_magnitude =
        parse_required_f64(record, mapping, PROPERTY_DAMAGE_COLUMN, row)?;
    let property_damage_exponent =
        get_field(record, mapping, PROPERTY_DAMAGE_EXP_COLUMN, row)?.to_string();

    let crop_damage_magnitude = parse_required_f64(record, mapping, CROP_DAMAGE_COLUMN, row)?;
    let crop_damage_exponent = get_field(record, mapping, CROP_DAMAGE_EXP_COLUMN, row)?.to_string();

    Ok(StormRecord {
        event_type_raw,
        fatalities,
        injuries,
        property_damage_magnitude,
        property_damage_exponent,
        crop_damage_magnitude,
        crop_damage_exponent,
    })
}
