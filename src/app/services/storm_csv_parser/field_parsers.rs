//! Field parsing utilities for storm-event records
//!
//! This module provides helper functions for extracting typed values from
//! CSV records with row-level context in every error, so a malformed row
//! fails on its own without corrupting aggregate sums.

use super::column_mapping::ColumnMapping;
use crate::{Error, Result};
use csv::StringRecord;

/// Parse a required non-negative numeric field from a CSV record.
///
/// `row` is the 1-based data row number, used only for error context.
pub fn parse_required_f64(
    record: &StringRecord,
    mapping: &ColumnMapping,
    field_name: &str,
    row: usize,
) -> Result<f64> {
    let value_str = get_required_field(record, mapping, field_name, row)?;

    let value = value_str.parse::<f64>().map_err(|e| {
        Error::data_validation(format!(
            "Invalid numeric value for {} at row {}: '{}' ({})",
            field_name, row, value_str, e
        ))
    })?;

    if !value.is_finite() || value < 0.0 {
        return Err(Error::data_validation(format!(
            "Negative or non-finite value for {} at row {}: '{}'",
            field_name, row, value_str
        )));
    }

    Ok(value)
}

/// Get a required field value from a CSV record. Empty is an error.
pub fn get_required_field<'a>(
    record: &'a StringRecord,
    mapping: &ColumnMapping,
    field_name: &str,
    row: usize,
) -> Result<&'a str> {
    let value = get_field(record, mapping, field_name, row)?;

    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::data_validation(format!(
            "Empty value for required column '{}' at row {}",
            field_name, row
        )));
    }

    Ok(trimmed)
}

/// Get a field value from a CSV record, empty cells allowed.
///
/// Exponent-code cells are legitimately blank ("no scale"), so blankness
/// is a value here, not an error.
pub fn get_field<'a>(
    record: &'a StringRecord,
    mapping: &ColumnMapping,
    field_name: &str,
    row: usize,
) -> Result<&'a str> {
    let index = mapping.get_index(field_name).ok_or_else(|| {
        Error::data_validation(format!("Required column '{}' not found", field_name))
    })?;

    record.get(index).map(|s| s.trim()).ok_or_else(|| {
        Error::data_validation(format!(
            "Row {} is too short: no value for column '{}'",
            row, field_name
        ))
    })
}
