//! Column mapping for header-driven storm-event file structure
//!
//! The storm-event export carries several dozen columns; the report
//! consumes seven. This module maps the header row to column indices and
//! rejects files missing any required column up front, before any data
//! row is read.

use crate::constants::REQUIRED_COLUMNS;
use crate::{Error, Result};
use csv::StringRecord;
use std::collections::HashMap;
use std::path::Path;

/// Column name to index mapping for one input file
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    /// Upper-cased column name to index
    pub name_to_index: HashMap<String, usize>,
}

impl ColumnMapping {
    /// Analyze the header row and validate that every required column is
    /// present. Header names match case-insensitively; unused columns are
    /// retained in the mapping but never read.
    pub fn analyze(headers: &StringRecord, file: &Path) -> Result<Self> {
        let mut name_to_index = HashMap::new();

        for (index, header) in headers.iter().enumerate() {
            let column_name = header.trim().to_uppercase();
            // First occurrence wins for duplicated header names
            name_to_index.entry(column_name).or_insert(index);
        }

        for required in REQUIRED_COLUMNS {
            if !name_to_index.contains_key(*required) {
                return Err(Error::missing_column(
                    file.display().to_string(),
                    *required,
                ));
            }
        }

        Ok(ColumnMapping { name_to_index })
    }

    /// Get the index for a given column name
    pub fn get_index(&self, column_name: &str) -> Option<usize> {
        self.name_to_index.get(column_name).copied()
    }

    /// Check if a column exists in the mapping
    pub fn has_column(&self, column_name: &str) -> bool {
        self.name_to_index.contains_key(column_name)
    }

    /// Total number of columns in the input header
    pub fn column_count(&self) -> usize {
        self.name_to_index.len()
    }
}
