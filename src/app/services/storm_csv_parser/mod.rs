//! CSV loader for storm-event data files
//!
//! This module reads a delimited storm-event file into memory. Column
//! positions are discovered from the header row rather than hard-coded,
//! so the loader tolerates the dataset's many unused columns and any
//! column ordering.
//!
//! ## Architecture
//!
//! - [`loader`] - Core loading orchestration and file handling
//! - [`column_mapping`] - Header analysis and required-column validation
//! - [`field_parsers`] - Utility functions for field parsing and validation
//! - [`stats`] - Loading statistics and result structures
//!
//! ## Usage
//!
//! ```rust,no_run
//! use storm_reporter::app::services::storm_csv_parser::StormCsvLoader;
//!
//! # fn example() -> storm_reporter::Result<()> {
//! let loader = StormCsvLoader::new();
//! let result = loader.load_file(std::path::Path::new("storms.csv"), None)?;
//!
//! println!("Loaded {} records", result.records.len());
//! # Ok(())
//! # }
//! ```

pub mod column_mapping;
pub mod field_parsers;
pub mod loader;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use column_mapping::ColumnMapping;
pub use loader::StormCsvLoader;
pub use stats::{LoadResult, LoadStats};
