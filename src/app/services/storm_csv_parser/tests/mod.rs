//! Tests for the storm-event CSV loader
//!
//! This module provides unit tests for column mapping, field parsing,
//! and file loading, plus shared fixture helpers.

pub mod field_parser_tests;
pub mod loader_tests;

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Header row matching the NOAA export, with unused columns interleaved
/// the way the real dataset has them.
pub const FIXTURE_HEADER: &str =
    "STATE,EVTYPE,FATALITIES,INJURIES,PROPDMG,PROPDMGEXP,CROPDMG,CROPDMGEXP,REMARKS";

/// Write a storm-event CSV fixture into a temp directory and return its path
pub fn write_fixture(temp_dir: &TempDir, rows: &[&str]) -> PathBuf {
    let path = temp_dir.path().join("storms.csv");
    let mut content = String::from(FIXTURE_HEADER);
    content.push('\n');
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    fs::write(&path, content).unwrap();
    path
}
