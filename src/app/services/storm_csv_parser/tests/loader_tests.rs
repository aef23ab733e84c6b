//! Tests for whole-file loading

use super::{FIXTURE_HEADER, write_fixture};
use crate::Error;
use crate::app::services::storm_csv_parser::StormCsvLoader;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_load_basic_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_fixture(
        &temp_dir,
        &[
            "TEXAS,TORNADO,1,2,10,K,0,,touched down briefly",
            "IOWA,FLOOD,0,1,5,B,0,?,river crested",
        ],
    );

    let result = StormCsvLoader::new().load_file(&path, None).unwrap();

    assert_eq!(result.records.len(), 2);
    assert_eq!(result.stats.rows_read, 2);
    assert_eq!(result.stats.columns_in_header, 9);

    let tornado = &result.records[0];
    assert_eq!(tornado.event_type_raw, "TORNADO");
    assert_eq!(tornado.fatalities, 1.0);
    assert_eq!(tornado.injuries, 2.0);
    assert_eq!(tornado.property_damage_magnitude, 10.0);
    assert_eq!(tornado.property_damage_exponent, "K");
    assert_eq!(tornado.crop_damage_magnitude, 0.0);
    assert_eq!(tornado.crop_damage_exponent, "");

    let flood = &result.records[1];
    assert_eq!(flood.property_damage_exponent, "B");
    assert_eq!(flood.crop_damage_exponent, "?");
}

#[test]
fn test_load_preserves_raw_event_type() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_fixture(&temp_dir, &["OHIO,FROST/FREEZE,0,0,1,K,1,K,"]);

    let result = StormCsvLoader::new().load_file(&path, None).unwrap();
    // Normalisation is the aggregator's job, not the loader's
    assert_eq!(result.records[0].event_type_raw, "FROST/FREEZE");
}

#[test]
fn test_load_header_only_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_fixture(&temp_dir, &[]);

    let result = StormCsvLoader::new().load_file(&path, None).unwrap();
    assert!(result.records.is_empty());
    assert_eq!(result.stats.rows_read, 0);
}

#[test]
fn test_load_missing_file() {
    let result = StormCsvLoader::new().load_file(Path::new("/nonexistent/storms.csv"), None);
    assert!(matches!(result, Err(Error::FileNotFound { .. })));
}

#[test]
fn test_load_missing_column_fails_before_data() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("storms.csv");
    fs::write(&path, "EVTYPE,FATALITIES,INJURIES\nTORNADO,1,2\n").unwrap();

    let result = StormCsvLoader::new().load_file(&path, None);
    assert!(matches!(result, Err(Error::MissingColumn { .. })));
}

#[test]
fn test_load_malformed_row_aborts_with_row_number() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_fixture(
        &temp_dir,
        &[
            "TEXAS,TORNADO,1,2,10,K,0,,ok",
            "TEXAS,HAIL,zero,0,1,K,0,,bad fatalities",
        ],
    );

    let error = StormCsvLoader::new().load_file(&path, None).unwrap_err();
    let message = error.to_string();
    assert!(message.contains("row 2"));
    assert!(message.contains("FATALITIES"));
}

#[test]
fn test_load_short_row_aborts() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("storms.csv");
    let content = format!("{}\nTEXAS,TORNADO,1,2\n", FIXTURE_HEADER);
    fs::write(&path, content).unwrap();

    assert!(StormCsvLoader::new().load_file(&path, None).is_err());
}

#[test]
fn test_load_accepts_unknown_exponent_codes() {
    // The loader does not resolve exponent codes; bad codes surface later,
    // from the aggregator
    let temp_dir = TempDir::new().unwrap();
    let path = write_fixture(&temp_dir, &["TEXAS,TORNADO,0,0,1,x,0,,"]);

    let result = StormCsvLoader::new().load_file(&path, None).unwrap();
    assert_eq!(result.records[0].property_damage_exponent, "x");
}
