//! Tests for typed field extraction with row context

use crate::app::services::storm_csv_parser::ColumnMapping;
use crate::app::services::storm_csv_parser::field_parsers::{
    get_field, get_required_field, parse_required_f64,
};
use csv::StringRecord;
use std::path::Path;

fn fixture() -> (StringRecord, ColumnMapping) {
    let headers = StringRecord::from(vec![
        "EVTYPE",
        "FATALITIES",
        "INJURIES",
        "PROPDMG",
        "PROPDMGEXP",
        "CROPDMG",
        "CROPDMGEXP",
    ]);
    let mapping = ColumnMapping::analyze(&headers, Path::new("storms.csv")).unwrap();
    let record = StringRecord::from(vec!["TORNADO", "1", "2.5", "10", "K", "0", ""]);
    (record, mapping)
}

#[test]
fn test_parse_required_f64() {
    let (record, mapping) = fixture();
    assert_eq!(
        parse_required_f64(&record, &mapping, "FATALITIES", 1).unwrap(),
        1.0
    );
    assert_eq!(
        parse_required_f64(&record, &mapping, "INJURIES", 1).unwrap(),
        2.5
    );
}

#[test]
fn test_parse_required_f64_rejects_non_numeric() {
    let (_, mapping) = fixture();
    let record = StringRecord::from(vec!["TORNADO", "one", "2", "10", "K", "0", ""]);

    let error = parse_required_f64(&record, &mapping, "FATALITIES", 7).unwrap_err();
    let message = error.to_string();
    assert!(message.contains("FATALITIES"));
    assert!(message.contains("row 7"));
    assert!(message.contains("'one'"));
}

#[test]
fn test_parse_required_f64_rejects_negative() {
    let (_, mapping) = fixture();
    let record = StringRecord::from(vec!["TORNADO", "-1", "2", "10", "K", "0", ""]);

    assert!(parse_required_f64(&record, &mapping, "FATALITIES", 1).is_err());
}

#[test]
fn test_get_required_field_rejects_empty() {
    let (_, mapping) = fixture();
    let record = StringRecord::from(vec!["", "1", "2", "10", "K", "0", ""]);

    let error = get_required_field(&record, &mapping, "EVTYPE", 3).unwrap_err();
    assert!(error.to_string().contains("row 3"));
}

#[test]
fn test_get_field_allows_empty_exponent_cell() {
    let (record, mapping) = fixture();
    assert_eq!(get_field(&record, &mapping, "CROPDMGEXP", 1).unwrap(), "");
    assert_eq!(get_field(&record, &mapping, "PROPDMGEXP", 1).unwrap(), "K");
}

#[test]
fn test_get_field_rejects_short_row() {
    let (_, mapping) = fixture();
    // Row cut off before the crop damage columns
    let record = StringRecord::from(vec!["TORNADO", "1", "2", "10"]);

    let error = get_field(&record, &mapping, "CROPDMGEXP", 5).unwrap_err();
    let message = error.to_string();
    assert!(message.contains("Row 5"));
    assert!(message.contains("CROPDMGEXP"));
}
