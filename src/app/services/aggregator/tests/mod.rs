//! Tests for the aggregation module
//!
//! Provides unit tests for the group-and-sum pass and its statistics,
//! plus shared record fixtures.

pub mod stats_tests;

use crate::app::models::StormRecord;

/// Build a storm record with the given event type, casualties, and
/// damage pairs
pub fn record(
    event_type: &str,
    fatalities: f64,
    injuries: f64,
    prop: (f64, &str),
    crop: (f64, &str),
) -> StormRecord {
    StormRecord {
        event_type_raw: event_type.to_string(),
        fatalities,
        injuries,
        property_damage_magnitude: prop.0,
        property_damage_exponent: prop.1.to_string(),
        crop_damage_magnitude: crop.0,
        crop_damage_exponent: crop.1.to_string(),
    }
}
