//! Single-pass group-and-sum over storm-event records

use super::stats::{AggregationResult, AggregationStats};
use crate::app::models::{EventAggregate, StormRecord};
use crate::app::services::damage_resolver::damage_value;
use crate::app::services::event_normalizer::normalize_event_type;
use crate::{Error, Result};
use std::collections::HashMap;
use std::time::Instant;
use tracing::info;

/// Aggregate records into one `EventAggregate` per distinct normalised
/// event type.
///
/// Runs in one pass; accumulation is plain addition, so input order does
/// not affect any sum. Every observed event type gets an entry, including
/// groups whose sums are all zero — filtering is the ranker's concern.
///
/// Fails on the first invalid damage exponent code, naming the offending
/// token and the event type it was attached to.
pub fn aggregate_records(records: &[StormRecord]) -> Result<AggregationResult> {
    let start_time = Instant::now();

    info!("Aggregating {} storm-event records", records.len());

    let mut aggregates: HashMap<String, EventAggregate> = HashMap::new();

    for record in records {
        let event_type = normalize_event_type(&record.event_type_raw);

        let property_damage = resolve_record_damage(
            record.property_damage_magnitude,
            &record.property_damage_exponent,
            &record.event_type_raw,
        )?;
        let crop_damage = resolve_record_damage(
            record.crop_damage_magnitude,
            &record.crop_damage_exponent,
            &record.event_type_raw,
        )?;

        let entry = aggregates
            .entry(event_type.clone())
            .or_insert_with(|| EventAggregate::new(event_type));

        entry.total_fatalities += record.fatalities;
        entry.total_injuries += record.injuries;
        entry.total_property_damage += property_damage;
        entry.total_crop_damage += crop_damage;
    }

    let stats = AggregationStats {
        records_in: records.len(),
        distinct_event_types: aggregates.len(),
        zero_damage_groups: aggregates
            .values()
            .filter(|a| a.has_no_recorded_damage())
            .count(),
        aggregation_time_ms: start_time.elapsed().as_millis(),
    };

    info!(
        "Aggregation complete: {} records -> {} event types ({} with no recorded damage) in {}ms",
        stats.records_in,
        stats.distinct_event_types,
        stats.zero_damage_groups,
        stats.aggregation_time_ms
    );

    Ok(AggregationResult { aggregates, stats })
}

/// Resolve one damage pair, attaching the record's event type to any
/// invalid-code error
fn resolve_record_damage(magnitude: f64, exponent_code: &str, event_type_raw: &str) -> Result<f64> {
    damage_value(magnitude, exponent_code).map_err(|error| match error {
        Error::InvalidExponentCode { code, .. } => {
            Error::invalid_exponent_code_at(code, event_type_raw)
        }
        other => other,
    })
}
