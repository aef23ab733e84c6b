//! Tests for aggregation statistics

use crate::app::services::aggregator::AggregationStats;

#[test]
fn test_stats_new_is_zeroed() {
    let stats = AggregationStats::new();
    assert_eq!(stats.records_in, 0);
    assert_eq!(stats.distinct_event_types, 0);
    assert_eq!(stats.zero_damage_groups, 0);
    assert_eq!(stats.aggregation_time_ms, 0);
}

#[test]
fn test_stats_default_matches_new() {
    assert_eq!(AggregationStats::default(), AggregationStats::new());
}

#[test]
fn test_records_per_group() {
    let mut stats = AggregationStats::new();

    // Empty case
    assert_eq!(stats.records_per_group(), 0.0);

    stats.records_in = 100;
    stats.distinct_event_types = 25;
    assert_eq!(stats.records_per_group(), 4.0);
}
