//! Aggregation statistics and result structures

use crate::app::models::EventAggregate;
use std::collections::HashMap;

/// Aggregation result: one aggregate per distinct normalised event type,
/// plus run statistics
#[derive(Debug, Clone)]
pub struct AggregationResult {
    /// Normalised event type -> aggregated totals
    pub aggregates: HashMap<String, EventAggregate>,

    /// Aggregation statistics
    pub stats: AggregationStats,
}

/// Statistics for one aggregation pass
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AggregationStats {
    /// Number of input records consumed
    pub records_in: usize,

    /// Number of distinct normalised event types observed
    pub distinct_event_types: usize,

    /// Groups with zero property and zero crop damage (excluded from the
    /// damage rankings downstream)
    pub zero_damage_groups: usize,

    /// Aggregation time in milliseconds
    pub aggregation_time_ms: u128,
}

impl AggregationStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Average number of records collapsed into each group
    pub fn records_per_group(&self) -> f64 {
        if self.distinct_event_types == 0 {
            0.0
        } else {
            self.records_in as f64 / self.distinct_event_types as f64
        }
    }
}
