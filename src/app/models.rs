//! Core data structures for storm-event processing.
//!
//! Defines the raw record shape, the per-event-type aggregate, and the
//! ranking metric enumeration used throughout the library.

use serde::{Deserialize, Serialize};

/// One raw observational row from the storm-event dataset.
///
/// Created once per input row at load time and consumed by the
/// aggregator; no identity is retained past aggregation. The event type
/// is kept as the raw free-text value; canonicalisation happens when the
/// aggregator derives the grouping key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StormRecord {
    /// Free-text event type exactly as it appears in the input
    pub event_type_raw: String,
    /// Fatality count (non-negative)
    pub fatalities: f64,
    /// Injury count (non-negative)
    pub injuries: f64,
    /// Property damage magnitude, scaled by the exponent code
    pub property_damage_magnitude: f64,
    /// Property damage exponent code token (may be empty)
    pub property_damage_exponent: String,
    /// Crop damage magnitude, scaled by the exponent code
    pub crop_damage_magnitude: f64,
    /// Crop damage exponent code token (may be empty)
    pub crop_damage_exponent: String,
}

/// Summed casualty and damage totals for one normalised event type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventAggregate {
    /// Normalised event type key
    pub event_type: String,
    pub total_fatalities: f64,
    pub total_injuries: f64,
    /// Property damage total in dollars
    pub total_property_damage: f64,
    /// Crop damage total in dollars
    pub total_crop_damage: f64,
}

impl EventAggregate {
    /// Create an empty aggregate for the given normalised event type
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            total_fatalities: 0.0,
            total_injuries: 0.0,
            total_property_damage: 0.0,
            total_crop_damage: 0.0,
        }
    }

    /// True when neither damage total is non-zero. Such aggregates are
    /// excluded from both damage rankings.
    pub fn has_no_recorded_damage(&self) -> bool {
        self.total_property_damage == 0.0 && self.total_crop_damage == 0.0
    }
}

/// Metrics an aggregate can be ranked by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingMetric {
    Fatalities,
    Injuries,
    PropertyDamage,
    CropDamage,
}

impl RankingMetric {
    /// The four standard report views, in presentation order
    pub const ALL: [RankingMetric; 4] = [
        RankingMetric::Fatalities,
        RankingMetric::Injuries,
        RankingMetric::PropertyDamage,
        RankingMetric::CropDamage,
    ];

    /// Extract this metric's value from an aggregate
    pub fn value_of(&self, aggregate: &EventAggregate) -> f64 {
        match self {
            RankingMetric::Fatalities => aggregate.total_fatalities,
            RankingMetric::Injuries => aggregate.total_injuries,
            RankingMetric::PropertyDamage => aggregate.total_property_damage,
            RankingMetric::CropDamage => aggregate.total_crop_damage,
        }
    }

    /// True for the two economic-damage metrics, which share a combined
    /// zero-damage eligibility filter
    pub fn is_damage_metric(&self) -> bool {
        matches!(
            self,
            RankingMetric::PropertyDamage | RankingMetric::CropDamage
        )
    }

    /// Human-readable label for report headings
    pub fn label(&self) -> &'static str {
        match self {
            RankingMetric::Fatalities => "Fatalities",
            RankingMetric::Injuries => "Injuries",
            RankingMetric::PropertyDamage => "Property damage (USD)",
            RankingMetric::CropDamage => "Crop damage (USD)",
        }
    }
}
