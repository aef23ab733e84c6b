//! Per-event-type aggregation of storm-event records
//!
//! This module collapses the loaded record set into one row per distinct
//! normalised event type, summing fatalities, injuries, and resolved
//! property/crop damage in a single pass.
//!
//! Aggregation is fail-fast: the first invalid damage exponent code
//! anywhere in the input aborts the whole pass with no partial output. A
//! mis-scaled damage figure would silently distort every downstream
//! ranking, which is worse than producing no report at all.

pub mod aggregate;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use aggregate::aggregate_records;
pub use stats::{AggregationResult, AggregationStats};
