//! Top-N ranking of event-type aggregates
//!
//! Produces the four report views: top event types by fatalities,
//! injuries, property damage, and crop damage. The two damage views share
//! one eligibility filter — an event type with no recorded economic loss
//! in either category is excluded from both — reproducing the report's
//! treatment of zero-loss events.

use crate::app::models::{EventAggregate, RankingMetric};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// One row of a rendered ranking table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    /// 1-based rank within the table
    pub rank: usize,
    /// Normalised event type
    pub event_type: String,
    /// Value of the ranked metric
    pub value: f64,
}

/// A ranked table for one metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedTable {
    /// Metric this table is ranked by
    pub metric: RankingMetric,
    /// Entries in descending metric order, at most N
    pub entries: Vec<RankedEntry>,
}

/// Select the top `n` aggregates for a metric, descending.
///
/// Damage metrics exclude aggregates with zero totals in both damage
/// categories. Ties order by event type ascending, so rankings are
/// reproducible across runs.
pub fn top_n(
    aggregates: &HashMap<String, EventAggregate>,
    metric: RankingMetric,
    n: usize,
) -> Vec<EventAggregate> {
    let mut eligible: Vec<&EventAggregate> = aggregates
        .values()
        .filter(|aggregate| !(metric.is_damage_metric() && aggregate.has_no_recorded_damage()))
        .collect();

    eligible.sort_by(|a, b| {
        metric
            .value_of(b)
            .total_cmp(&metric.value_of(a))
            .then_with(|| a.event_type.cmp(&b.event_type))
    });

    debug!(
        "Ranked {} of {} aggregates by {:?}, taking {}",
        eligible.len(),
        aggregates.len(),
        metric,
        n.min(eligible.len())
    );

    eligible.into_iter().take(n).cloned().collect()
}

/// Build a rendered table for one metric
pub fn ranking_table(
    aggregates: &HashMap<String, EventAggregate>,
    metric: RankingMetric,
    n: usize,
) -> RankedTable {
    let entries = top_n(aggregates, metric, n)
        .into_iter()
        .enumerate()
        .map(|(index, aggregate)| RankedEntry {
            rank: index + 1,
            value: metric.value_of(&aggregate),
            event_type: aggregate.event_type,
        })
        .collect();

    RankedTable { metric, entries }
}

/// Build the four standard report tables in presentation order
pub fn standard_rankings(
    aggregates: &HashMap<String, EventAggregate>,
    n: usize,
) -> Vec<RankedTable> {
    RankingMetric::ALL
        .iter()
        .map(|metric| ranking_table(aggregates, *metric, n))
        .collect()
}
