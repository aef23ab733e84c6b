//! Loading statistics and result structures for storm-event CSV files

use crate::app::models::StormRecord;

/// Loading result with records and basic statistics
#[derive(Debug, Clone)]
pub struct LoadResult {
    /// Successfully loaded storm-event records
    pub records: Vec<StormRecord>,

    /// Basic loading statistics
    pub stats: LoadStats,
}

/// Simple loading statistics
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct LoadStats {
    /// Number of data rows read from the file
    pub rows_read: usize,

    /// Total columns present in the input header
    pub columns_in_header: usize,

    /// Loading time in milliseconds
    pub load_time_ms: u128,
}

impl LoadStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }
}
