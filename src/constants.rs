//! Application constants for storm reporter
//!
//! This module contains the input column names, ranking defaults, and
//! display settings used throughout the storm reporter application.

// =============================================================================
// Input Column Names
// =============================================================================

/// Free-text event type column
pub const EVENT_TYPE_COLUMN: &str = "EVTYPE";

/// Fatality count column
pub const FATALITIES_COLUMN: &str = "FATALITIES";

/// Injury count column
pub const INJURIES_COLUMN: &str = "INJURIES";

/// Property damage magnitude column
pub const PROPERTY_DAMAGE_COLUMN: &str = "PROPDMG";

/// Property damage exponent code column
pub const PROPERTY_DAMAGE_EXP_COLUMN: &str = "PROPDMGEXP";

/// Crop damage magnitude column
pub const CROP_DAMAGE_COLUMN: &str = "CROPDMG";

/// Crop damage exponent code column
pub const CROP_DAMAGE_EXP_COLUMN: &str = "CROPDMGEXP";

/// Columns the loader requires in the input header. All other columns in
/// the source file are ignored.
pub const REQUIRED_COLUMNS: &[&str] = &[
    EVENT_TYPE_COLUMN,
    FATALITIES_COLUMN,
    INJURIES_COLUMN,
    PROPERTY_DAMAGE_COLUMN,
    PROPERTY_DAMAGE_EXP_COLUMN,
    CROP_DAMAGE_COLUMN,
    CROP_DAMAGE_EXP_COLUMN,
];

// =============================================================================
// Ranking Defaults
// =============================================================================

/// Number of entries in each ranking table if not overridden
pub const DEFAULT_TOP_N: usize = 10;

/// Upper bound on --top-n to keep report output readable
pub const MAX_TOP_N: usize = 1000;

// =============================================================================
// Progress Reporting
// =============================================================================

/// Update the loader progress bar every this many rows
pub const PROGRESS_TICK_ROWS: usize = 10_000;
