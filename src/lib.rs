//! Storm Reporter Library
//!
//! A Rust library for summarising NOAA Storm Events data into casualty and
//! economic-damage rankings per event type.
//!
//! This library provides tools for:
//! - Loading storm-event records from delimited files with header-driven
//!   column discovery
//! - Canonicalising the free-text event-type field
//! - Resolving (magnitude, exponent-code) damage pairs into dollar amounts
//! - Aggregating casualty and damage totals per event type in a single pass
//! - Ranking aggregates into top-N tables for reporting

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod aggregator;
        pub mod damage_resolver;
        pub mod event_normalizer;
        pub mod ranker;
        pub mod storm_csv_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{EventAggregate, RankingMetric, StormRecord};
pub use config::Config;

/// Result type alias for storm-report processing
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for storm-report processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Required column absent from the input header
    #[error("Missing required column '{column}' in file '{file}'")]
    MissingColumn { file: String, column: String },

    /// Data validation error (malformed field values, row context included)
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Damage exponent code outside the defined vocabulary
    #[error("Invalid damage exponent code '{code}'{context}")]
    InvalidExponentCode { code: String, context: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Report rendering error
    #[error("Report rendering error: {message}")]
    ReportRendering { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a missing-column error
    pub fn missing_column(file: impl Into<String>, column: impl Into<String>) -> Self {
        Self::MissingColumn {
            file: file.into(),
            column: column.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create an invalid exponent code error without record context
    pub fn invalid_exponent_code(code: impl Into<String>) -> Self {
        Self::InvalidExponentCode {
            code: code.into(),
            context: String::new(),
        }
    }

    /// Create an invalid exponent code error naming the record it came from
    pub fn invalid_exponent_code_at(
        code: impl Into<String>,
        event_type: impl Into<String>,
    ) -> Self {
        Self::InvalidExponentCode {
            code: code.into(),
            context: format!(" (event type '{}')", event_type.into()),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a report rendering error
    pub fn report_rendering(message: impl Into<String>) -> Self {
        Self::ReportRendering {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}
