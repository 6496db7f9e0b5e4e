use std::num::ParseFloatError;

use thiserror::Error;

use crate::types::IsolationLevel;

/// Error type for rdsql operations
#[derive(Debug, Error)]
pub enum RdsError {
    #[error("Cannot mix named and ordinal parameters in one statement")]
    MixedParameters,

    #[error("Unsupported parameter {name:?}: {kind} values cannot be sent to the Data API")]
    UnsupportedParameter { name: String, kind: &'static str },

    #[error("Unknown type {0}, needs support")]
    UnknownColumnType(String),

    #[error("Invalid numeric value {value:?}: {source}")]
    InvalidNumeric {
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("Invalid {type_name} value {value:?}, expected {layout}")]
    InvalidTemporal {
        type_name: &'static str,
        value: String,
        layout: &'static str,
        #[source]
        source: Option<chrono::ParseError>,
    },

    #[error("Column type {type_name} expects a {expected} field, got {actual}")]
    FieldMismatch {
        type_name: &'static str,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Row has {actual} field(s), expected {expected}")]
    FieldCountMismatch { expected: usize, actual: usize },

    #[error("Isolation level {level} is not supported by the {dialect} dialect")]
    UnsupportedIsolationLevel {
        level: IsolationLevel,
        dialect: &'static str,
    },

    #[error("Unknown dialect: {0}")]
    UnknownDialect(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Expected {expected} row(s), got {actual}")]
    UnexpectedRowCount { expected: usize, actual: usize },

    #[error("Column not found: {0}")]
    ColumnNotFound(String),
}

/// Result type alias for rdsql operations
pub type Result<T> = std::result::Result<T, RdsError>;
