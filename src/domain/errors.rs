//! Domain error types
//!
//! This module defines the closed error set for Veil. Every failure the
//! engine can produce is either a configuration problem (bad `k`, unknown
//! method name) or a validation problem (input table does not match the
//! requested quasi-identifiers). Errors carry structured context rather
//! than pre-formatted strings so callers can match on the offending field.

use thiserror::Error;

/// Main Veil error type
///
/// This is the primary error type used throughout the crate.
/// It wraps the specific error kinds and provides context for error handling.
#[derive(Debug, Error)]
pub enum VeilError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Input validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Configuration-specific errors
///
/// Raised when constructing an engine or loading a configuration file.
/// Each variant names the offending value so callers and logs can report
/// exactly what was rejected.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// k below the minimum group size the model requires
    #[error("k must be an integer greater than or equal to 2, got {k}")]
    InvalidK { k: i64 },

    /// bin_count must allow at least one bin
    #[error("bin_count must be greater than or equal to 1, got {bin_count}")]
    InvalidBinCount { bin_count: i64 },

    /// Unknown categorical anonymization method name
    #[error("Unsupported categorical anonymization method: {method}")]
    UnsupportedCategoricalMethod { method: String },

    /// Unknown numerical anonymization method name
    #[error("Unsupported numerical anonymization method: {method}")]
    UnsupportedNumericalMethod { method: String },

    /// Configuration file missing on disk
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    /// Failed to read the configuration file
    #[error("Failed to read configuration file {path}: {message}")]
    Io { path: String, message: String },

    /// TOML parsing or environment substitution failure
    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Validation-specific errors
///
/// Raised before any transform runs; the input table is never partially
/// modified when one of these is returned.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Requested quasi-identifier columns absent from the table
    #[error("Quasi-identifier columns not found in table: {missing:?}")]
    MissingColumns { missing: Vec<String> },

    /// An empty quasi-identifier set makes the request meaningless
    #[error("Quasi-identifier set must not be empty")]
    EmptyQuasiIdentifiers,

    /// Columns of a table must all hold one value per row
    #[error("Column '{column}' has {actual} rows, expected {expected}")]
    ColumnLengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },

    /// A value inconsistent with the column's declared type
    #[error("Column '{column}' is {expected} but holds a {actual} value at row {row}")]
    TypeMismatch {
        column: String,
        expected: String,
        actual: String,
        row: usize,
    },

    /// Duplicate column name in a table definition
    #[error("Duplicate column name: {name}")]
    DuplicateColumn { name: String },
}
