//! Result type alias for Veil
//!
//! This module provides a convenient Result type alias that uses VeilError
//! as the error type.

use super::errors::VeilError;

/// Result type alias for Veil operations
///
/// This is a convenience type alias that uses `VeilError` as the error type.
/// Use this throughout the codebase for fallible operations.
///
/// # Examples
///
/// ```
/// use veil::domain::result::Result;
/// use veil::domain::errors::{ValidationError, VeilError};
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(VeilError::Validation(ValidationError::EmptyQuasiIdentifiers))
/// }
/// ```
pub type Result<T> = std::result::Result<T, VeilError>;
