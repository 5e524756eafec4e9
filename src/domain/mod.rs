//! Domain models and types for Veil.
//!
//! This module contains the core domain types shared across the crate.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **The table model** ([`Table`], [`Column`], [`Value`], [`ColumnType`])
//! - **Error types** ([`VeilError`], [`ConfigurationError`], [`ValidationError`])
//! - **Result type alias** ([`Result`])
//!
//! # Type Safety
//!
//! Every column carries an explicit [`ColumnType`] tag assigned once at
//! construction by the data-loading collaborator. The anonymization engine
//! dispatches on that tag and never re-inspects stored values to guess a
//! column's type:
//!
//! ```rust
//! use veil::domain::{Column, ColumnType};
//!
//! let ages = Column::numeric("age", vec![21.0, 35.0, 42.0]);
//! assert_eq!(ages.column_type(), ColumnType::Numeric);
//! ```
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, VeilError>`](Result):
//!
//! ```rust
//! use veil::domain::{Result, Table, Column};
//!
//! fn example() -> Result<Table> {
//!     Table::new(vec![Column::numeric("age", vec![21.0, 22.0])])
//! }
//! ```

pub mod errors;
pub mod result;
pub mod table;

// Re-export commonly used types for convenience
pub use errors::{ConfigurationError, ValidationError, VeilError};
pub use result::Result;
pub use table::{Column, ColumnType, Table, Value};
