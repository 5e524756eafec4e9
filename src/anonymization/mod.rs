//! K-anonymity anonymization for Veil
//!
//! This module implements the k-anonymity privacy model over the in-memory
//! [`Table`](crate::domain::Table): after anonymization, every record is
//! indistinguishable from at least k-1 others with respect to the chosen
//! quasi-identifier columns.
//!
//! # Architecture
//!
//! The pipeline consists of:
//! - **Per-column transforms**: quantile binning / microaggregation for
//!   numeric columns, generalization / suppression for categorical ones
//! - **Verification**: equivalence-class grouping with a minimum-size check
//! - **Suppression repair**: nulling of residual undersized classes
//! - **Information loss**: utility metrics comparing original and
//!   anonymized tables
//!
//! # Usage
//!
//! ```rust,ignore
//! use veil::anonymization::{KAnonymityEngine, config::KAnonymityConfig};
//!
//! let engine = KAnonymityEngine::new(KAnonymityConfig::default())?;
//! let anonymized = engine.anonymize(&table, &quasi_identifiers)?;
//! let report = engine.evaluate_information_loss(&table, &anonymized, &quasi_identifiers)?;
//! ```

pub mod categorical;
pub mod config;
pub mod engine;
pub mod equivalence;
pub mod numeric;
pub mod report;

// Re-export main types
pub use config::{CategoricalMethod, KAnonymityConfig, NumericalMethod};
pub use engine::KAnonymityEngine;
pub use report::InformationLossReport;
