// Veil - K-Anonymity Anonymization Engine
// Copyright (c) 2025 Veil Contributors
// Licensed under the MIT License

//! # Veil - k-anonymity anonymization for tabular data
//!
//! Veil anonymizes in-memory tables so that, with respect to a chosen set
//! of quasi-identifier columns, no record is distinguishable from fewer
//! than k-1 others — the k-anonymity privacy model. It is built for data
//! engineers preparing datasets for sharing or analysis while limiting
//! re-identification risk.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Transforming** quasi-identifier columns: quantile binning or
//!   microaggregation for numeric data, generalization or suppression for
//!   categorical data
//! - **Verifying** that every quasi-identifier combination occurs at
//!   least k times
//! - **Repairing** residual violations by suppressing undersized
//!   equivalence classes
//! - **Measuring** the information loss the anonymization cost
//!
//! Reading and writing files or databases is deliberately out of scope:
//! callers supply a [`domain::Table`] (typically built by a file-reading
//! or database collaborator) and consume the anonymized table downstream.
//!
//! ## Architecture
//!
//! Veil follows a layered architecture:
//!
//! - [`domain`] - Table model, error types, result alias
//! - [`anonymization`] - Engine, per-column transforms, verification,
//!   information-loss reporting
//! - [`config`] - Configuration loading and validation
//! - [`logging`] - Structured logging setup
//!
//! ## Quick Start
//!
//! ```rust
//! use veil::anonymization::{KAnonymityEngine, config::KAnonymityConfig};
//! use veil::domain::{Column, Table};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let table = Table::new(vec![
//!         Column::numeric("age", vec![21.0, 22.0, 23.0, 58.0, 59.0, 60.0]),
//!         Column::categorical(
//!             "zip",
//!             vec!["A", "A", "B", "B", "B", "C"]
//!                 .into_iter()
//!                 .map(|s| Some(s.to_string()))
//!                 .collect(),
//!         ),
//!     ])?;
//!
//!     let engine = KAnonymityEngine::new(KAnonymityConfig::default())?;
//!     let quasi_identifiers = vec!["age".to_string(), "zip".to_string()];
//!
//!     let anonymized = engine.anonymize(&table, &quasi_identifiers)?;
//!     let report = engine.evaluate_information_loss(&table, &anonymized, &quasi_identifiers)?;
//!
//!     println!("{}", report.format_console());
//!     Ok(())
//! }
//! ```
//!
//! ## Guarantees and limitations
//!
//! Veil implements plain k-anonymity: after a successful call, every
//! quasi-identifier tuple either occurs at least k times or belongs to a
//! row whose quasi-identifiers were all suppressed. Two documented
//! weaknesses are preserved from the model rather than silently patched:
//! the suppression repair pass does not re-verify (a small all-null group
//! can remain below k), and microaggregation's final group may hold fewer
//! than k values when the row count is not divisible by k. Veil is not a
//! differential-privacy or l-diversity/t-closeness engine and does not
//! protect against attribute disclosure or background-knowledge attacks.
//!
//! ## Error Handling
//!
//! Veil uses the [`domain::VeilError`] type for all errors. Anonymization
//! is all-or-nothing: a configuration or validation failure terminates
//! the call with no partial result observable.
//!
//! ```rust,no_run
//! use veil::domain::VeilError;
//!
//! fn example() -> Result<(), VeilError> {
//!     let config = veil::config::VeilConfig::from_file("veil.toml")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Veil uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!("Starting anonymization");
//! warn!(k = 3, "K-anonymity not satisfied, applying suppression");
//! ```

pub mod anonymization;
pub mod config;
pub mod domain;
pub mod logging;
