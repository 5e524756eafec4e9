//! K-anonymity anonymization engine
//!
//! This module provides the core [`KAnonymityEngine`] that drives the
//! per-column transforms, the k-anonymity verification, and the
//! suppression fallback.
//!
//! # Architecture
//!
//! One call to [`anonymize`](KAnonymityEngine::anonymize) runs a linear
//! pipeline:
//!
//! 1. **Validate** — every quasi-identifier must be a column of the table
//! 2. **Transform** — numeric columns through binning or
//!    microaggregation, categorical columns through generalization or
//!    suppression, in quasi-identifier order
//! 3. **Verify** — group by the transformed tuples and check the minimum
//!    class size against k
//! 4. **Repair** — if verification failed, null the quasi-identifiers of
//!    every undersized class
//!
//! # Examples
//!
//! ```
//! use veil::anonymization::{KAnonymityEngine, config::KAnonymityConfig};
//! use veil::domain::{Column, Table};
//!
//! # fn example() -> veil::domain::Result<()> {
//! let engine = KAnonymityEngine::new(KAnonymityConfig::default())?;
//!
//! let table = Table::new(vec![Column::categorical(
//!     "zip",
//!     vec![Some("A".into()), Some("A".into()), Some("B".into()), Some("B".into())],
//! )])?;
//!
//! let anonymized = engine.anonymize(&table, &["zip".to_string()])?;
//! assert_eq!(anonymized.row_count(), 4);
//! # Ok(())
//! # }
//! ```

use crate::anonymization::{
    categorical::{generalize, suppress},
    config::{CategoricalMethod, KAnonymityConfig, NumericalMethod},
    equivalence::{apply_suppression, verify_k_anonymity},
    numeric::{bin_numeric, microaggregate},
    report::InformationLossReport,
};
use crate::domain::errors::ValidationError;
use crate::domain::result::Result;
use crate::domain::table::{ColumnType, Table};

/// K-anonymity anonymization engine
///
/// Holds a validated, immutable [`KAnonymityConfig`]. Each call to
/// [`anonymize`](Self::anonymize) allocates fresh intermediate state and
/// never mutates its input, so one engine can serve concurrent callers
/// on independent tables.
#[derive(Debug)]
pub struct KAnonymityEngine {
    config: KAnonymityConfig,
}

impl KAnonymityEngine {
    /// Create a new engine from a configuration
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`](crate::domain::ConfigurationError)
    /// if `k < 2` or `bin_count < 1`.
    pub fn new(config: KAnonymityConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configured minimum equivalence class size
    pub fn k(&self) -> usize {
        self.config.k
    }

    /// The engine's configuration
    pub fn config(&self) -> &KAnonymityConfig {
        &self.config
    }

    /// Anonymize a table with respect to the given quasi-identifiers
    ///
    /// Returns a freshly built table with the same row count and column
    /// set/order as the input; only quasi-identifier columns differ. The
    /// input table is never modified.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the quasi-identifier set is empty
    /// or names columns the table does not have. On error no partial
    /// result is observable.
    pub fn anonymize(&self, table: &Table, quasi_identifiers: &[String]) -> Result<Table> {
        self.validate(table, quasi_identifiers)?;

        tracing::info!(
            k = self.config.k,
            rows = table.row_count(),
            quasi_identifiers = ?quasi_identifiers,
            categorical_method = %self.config.categorical_method,
            numerical_method = %self.config.numerical_method,
            "Starting anonymization"
        );

        let mut anonymized = table.clone();

        for name in quasi_identifiers {
            let column = anonymized
                .column(name)
                .ok_or_else(|| ValidationError::MissingColumns {
                    missing: vec![name.clone()],
                })?;

            let transformed = match column.column_type() {
                ColumnType::Numeric => {
                    tracing::debug!(
                        column = %name,
                        method = %self.config.numerical_method,
                        "Anonymizing numeric column"
                    );
                    match self.config.numerical_method {
                        NumericalMethod::Binning => bin_numeric(column, self.config.bin_count)?,
                        NumericalMethod::Microaggregation => {
                            microaggregate(column, self.config.k)?
                        }
                    }
                }
                ColumnType::Categorical => {
                    tracing::debug!(
                        column = %name,
                        method = %self.config.categorical_method,
                        "Anonymizing categorical column"
                    );
                    match self.config.categorical_method {
                        CategoricalMethod::Generalization => generalize(column, self.config.k)?,
                        CategoricalMethod::Suppression => suppress(column, self.config.k)?,
                    }
                }
            };

            anonymized.replace_column(transformed)?;
        }

        if !verify_k_anonymity(&anonymized, quasi_identifiers, self.config.k) {
            tracing::warn!(
                k = self.config.k,
                "K-anonymity not satisfied after per-column transforms, applying suppression"
            );
            let suppressed = apply_suppression(&mut anonymized, quasi_identifiers, self.config.k);
            tracing::debug!(rows_suppressed = suppressed, "Suppression repair applied");
        }

        tracing::info!(
            rows = anonymized.row_count(),
            columns_anonymized = quasi_identifiers.len(),
            "Anonymization complete"
        );

        Ok(anonymized)
    }

    /// Verify whether a table satisfies k-anonymity as configured
    ///
    /// Pure check over the quasi-identifier tuples; useful for assessing
    /// a table that was anonymized elsewhere.
    pub fn verify(&self, table: &Table, quasi_identifiers: &[String]) -> Result<bool> {
        self.validate(table, quasi_identifiers)?;
        Ok(verify_k_anonymity(table, quasi_identifiers, self.config.k))
    }

    /// Measure the information loss between an original table and its
    /// anonymized counterpart
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the quasi-identifier set is empty
    /// or absent from the anonymized table.
    pub fn evaluate_information_loss(
        &self,
        original: &Table,
        anonymized: &Table,
        quasi_identifiers: &[String],
    ) -> Result<InformationLossReport> {
        self.validate(anonymized, quasi_identifiers)?;
        Ok(InformationLossReport::compute(
            original,
            anonymized,
            quasi_identifiers,
        ))
    }

    /// Check the quasi-identifier set against a table before any work runs
    fn validate(&self, table: &Table, quasi_identifiers: &[String]) -> Result<()> {
        if quasi_identifiers.is_empty() {
            return Err(ValidationError::EmptyQuasiIdentifiers.into());
        }

        let missing: Vec<String> = quasi_identifiers
            .iter()
            .filter(|name| !table.contains_column(name))
            .cloned()
            .collect();
        if !missing.is_empty() {
            tracing::error!(missing = ?missing, "Missing columns in table");
            return Err(ValidationError::MissingColumns { missing }.into());
        }

        Ok(())
    }
}
