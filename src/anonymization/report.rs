//! Information-loss reporting
//!
//! Anonymization trades utility for privacy; this module measures the
//! trade. The report compares the original table with its anonymized
//! counterpart over the quasi-identifier columns and collects a flat
//! metric-name to value map:
//!
//! - `{column}_suppression_rate` — percent of nulls in that column
//! - `overall_suppression_rate` — percent of nulls across all
//!   quasi-identifier cells
//! - `{column}_avg_generalization` — original value range divided by the
//!   number of distinct labels, for numeric columns that became
//!   categorical
//! - `equivalence_class_count` / `avg_equivalence_class_size` — grouping
//!   statistics over the anonymized quasi-identifier tuples

use crate::anonymization::equivalence::equivalence_classes;
use crate::domain::table::{Column, ColumnType, Table, Value};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Utility-loss metrics for one anonymization run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InformationLossReport {
    /// Metric name to numeric value
    pub metrics: HashMap<String, f64>,

    /// Rows in the evaluated tables
    pub row_count: usize,

    /// Quasi-identifier columns the metrics cover
    pub quasi_identifiers: Vec<String>,

    /// When the report was generated
    pub generated_at: DateTime<Utc>,
}

impl InformationLossReport {
    /// Compute metrics from an original/anonymized table pair
    ///
    /// Pure: neither table is mutated. Callers are expected to pass the
    /// same quasi-identifier set the anonymization ran with; names absent
    /// from a table are skipped.
    pub fn compute(original: &Table, anonymized: &Table, quasi_identifiers: &[String]) -> Self {
        let mut metrics = HashMap::new();
        let rows = anonymized.row_count();

        // Suppression rates, per column and overall.
        let mut total_suppressed = 0usize;
        for name in quasi_identifiers {
            if let Some(column) = anonymized.column(name) {
                let nulls = column.null_count();
                total_suppressed += nulls;
                metrics.insert(
                    format!("{name}_suppression_rate"),
                    percentage(nulls, rows),
                );
            }
        }
        metrics.insert(
            "overall_suppression_rate".to_string(),
            percentage(total_suppressed, rows * quasi_identifiers.len()),
        );

        // Generalization impact for numeric columns that turned categorical.
        for name in quasi_identifiers {
            let (Some(before), Some(after)) = (original.column(name), anonymized.column(name))
            else {
                continue;
            };
            if before.column_type() != ColumnType::Numeric
                || after.column_type() != ColumnType::Categorical
            {
                continue;
            }
            if let Some(impact) = generalization_impact(before, after) {
                metrics.insert(format!("{name}_avg_generalization"), impact);
            }
        }

        // Equivalence-class statistics, null tuples included.
        let classes = equivalence_classes(anonymized, quasi_identifiers);
        metrics.insert("equivalence_class_count".to_string(), classes.len() as f64);
        let avg_size = if classes.is_empty() {
            0.0
        } else {
            rows as f64 / classes.len() as f64
        };
        metrics.insert("avg_equivalence_class_size".to_string(), avg_size);

        Self {
            metrics,
            row_count: rows,
            quasi_identifiers: quasi_identifiers.to_vec(),
            generated_at: Utc::now(),
        }
    }

    /// Look up one metric by name
    pub fn get(&self, name: &str) -> Option<f64> {
        self.metrics.get(name).copied()
    }

    /// Format report for console output
    pub fn format_console(&self) -> String {
        let mut output = String::new();

        output.push_str("Information loss report\n");
        output.push_str(&format!(
            "  rows: {}, quasi-identifiers: {}\n",
            self.row_count,
            self.quasi_identifiers.join(", ")
        ));

        let mut names: Vec<&String> = self.metrics.keys().collect();
        names.sort();
        for name in names {
            output.push_str(&format!("  {:40} {:>10.2}\n", name, self.metrics[name]));
        }

        output
    }

    /// Format report as JSON
    pub fn format_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Percent helper; an empty denominator yields 0 rather than NaN
fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// (max - min) of the original values over the distinct anonymized labels
fn generalization_impact(before: &Column, after: &Column) -> Option<f64> {
    let numbers: Vec<f64> = before.values().iter().filter_map(Value::as_number).collect();
    let min = numbers.iter().copied().reduce(f64::min)?;
    let max = numbers.iter().copied().reduce(f64::max)?;

    let labels: HashSet<&str> = after.values().iter().filter_map(Value::as_text).collect();
    if labels.is_empty() {
        return None;
    }
    Some((max - min) / labels.len() as f64)
}
