//! Numeric column transforms
//!
//! Two ways to anonymize a numeric quasi-identifier: quantile binning,
//! which turns the column categorical by replacing each value with a
//! `"low-high"` range label, and microaggregation, which keeps the column
//! numeric but replaces each value with the mean of its k-sized group of
//! neighbors in sort order.
//!
//! Nulls pass through both transforms untouched; statistics are computed
//! over the non-null values only.

use crate::domain::result::Result;
use crate::domain::table::{Column, ColumnType, Value};
use std::cmp::Ordering;

/// Discretize a numeric column into `bin_count` equal-frequency bins
///
/// Bin edges are quantiles of the non-null values (linear interpolation).
/// Each value becomes a label `"{low:.2}-{high:.2}"` naming its bin's
/// boundaries, so the resulting column is categorical. Skewed data can
/// produce duplicate edges and therefore fewer than `bin_count` distinct
/// labels; that is expected, not an error.
pub fn bin_numeric(column: &Column, bin_count: usize) -> Result<Column> {
    let mut sorted: Vec<f64> = column.values().iter().filter_map(Value::as_number).collect();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    if sorted.is_empty() {
        // Nothing to bin; the column still becomes categorical.
        return Column::new(column.name(), ColumnType::Categorical, column.values().to_vec());
    }

    let edges = quantile_edges(&sorted, bin_count);
    let labels: Vec<String> = edges
        .windows(2)
        .map(|pair| format!("{:.2}-{:.2}", pair[0], pair[1]))
        .collect();

    // Interior edges partition the range; a value lands in the bin counted
    // by how many interior edges it is >= (last bin absorbs the maximum).
    let interior = &edges[1..edges.len() - 1];
    let values = column
        .values()
        .iter()
        .map(|value| match value.as_number() {
            Some(n) => {
                let bin = interior
                    .partition_point(|edge| *edge <= n)
                    .min(labels.len() - 1);
                Value::Text(labels[bin].clone())
            }
            None => Value::Null,
        })
        .collect();

    Column::new(column.name(), ColumnType::Categorical, values)
}

/// Replace each value with the mean of its k-group in ascending order
///
/// The non-null values are sorted ascending (stable, so ties stay
/// adjacent) and partitioned into consecutive groups of exactly `k`; the
/// final group holds the remainder when the count is not divisible by
/// `k`. Every member of a group is replaced by the group's arithmetic
/// mean. A final group smaller than `k` shares a mean with fewer than `k`
/// rows; the verifier catches that downstream.
pub fn microaggregate(column: &Column, k: usize) -> Result<Column> {
    let mut order: Vec<(usize, f64)> = column
        .values()
        .iter()
        .enumerate()
        .filter_map(|(row, value)| value.as_number().map(|n| (row, n)))
        .collect();
    order.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));

    let mut values = column.values().to_vec();
    for group in order.chunks(k) {
        let mean = group.iter().map(|(_, n)| n).sum::<f64>() / group.len() as f64;
        for (row, _) in group {
            values[*row] = Value::Number(mean);
        }
    }

    Column::new(column.name(), ColumnType::Numeric, values)
}

/// Quantile edges over sorted values: `bins + 1` edges at q = i / bins
fn quantile_edges(sorted: &[f64], bins: usize) -> Vec<f64> {
    (0..=bins)
        .map(|i| {
            let q = i as f64 / bins as f64;
            let position = q * (sorted.len() - 1) as f64;
            let lower = position.floor() as usize;
            let fraction = position - lower as f64;
            if lower + 1 < sorted.len() {
                sorted[lower] + fraction * (sorted[lower + 1] - sorted[lower])
            } else {
                sorted[lower]
            }
        })
        .collect()
}
