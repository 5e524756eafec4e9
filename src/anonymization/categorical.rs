//! Categorical column transforms
//!
//! Both transforms do the same frequency analysis — count each distinct
//! value, flag those occurring fewer than k times — and differ only in
//! what replaces a rare value: a shared generic label (generalization) or
//! the null marker (suppression). Values already at or above the k
//! threshold are never touched, which makes both transforms idempotent on
//! their own output. Nulls are not counted as a category and pass through
//! unchanged.

use crate::domain::result::Result;
use crate::domain::table::{Column, Value};
use std::collections::{HashMap, HashSet};

/// Label that absorbs rare categorical values under generalization
pub const GENERIC_LABEL: &str = "Other";

/// Replace values occurring fewer than `k` times with [`GENERIC_LABEL`]
pub fn generalize(column: &Column, k: usize) -> Result<Column> {
    replace_rare(column, k, |_| Value::Text(GENERIC_LABEL.to_string()))
}

/// Replace values occurring fewer than `k` times with the null marker
///
/// Prefer this over [`generalize`] when a shared "Other" bucket would
/// suggest a grouping that does not exist; a null signals true data loss.
pub fn suppress(column: &Column, k: usize) -> Result<Column> {
    replace_rare(column, k, |_| Value::Null)
}

fn replace_rare(
    column: &Column,
    k: usize,
    replacement: impl Fn(&Value) -> Value,
) -> Result<Column> {
    let mut counts: HashMap<&Value, usize> = HashMap::new();
    for value in column.values().iter().filter(|v| !v.is_null()) {
        *counts.entry(value).or_insert(0) += 1;
    }

    let rare: HashSet<&Value> = counts
        .into_iter()
        .filter(|(_, count)| *count < k)
        .map(|(value, _)| value)
        .collect();

    let values = column
        .values()
        .iter()
        .map(|value| {
            if rare.contains(value) {
                replacement(value)
            } else {
                value.clone()
            }
        })
        .collect();

    Column::new(column.name(), column.column_type(), values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::table::ColumnType;

    fn zip_column() -> Column {
        Column::categorical(
            "zip",
            ["A", "A", "B", "B", "B", "C"]
                .iter()
                .map(|s| Some(s.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_generalization_replaces_rare_values() {
        let generalized = generalize(&zip_column(), 2).unwrap();

        let texts: Vec<&str> = generalized
            .values()
            .iter()
            .map(|v| v.as_text().unwrap())
            .collect();
        assert_eq!(texts, vec!["A", "A", "B", "B", "B", "Other"]);
    }

    #[test]
    fn test_suppression_nulls_rare_values() {
        // only the single C row is suppressed
        let suppressed = suppress(&zip_column(), 2).unwrap();

        assert_eq!(suppressed.get(0).unwrap().as_text(), Some("A"));
        assert_eq!(suppressed.get(4).unwrap().as_text(), Some("B"));
        assert!(suppressed.get(5).unwrap().is_null());
        assert_eq!(suppressed.null_count(), 1);
    }

    #[test]
    fn test_no_rare_values_is_identity() {
        let column = zip_column();
        let generalized = generalize(&column, 2).unwrap();
        let again = generalize(&generalized, 2).unwrap();
        assert_eq!(generalized.values(), again.values());

        let all_common = Column::categorical(
            "zip",
            ["A", "A", "B", "B"].iter().map(|s| Some(s.to_string())).collect(),
        );
        assert_eq!(generalize(&all_common, 2).unwrap().values(), all_common.values());
    }

    #[test]
    fn test_generalization_with_high_k_collapses_everything() {
        let generalized = generalize(&zip_column(), 10).unwrap();
        assert!(generalized
            .values()
            .iter()
            .all(|v| v.as_text() == Some(GENERIC_LABEL)));
    }

    #[test]
    fn test_nulls_not_counted_as_category() {
        let column = Column::categorical(
            "zip",
            vec![Some("A".to_string()), Some("A".to_string()), None],
        );
        let suppressed = suppress(&column, 2).unwrap();
        // A survives with count 2; the existing null stays a null.
        assert_eq!(suppressed.get(0).unwrap().as_text(), Some("A"));
        assert_eq!(suppressed.null_count(), 1);
    }

    #[test]
    fn test_empty_column() {
        let column = Column::categorical("zip", vec![]);
        let generalized = generalize(&column, 2).unwrap();
        assert!(generalized.is_empty());
        assert_eq!(generalized.column_type(), ColumnType::Categorical);
    }
}
