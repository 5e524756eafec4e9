//! Equivalence classes, k-anonymity verification, and suppression repair
//!
//! An equivalence class is the set of rows sharing one quasi-identifier
//! tuple. Classes are recomputed on demand and never persisted: the
//! verifier groups once to find the minimum class size, and the repair
//! pass groups again to null out the members of undersized classes.

use crate::domain::table::{Column, Table, Value};
use std::collections::HashMap;

/// Group row indices by their quasi-identifier tuple
///
/// Quasi-identifier names not present in the table are ignored; the
/// engine validates presence before any grouping runs. A tuple of nulls
/// is a class like any other.
pub fn equivalence_classes(
    table: &Table,
    quasi_identifiers: &[String],
) -> HashMap<Vec<Value>, Vec<usize>> {
    let columns: Vec<&Column> = quasi_identifiers
        .iter()
        .filter_map(|name| table.column(name))
        .collect();

    let mut classes: HashMap<Vec<Value>, Vec<usize>> = HashMap::new();
    for row in 0..table.row_count() {
        let key: Vec<Value> = columns
            .iter()
            .map(|column| column.get(row).cloned().unwrap_or(Value::Null))
            .collect();
        classes.entry(key).or_default().push(row);
    }
    classes
}

/// Check whether every equivalence class has at least `k` members
///
/// The empty table satisfies k-anonymity trivially. Pure; never mutates.
pub fn verify_k_anonymity(table: &Table, quasi_identifiers: &[String], k: usize) -> bool {
    equivalence_classes(table, quasi_identifiers)
        .values()
        .all(|rows| rows.len() >= k)
}

/// Null out the quasi-identifier values of every undersized class
///
/// Single pass: classes are computed once and members of those with fewer
/// than `k` rows get all their quasi-identifier values set to the null
/// marker. No re-verification follows — if the merged all-null class
/// itself ends up smaller than `k`, that residual violation is returned
/// as-is. Known limitation, kept deliberately.
///
/// Returns the number of rows suppressed.
pub fn apply_suppression(table: &mut Table, quasi_identifiers: &[String], k: usize) -> usize {
    let violating_rows: Vec<usize> = equivalence_classes(table, quasi_identifiers)
        .into_values()
        .filter(|rows| rows.len() < k)
        .flatten()
        .collect();

    for name in quasi_identifiers {
        if let Some(column) = table.column_mut(name) {
            for &row in &violating_rows {
                column.set(row, Value::Null);
            }
        }
    }

    violating_rows.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_column_table() -> Table {
        Table::new(vec![
            Column::categorical(
                "zip",
                ["A", "A", "B", "B", "C"]
                    .iter()
                    .map(|s| Some(s.to_string()))
                    .collect(),
            ),
            Column::categorical(
                "city",
                ["X", "X", "Y", "Y", "Z"]
                    .iter()
                    .map(|s| Some(s.to_string()))
                    .collect(),
            ),
        ])
        .unwrap()
    }

    fn qis(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_equivalence_classes_group_by_tuple() {
        let table = two_column_table();
        let classes = equivalence_classes(&table, &qis(&["zip", "city"]));

        assert_eq!(classes.len(), 3);
        let key = vec![Value::from("A"), Value::from("X")];
        assert_eq!(classes.get(&key), Some(&vec![0, 1]));
    }

    #[test]
    fn test_verify_passes_at_k_2_without_singleton() {
        let table = Table::new(vec![Column::categorical(
            "zip",
            ["A", "A", "B", "B"].iter().map(|s| Some(s.to_string())).collect(),
        )])
        .unwrap();
        assert!(verify_k_anonymity(&table, &qis(&["zip"]), 2));
        assert!(!verify_k_anonymity(&table, &qis(&["zip"]), 3));
    }

    #[test]
    fn test_verify_fails_on_singleton_class() {
        let table = two_column_table();
        assert!(!verify_k_anonymity(&table, &qis(&["zip", "city"]), 2));
    }

    #[test]
    fn test_verify_empty_table_trivially_true() {
        let table = Table::empty();
        assert!(verify_k_anonymity(&table, &qis(&["zip"]), 5));
    }

    #[test]
    fn test_null_tuples_form_a_class() {
        let table = Table::new(vec![Column::categorical(
            "zip",
            vec![None, None, Some("A".to_string()), Some("A".to_string())],
        )])
        .unwrap();
        let classes = equivalence_classes(&table, &qis(&["zip"]));
        assert_eq!(classes.get(&vec![Value::Null]), Some(&vec![0, 1]));
        assert!(verify_k_anonymity(&table, &qis(&["zip"]), 2));
    }

    #[test]
    fn test_suppression_nulls_only_violating_rows() {
        let mut table = two_column_table();
        let names = qis(&["zip", "city"]);

        let suppressed = apply_suppression(&mut table, &names, 2);
        assert_eq!(suppressed, 1);

        let zip = table.column("zip").unwrap();
        let city = table.column("city").unwrap();
        assert_eq!(zip.get(0).unwrap().as_text(), Some("A"));
        assert!(zip.get(4).unwrap().is_null());
        assert!(city.get(4).unwrap().is_null());
    }

    #[test]
    fn test_suppression_is_single_pass() {
        // The lone C row becomes the only all-null row; a second
        // verification would still fail, and repair does not loop.
        let mut table = Table::new(vec![Column::categorical(
            "zip",
            ["A", "A", "B", "B", "C"].iter().map(|s| Some(s.to_string())).collect(),
        )])
        .unwrap();
        let names = qis(&["zip"]);

        apply_suppression(&mut table, &names, 2);
        assert!(!verify_k_anonymity(&table, &names, 2));
        assert_eq!(table.column("zip").unwrap().null_count(), 1);
    }

    #[test]
    fn test_suppression_no_violations_is_noop() {
        let mut table = Table::new(vec![Column::categorical(
            "zip",
            ["A", "A"].iter().map(|s| Some(s.to_string())).collect(),
        )])
        .unwrap();
        let before = table.clone();
        assert_eq!(apply_suppression(&mut table, &qis(&["zip"]), 2), 0);
        assert_eq!(table, before);
    }
}
