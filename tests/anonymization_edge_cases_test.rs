//! Edge case tests for the k-anonymity engine

use veil::anonymization::{
    config::{CategoricalMethod, KAnonymityConfig, NumericalMethod},
    engine::KAnonymityEngine,
};
use veil::domain::{Column, ColumnType, Table, Value};

fn qis(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn engine_with(config: KAnonymityConfig) -> KAnonymityEngine {
    KAnonymityEngine::new(config).expect("Failed to create engine")
}

#[test]
fn test_empty_table() {
    let table = Table::new(vec![
        Column::numeric("age", vec![]),
        Column::categorical("zip", vec![]),
    ])
    .unwrap();
    let engine = engine_with(KAnonymityConfig::default());
    let names = qis(&["age", "zip"]);

    let anonymized = engine.anonymize(&table, &names).unwrap();
    assert_eq!(anonymized.row_count(), 0);
    // The empty table satisfies k-anonymity trivially.
    assert!(engine.verify(&anonymized, &names).unwrap());
}

#[test]
fn test_single_row_table_is_fully_suppressed() {
    let table = Table::new(vec![Column::categorical(
        "zip",
        vec![Some("A".to_string())],
    )])
    .unwrap();
    let engine = engine_with(KAnonymityConfig {
        categorical_method: CategoricalMethod::Suppression,
        ..Default::default()
    });

    let anonymized = engine.anonymize(&table, &qis(&["zip"])).unwrap();
    assert!(anonymized.column("zip").unwrap().get(0).unwrap().is_null());
}

#[test]
fn test_repair_leaves_residual_null_group() {
    // Exactly one violating row: after repair the all-null group has size
    // one and still fails verification. The single-pass behavior is
    // deliberate and documented.
    let table = Table::new(vec![Column::categorical(
        "zip",
        ["A", "A", "B", "B", "B", "C"]
            .iter()
            .map(|s| Some(s.to_string()))
            .collect(),
    )])
    .unwrap();
    let engine = engine_with(KAnonymityConfig {
        categorical_method: CategoricalMethod::Suppression,
        ..Default::default()
    });
    let names = qis(&["zip"]);

    let anonymized = engine.anonymize(&table, &names).unwrap();
    assert_eq!(anonymized.column("zip").unwrap().null_count(), 1);
    assert!(!engine.verify(&anonymized, &names).unwrap());
}

#[test]
fn test_microaggregation_row_count_not_divisible_by_k() {
    // 7 rows with k = 3: the final group keeps only one value, so its
    // mean is shared by fewer than k rows until repair suppresses it.
    let table = Table::new(vec![Column::numeric(
        "age",
        vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 100.0],
    )])
    .unwrap();
    let engine = engine_with(KAnonymityConfig {
        k: 3,
        numerical_method: NumericalMethod::Microaggregation,
        ..Default::default()
    });

    let anonymized = engine.anonymize(&table, &qis(&["age"])).unwrap();
    let age = anonymized.column("age").unwrap();

    assert_eq!(age.get(0).unwrap().as_number(), Some(2.0));
    assert_eq!(age.get(3).unwrap().as_number(), Some(5.0));
    // The singleton 100.0 group gets suppressed by repair.
    assert!(age.get(6).unwrap().is_null());
}

#[test]
fn test_binning_highly_skewed_column() {
    let mut values = vec![0.0; 20];
    values.push(1000.0);
    let table = Table::new(vec![Column::numeric("amount", values)]).unwrap();
    let engine = engine_with(KAnonymityConfig {
        bin_count: 5,
        ..Default::default()
    });

    let anonymized = engine.anonymize(&table, &qis(&["amount"])).unwrap();
    let column = anonymized.column("amount").unwrap();
    assert_eq!(column.column_type(), ColumnType::Categorical);

    let labels: std::collections::HashSet<&str> = column
        .values()
        .iter()
        .filter_map(Value::as_text)
        .collect();
    // Duplicate quantile edges collapse to fewer distinct labels.
    assert!(labels.len() <= 5);
}

#[test]
fn test_input_with_existing_nulls() {
    let table = Table::new(vec![Column::categorical(
        "zip",
        vec![
            Some("A".to_string()),
            Some("A".to_string()),
            None,
            None,
            Some("B".to_string()),
            Some("B".to_string()),
        ],
    )])
    .unwrap();
    let engine = engine_with(KAnonymityConfig::default());
    let names = qis(&["zip"]);

    let anonymized = engine.anonymize(&table, &names).unwrap();
    // The two pre-existing nulls form a class of size 2 and need no work.
    assert_eq!(anonymized, table);
    assert!(engine.verify(&anonymized, &names).unwrap());
}

#[test]
fn test_large_k_suppresses_everything() {
    let table = Table::new(vec![Column::categorical(
        "zip",
        ["A", "B", "C", "D"].iter().map(|s| Some(s.to_string())).collect(),
    )])
    .unwrap();
    let engine = engine_with(KAnonymityConfig {
        k: 10,
        categorical_method: CategoricalMethod::Suppression,
        ..Default::default()
    });

    let anonymized = engine.anonymize(&table, &qis(&["zip"])).unwrap();
    assert_eq!(anonymized.column("zip").unwrap().null_count(), 4);
}

#[test]
fn test_duplicate_heavy_numeric_column_with_microaggregation() {
    // Ties stay adjacent under the stable sort and may span group
    // boundaries; each occurrence takes the mean of its own group.
    let table = Table::new(vec![Column::numeric(
        "age",
        vec![5.0, 5.0, 5.0, 5.0, 5.0, 5.0],
    )])
    .unwrap();
    let engine = engine_with(KAnonymityConfig {
        k: 3,
        numerical_method: NumericalMethod::Microaggregation,
        ..Default::default()
    });

    let anonymized = engine.anonymize(&table, &qis(&["age"])).unwrap();
    assert!(anonymized
        .column("age")
        .unwrap()
        .values()
        .iter()
        .all(|v| v.as_number() == Some(5.0)));
}
