//! In-memory table model
//!
//! Veil operates on a minimal columnar table: an ordered collection of
//! named, equal-length columns. Each column carries an explicit type tag
//! ([`ColumnType`]) fixed at construction time — the engine never
//! re-infers types per call. The table is the boundary contract with the
//! external data-loading collaborators (file readers, database adapters):
//! they produce a [`Table`], the engine consumes it read-only and returns
//! a freshly built one.

use crate::domain::errors::ValidationError;
use crate::domain::result::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single cell value
///
/// Numeric and categorical values share one representation so that a
/// quasi-identifier tuple (which may mix both) can key a grouping map.
/// Equality and hashing treat numbers bitwise, so `NaN == NaN` for
/// grouping purposes and `-0.0 != 0.0`; input data is expected to be
/// finite, and the engine never produces non-finite values itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A numeric value
    Number(f64),
    /// A categorical (string) value
    Text(String),
    /// The null marker used by suppression
    Null,
}

impl Value {
    /// Returns true if this is the null marker
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the numeric value, if any
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the text value, if any
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Value::Number(_) => "numeric",
            Value::Text(_) => "text",
            Value::Null => "null",
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a.to_bits() == b.to_bits(),
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Null, Value::Null) => true,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl std::hash::Hash for Value {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        match self {
            Value::Number(n) => {
                state.write_u8(0);
                state.write_u64(n.to_bits());
            }
            Value::Text(s) => {
                state.write_u8(1);
                s.hash(state);
            }
            Value::Null => state.write_u8(2),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Text(s) => write!(f, "{}", s),
            Value::Null => write!(f, "null"),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

/// Semantic type of a column, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// Continuous or discrete numbers
    Numeric,
    /// Strings and anything else non-numeric
    Categorical,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::Numeric => write!(f, "numeric"),
            ColumnType::Categorical => write!(f, "categorical"),
        }
    }
}

/// A named, typed, row-indexed sequence of values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    name: String,
    column_type: ColumnType,
    values: Vec<Value>,
}

impl Column {
    /// Create a column after checking every value against the type tag
    ///
    /// Nulls are admissible in columns of either type.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::TypeMismatch`] if a value contradicts
    /// the declared type.
    pub fn new(
        name: impl Into<String>,
        column_type: ColumnType,
        values: Vec<Value>,
    ) -> Result<Self> {
        let name = name.into();
        for (row, value) in values.iter().enumerate() {
            let consistent = match column_type {
                ColumnType::Numeric => !matches!(value, Value::Text(_)),
                ColumnType::Categorical => !matches!(value, Value::Number(_)),
            };
            if !consistent {
                return Err(ValidationError::TypeMismatch {
                    column: name,
                    expected: column_type.to_string(),
                    actual: value.kind().to_string(),
                    row,
                }
                .into());
            }
        }
        Ok(Self {
            name,
            column_type,
            values,
        })
    }

    /// Create a numeric column from raw values
    pub fn numeric(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            column_type: ColumnType::Numeric,
            values: values.into_iter().map(Value::Number).collect(),
        }
    }

    /// Create a categorical column; `None` entries become the null marker
    pub fn categorical(name: impl Into<String>, values: Vec<Option<String>>) -> Self {
        Self {
            name: name.into(),
            column_type: ColumnType::Categorical,
            values: values
                .into_iter()
                .map(|v| v.map_or(Value::Null, Value::Text))
                .collect(),
        }
    }

    /// Column name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Column type tag
    pub fn column_type(&self) -> ColumnType {
        self.column_type
    }

    /// All values, row order
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Value at a row position
    pub fn get(&self, row: usize) -> Option<&Value> {
        self.values.get(row)
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the column has no rows
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Count of null markers in the column
    pub fn null_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_null()).count()
    }

    /// Overwrite the value at a row; the null marker is always admissible
    pub(crate) fn set(&mut self, row: usize, value: Value) {
        self.values[row] = value;
    }
}

/// An ordered collection of named, equal-length columns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Build a table from columns
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if column names collide or lengths
    /// differ.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let expected = columns.first().map_or(0, Column::len);
        for (i, column) in columns.iter().enumerate() {
            if column.len() != expected {
                return Err(ValidationError::ColumnLengthMismatch {
                    column: column.name().to_string(),
                    expected,
                    actual: column.len(),
                }
                .into());
            }
            if columns[..i].iter().any(|c| c.name() == column.name()) {
                return Err(ValidationError::DuplicateColumn {
                    name: column.name().to_string(),
                }
                .into());
            }
        }
        Ok(Self { columns })
    }

    /// Build an empty table with no columns and no rows
    pub fn empty() -> Self {
        Self {
            columns: Vec::new(),
        }
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Columns in declaration order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column names in declaration order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    /// Look up a column by name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }

    /// Whether a column with this name exists
    pub fn contains_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Mutable column lookup, crate-internal
    pub(crate) fn column_mut(&mut self, name: &str) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| c.name() == name)
    }

    /// Replace a column in place, preserving column order
    ///
    /// Used by the engine to swap a transformed column into the output
    /// table. The replacement must match the table's row count.
    pub(crate) fn replace_column(&mut self, column: Column) -> Result<()> {
        if column.len() != self.row_count() {
            return Err(ValidationError::ColumnLengthMismatch {
                column: column.name().to_string(),
                expected: self.row_count(),
                actual: column.len(),
            }
            .into());
        }
        match self.columns.iter_mut().find(|c| c.name() == column.name()) {
            Some(slot) => {
                *slot = column;
                Ok(())
            }
            None => Err(ValidationError::MissingColumns {
                missing: vec![column.name().to_string()],
            }
            .into()),
        }
    }
}
