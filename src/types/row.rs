use std::collections::HashMap;

use crate::dialect::Dialect;
use crate::error::{RdsError, Result};

use super::{Field, Value};

/// Name and declared SQL type of a result column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnMetadata {
    pub name: String,
    pub type_name: String,
}

impl ColumnMetadata {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

/// Unconverted result of a statement as returned by a transport.
#[derive(Debug, Clone, Default)]
pub struct RawQueryResult {
    /// Column metadata in order
    pub columns: Vec<ColumnMetadata>,
    /// Rows, where each row is a vector of fields in column order
    pub rows: Vec<Vec<Field>>,
    /// Rows affected by a DML statement
    pub records_updated: i64,
}

impl RawQueryResult {
    pub fn new(columns: Vec<ColumnMetadata>, rows: Vec<Vec<Field>>) -> Self {
        Self {
            columns,
            rows,
            records_updated: 0,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

/// A single converted row, accessed by column name.
///
/// Values are keyed by column name only: when a result has two columns with
/// the same name (`SELECT a.id, b.id`), the row keeps the later one. Alias
/// such columns to read both.
#[derive(Debug, Clone)]
pub struct Row {
    values: HashMap<String, Value>,
}

impl Row {
    pub(crate) fn new(columns: &[ColumnMetadata], values: Vec<Value>) -> Self {
        let values = columns
            .iter()
            .zip(values)
            .map(|(col, val)| (col.name.clone(), val))
            .collect();
        Self { values }
    }

    /// Gets a value by column name.
    pub fn get(&self, column: &str) -> Result<&Value> {
        self.values
            .get(column)
            .ok_or_else(|| RdsError::ColumnNotFound(column.to_string()))
    }

    /// Returns all column names in this row.
    pub fn columns(&self) -> Vec<&str> {
        self.values.keys().map(|s| s.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Result of a statement, containing zero or more converted rows.
#[derive(Debug)]
pub struct QueryResult {
    columns: Vec<ColumnMetadata>,
    rows: Vec<Row>,
    records_updated: i64,
}

impl QueryResult {
    /// Converts every field of `raw` with the dialect's converter for its
    /// column type. Fails as a whole on the first field that cannot be
    /// converted or on a row whose length differs from the column count.
    pub fn from_raw(raw: RawQueryResult, dialect: &dyn Dialect) -> Result<Self> {
        let converters: Vec<_> = raw
            .columns
            .iter()
            .map(|c| dialect.field_converter(&c.type_name))
            .collect();

        let rows = raw
            .rows
            .iter()
            .map(|fields| {
                if fields.len() != raw.columns.len() {
                    return Err(RdsError::FieldCountMismatch {
                        expected: raw.columns.len(),
                        actual: fields.len(),
                    });
                }
                let values = converters
                    .iter()
                    .zip(fields)
                    .map(|(converter, field)| converter.convert(field))
                    .collect::<Result<Vec<_>>>()?;
                Ok(Row::new(&raw.columns, values))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            columns: raw.columns,
            rows,
            records_updated: raw.records_updated,
        })
    }

    /// Extracts a single row from the result.
    /// Returns an error if the result contains zero or more than one row.
    pub fn single_row(self) -> Result<Row> {
        let actual = self.rows.len();
        match <[Row; 1]>::try_from(self.rows) {
            Ok([row]) => Ok(row),
            Err(_) => Err(RdsError::UnexpectedRowCount {
                expected: 1,
                actual,
            }),
        }
    }

    pub fn rows(self) -> Vec<Row> {
        self.rows
    }

    pub fn rows_ref(&self) -> &[Row] {
        &self.rows
    }

    pub fn columns(&self) -> &[ColumnMetadata] {
        &self.columns
    }

    pub fn records_updated(&self) -> i64 {
        self.records_updated
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
