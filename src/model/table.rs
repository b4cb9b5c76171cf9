//! Tabular query results.
//!
//! Every metric returns a [`Table`]: named, ordered columns, ordered rows, and an optional
//! index column. Tables are materialized per call and serialize to JSON as an array of
//! records (`[{"column": value, ...}, ...]`), which is the shape the dashboard consumes.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{ser::SerializeMap, ser::SerializeSeq, Serialize, Serializer};

/// A single value in a [`Table`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Null,
    Integer(i64),
    Float(f64),
    Text(String),
    Date(NaiveDate),
    Timestamp(NaiveDateTime),
}

impl Cell {
    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Cell::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Float(value) => Some(*value),
            Cell::Integer(value) => Some(*value as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Cell::Date(value) => Some(*value),
            Cell::Timestamp(value) => Some(value.date()),
            _ => None,
        }
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Integer(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Float(value)
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<NaiveDate> for Cell {
    fn from(value: NaiveDate) -> Self {
        Cell::Date(value)
    }
}

impl From<NaiveDateTime> for Cell {
    fn from(value: NaiveDateTime) -> Self {
        Cell::Timestamp(value)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map_or(Cell::Null, Into::into)
    }
}

/// A typed query row that can be laid out as a table row.
///
/// `COLUMNS` names the cells returned by [`TableRow::into_cells`], in order.
pub trait TableRow {
    const COLUMNS: &'static [&'static str];

    /// Column used as the row index, if any.
    const INDEX: Option<&'static str> = None;

    fn into_cells(self) -> Vec<Cell>;
}

/// Result set of a metric query.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<String>,
    index: Option<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Creates an empty table with the provided columns.
    pub fn new<S: Into<String>>(columns: impl IntoIterator<Item = S>) -> Self {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            index: None,
            rows: Vec::new(),
        }
    }

    /// Builds a table from typed rows, taking the columns and index from [`TableRow`].
    pub fn from_rows<R: TableRow>(rows: impl IntoIterator<Item = R>) -> Self {
        let mut table = Self::new(R::COLUMNS.iter().copied());
        table.index = R::INDEX.map(str::to_string);
        table.rows = rows.into_iter().map(TableRow::into_cells).collect();
        table
    }

    /// Removes the first row, if there is one.
    pub fn drop_first_row(mut self) -> Self {
        if !self.rows.is_empty() {
            self.rows.remove(0);
        }
        self
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn index(&self) -> Option<&str> {
        self.index.as_deref()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn column_position(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    /// Returns the cell at `row` in the named column.
    pub fn get(&self, row: usize, column: &str) -> Option<&Cell> {
        let position = self.column_position(column)?;
        self.rows.get(row)?.get(position)
    }

    /// Returns every cell of the named column, in row order.
    pub fn column(&self, column: &str) -> Option<Vec<&Cell>> {
        let position = self.column_position(column)?;
        Some(self.rows.iter().filter_map(|row| row.get(position)).collect())
    }
}

struct Record<'a> {
    columns: &'a [String],
    cells: &'a [Cell],
}

impl Serialize for Record<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (column, cell) in self.columns.iter().zip(self.cells) {
            map.serialize_entry(column, cell)?;
        }
        map.end()
    }
}

impl Serialize for Table {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.rows.len()))?;
        for row in &self.rows {
            seq.serialize_element(&Record {
                columns: &self.columns,
                cells: row,
            })?;
        }
        seq.end()
    }
}
