// ============================================================
// TABLE TYPE
// ============================================================
// Ordered rows of named, ordered columns

use serde::{Deserialize, Serialize};

use super::Cell;

/// An in-memory table: the unit of input and output for cleaning
///
/// Columns are named and ordered; every row holds exactly one cell per
/// column. The cleaning pipeline takes ownership of its input and returns
/// a new table, so a caller's copy is never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Column names, in order
    pub columns: Vec<String>,

    /// Rows, each exactly `columns.len()` cells wide
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Create an empty table with the given column names
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row
    ///
    /// The caller is responsible for matching the column count; the CSV
    /// reader enforces this at the ingestion boundary.
    pub fn push_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by exact name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cells of one column, top to bottom
    pub fn column_cells(&self, index: usize) -> impl Iterator<Item = &Cell> {
        self.rows.iter().map(move |row| &row[index])
    }
}
