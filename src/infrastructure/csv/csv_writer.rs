// ============================================================
// CSV WRITER
// ============================================================
// Encode tables back to CSV with a header row

use std::path::Path;

use csv::WriterBuilder;
use tracing::debug;

use crate::domain::error::{AppError, Result};
use crate::domain::table::Table;

/// CSV writer for cleaned tables
///
/// Null cells encode as the empty field, numbers in their shortest
/// decimal form; the csv crate supplies standard quoting for fields
/// containing delimiters, quotes or newlines.
pub struct CsvWriter {
    /// Delimiter character (default: comma)
    delimiter: u8,
}

impl Default for CsvWriter {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl CsvWriter {
    /// Create a new CSV writer with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Encode a table as CSV text
    pub fn write_content(&self, table: &Table) -> Result<String> {
        let mut writer = WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(Vec::new());

        writer
            .write_record(&table.columns)
            .map_err(|e| AppError::Internal(format!("Failed to write CSV header: {}", e)))?;

        for row in &table.rows {
            let fields: Vec<String> = row.iter().map(|cell| cell.to_field()).collect();
            writer
                .write_record(&fields)
                .map_err(|e| AppError::Internal(format!("Failed to write CSV row: {}", e)))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| AppError::Internal(format!("Failed to flush CSV writer: {}", e)))?;
        String::from_utf8(bytes)
            .map_err(|e| AppError::Internal(format!("CSV output was not UTF-8: {}", e)))
    }

    /// Write a table to a CSV file
    pub fn write_file(&self, table: &Table, path: &Path) -> Result<()> {
        let content = self.write_content(table)?;
        std::fs::write(path, content)
            .map_err(|e| AppError::IoError(format!("Failed to write file: {}", e)))?;

        debug!(path = %path.display(), rows = table.len(), "Wrote cleaned CSV");
        Ok(())
    }
}
