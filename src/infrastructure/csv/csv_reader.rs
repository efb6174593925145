// ============================================================
// CSV READER
// ============================================================
// Parse CSV files into tables with encoding detection and error handling

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::domain::error::{AppError, Result};
use crate::domain::table::{Cell, Table};

/// CSV reader with delimiter and encoding detection
///
/// Produces raw tables: non-empty fields enter as text, empty fields as
/// null. No trimming or normalization happens here; that is the cleaning
/// pipeline's job. Structural problems (no header row, rows of uneven
/// width, unreadable bytes) are surfaced as errors, never repaired.
pub struct CsvReader {
    /// Delimiter character (default: comma)
    delimiter: u8,
}

impl Default for CsvReader {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl CsvReader {
    /// Create a new CSV reader with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Parse a CSV file into a table
    pub fn read_file(&self, path: &Path) -> Result<Table> {
        let content = Self::read_with_encoding_detection(path)?;
        self.read_content(&content)
    }

    /// Parse CSV content from a string
    pub fn read_content(&self, content: &str) -> Result<Table> {
        if content.trim().is_empty() {
            return Err(AppError::ParseError(
                "CSV content is empty, expected a header row".to_string(),
            ));
        }

        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .from_reader(content.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| AppError::ParseError(format!("Failed to read CSV headers: {}", e)))?;
        let mut table = Table::new(headers.iter().map(str::to_string).collect());

        for (index, result) in reader.records().enumerate() {
            let record = result.map_err(|e| {
                AppError::ParseError(format!("Failed to parse CSV row {}: {}", index + 1, e))
            })?;

            let row = record
                .iter()
                .map(|field| {
                    if field.is_empty() {
                        Cell::Null
                    } else {
                        Cell::text(field)
                    }
                })
                .collect();
            table.push_row(row);
        }

        Ok(table)
    }

    /// Read file bytes, decoding UTF-8 with a Windows-1252 fallback
    fn read_with_encoding_detection(path: &Path) -> Result<String> {
        let bytes = std::fs::read(path)
            .map_err(|e| AppError::IoError(format!("Failed to read file: {}", e)))?;

        match String::from_utf8(bytes) {
            Ok(content) => Ok(content),
            Err(err) => {
                let (content, _, _) = encoding_rs::WINDOWS_1252.decode(err.as_bytes());
                Ok(content.into_owned())
            }
        }
    }

    /// Detect delimiter from content (comma, semicolon, tab, pipe)
    ///
    /// Scores each candidate by its per-line frequency and consistency
    /// over a sample of lines; the most consistent frequent delimiter
    /// wins, defaulting to comma.
    pub fn detect_delimiter(content: &str) -> u8 {
        let candidates = [b',', b';', b'\t', b'|'];
        let sample_lines: Vec<_> = content.lines().take(10).collect();

        let mut best_delimiter = b',';
        let mut best_score = 0.0f32;

        for &delimiter in &candidates {
            if sample_lines.is_empty() {
                continue;
            }

            let field_counts: Vec<usize> = sample_lines
                .iter()
                .map(|line| line.chars().filter(|&c| c == delimiter as char).count())
                .collect();

            let avg = field_counts.iter().sum::<usize>() as f32 / field_counts.len() as f32;
            let variance = field_counts
                .iter()
                .map(|&x| (x as f32 - avg).powi(2))
                .sum::<f32>()
                / field_counts.len() as f32;

            // Consistency (low deviation) beats raw frequency
            let score = avg / (1.0 + variance.sqrt());

            if score > best_score {
                best_score = score;
                best_delimiter = delimiter;
            }
        }

        best_delimiter
    }

    /// Parse a CSV file with automatic delimiter detection
    pub fn read_file_auto_detect(path: &Path) -> Result<Table> {
        let content = Self::read_with_encoding_detection(path)?;
        let delimiter = Self::detect_delimiter(&content);
        debug!(delimiter = %(delimiter as char), "Detected CSV delimiter");

        Self::new().with_delimiter(delimiter).read_content(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_simple_csv() {
        let content = "Name,Dept,CGPA\nAjit,CSE,8.5\nRiya,IT,7.2";
        let table = CsvReader::new().read_content(content).unwrap();

        assert_eq!(table.columns, vec!["Name", "Dept", "CGPA"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[0][0], Cell::text("Ajit"));
        // Values enter as raw text; coercion is the cleaner's job
        assert_eq!(table.rows[0][2], Cell::text("8.5"));
    }

    #[test]
    fn test_empty_fields_become_null() {
        let content = "Name,Dept\nSneha,\n,CSE";
        let table = CsvReader::new().read_content(content).unwrap();

        assert_eq!(table.rows[0][1], Cell::Null);
        assert_eq!(table.rows[1][0], Cell::Null);
    }

    #[test]
    fn test_no_trimming_on_read() {
        let content = "Name,Email\nRIYA , sneha@mail.com";
        let table = CsvReader::new().read_content(content).unwrap();

        assert_eq!(table.rows[0][0], Cell::text("RIYA "));
        assert_eq!(table.rows[0][1], Cell::text(" sneha@mail.com"));
    }

    #[test]
    fn test_uneven_row_width_is_an_error() {
        let content = "Name,Dept\nAjit,CSE,extra";
        let result = CsvReader::new().read_content(content);

        assert!(matches!(result, Err(AppError::ParseError(_))));
    }

    #[test]
    fn test_empty_content_is_an_error() {
        assert!(matches!(
            CsvReader::new().read_content("   \n  "),
            Err(AppError::ParseError(_))
        ));
    }

    #[test]
    fn test_detect_delimiter() {
        assert_eq!(CsvReader::detect_delimiter("a,b,c\nd,e,f"), b',');
        assert_eq!(CsvReader::detect_delimiter("a;b;c\nd;e;f"), b';');
        assert_eq!(CsvReader::detect_delimiter("a\tb\nc\td"), b'\t');
    }

    #[test]
    fn test_read_file_with_non_utf8_bytes() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        // "José" in Windows-1252: 0xE9 is é
        file.write_all(b"Name,Dept\nJos\xE9,CSE").unwrap();

        let table = CsvReader::read_file_auto_detect(file.path()).unwrap();
        assert_eq!(table.rows[0][0], Cell::text("Jos\u{e9}"));
    }

    #[test]
    fn test_quoted_fields_keep_embedded_delimiters() {
        let content = "Name,Remark\nAjit,\"good, very good\"";
        let table = CsvReader::new().read_content(content).unwrap();

        assert_eq!(table.rows[0][1], Cell::text("good, very good"));
    }
}
