// ============================================================
// RECORD CLEANER USE CASE
// ============================================================
// Column-wise normalization pipeline for placement records

use std::collections::HashSet;
use std::path::Path;
use std::time::Instant;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::application::use_cases::summary_reporter::SummaryReporter;
use crate::domain::error::{AppError, Result};
use crate::domain::table::{Cell, CleaningConfig, SummaryReport, Table};
use crate::infrastructure::csv::CsvReader;

/// Email shape check: text before an @, text after it, a dot, a tail.
/// Anchored at the start only, so trailing junk after a valid prefix is
/// accepted while a dot-less domain is not. A syntactic sanity check, not
/// RFC validation.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+").unwrap());

const NAME_COLUMN: &str = "Name";
const EMAIL_COLUMN: &str = "Email";
const PHONE_COLUMN: &str = "Phone";
const DEPT_COLUMN: &str = "Dept";
const CGPA_COLUMN: &str = "CGPA";

/// Record cleaning use case
///
/// A pure, synchronous transform over an in-memory table. Malformed cell
/// content never raises; bad values resolve to null, a default label, or
/// an imputed mean. Structural problems (an unreadable file, inconsistent
/// row widths) are the ingestion layer's to report.
pub struct RecordCleaner {
    config: CleaningConfig,
}

/// Result of cleaning one dataset end to end
#[derive(Debug, Clone)]
pub struct CleanedDataset {
    /// The cleaned table
    pub table: Table,

    /// Aggregates over the cleaned table
    pub summary: SummaryReport,

    /// Rows in the raw input
    pub raw_row_count: usize,

    /// Duplicate rows removed
    pub dropped_rows: usize,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}

impl RecordCleaner {
    /// Create a new record cleaner
    pub fn new(config: CleaningConfig) -> Self {
        Self { config }
    }

    /// Create with default configuration
    pub fn default_config() -> Self {
        Self::new(CleaningConfig::default())
    }

    /// Clean a table
    ///
    /// Steps run in a fixed order, each idempotent given the prior step's
    /// output: header trim, text trim, Name title-case, Email validation,
    /// Phone digit filter, CGPA coercion and mean imputation, Dept default,
    /// duplicate removal. Columns are optional; a step is skipped when its
    /// column is absent. Unrecognized columns only get the text trim.
    pub fn clean(&self, mut table: Table) -> Table {
        Self::trim_headers(&mut table);
        Self::trim_text_cells(&mut table);

        if let Some(index) = table.column_index(NAME_COLUMN) {
            Self::normalize_names(&mut table, index);
        }
        if let Some(index) = table.column_index(EMAIL_COLUMN) {
            Self::normalize_emails(&mut table, index);
        }
        if let Some(index) = table.column_index(PHONE_COLUMN) {
            self.normalize_phones(&mut table, index);
        }
        if let Some(index) = table.column_index(CGPA_COLUMN) {
            Self::normalize_cgpa(&mut table, index);
        }
        if let Some(index) = table.column_index(DEPT_COLUMN) {
            self.fill_missing_dept(&mut table, index);
        }

        Self::dedup_rows(&mut table);
        table
    }

    /// Clean a CSV file and report on the result
    pub fn clean_csv_file(&self, path: &Path) -> Result<CleanedDataset> {
        let start = Instant::now();

        self.config
            .validate()
            .map_err(|e| AppError::ValidationError(format!("Invalid cleaning config: {}", e)))?;

        let raw = CsvReader::read_file_auto_detect(path)?;
        self.finish(raw, start)
    }

    /// Clean CSV content from a string (for testing or in-memory data)
    pub fn clean_csv_content(&self, content: &str) -> Result<CleanedDataset> {
        let start = Instant::now();

        self.config
            .validate()
            .map_err(|e| AppError::ValidationError(format!("Invalid cleaning config: {}", e)))?;

        let delimiter = CsvReader::detect_delimiter(content);
        let raw = CsvReader::new().with_delimiter(delimiter).read_content(content)?;
        self.finish(raw, start)
    }

    fn finish(&self, raw: Table, start: Instant) -> Result<CleanedDataset> {
        let raw_row_count = raw.len();
        let table = self.clean(raw);
        let dropped_rows = raw_row_count - table.len();
        let summary = SummaryReporter::new().report(&table);

        debug!(
            raw_rows = raw_row_count,
            cleaned_rows = table.len(),
            dropped_rows,
            "Cleaned dataset"
        );

        Ok(CleanedDataset {
            table,
            summary,
            raw_row_count,
            dropped_rows,
            processing_time_ms: start.elapsed().as_millis() as u64,
        })
    }

    /// Strip whitespace from every column name
    fn trim_headers(table: &mut Table) {
        for column in &mut table.columns {
            if column.trim().len() != column.len() {
                *column = column.trim().to_string();
            }
        }
    }

    /// Strip leading/trailing whitespace from every text cell
    fn trim_text_cells(table: &mut Table) {
        for row in &mut table.rows {
            for cell in row.iter_mut() {
                if let Cell::Text(value) = cell {
                    if value.trim().len() != value.len() {
                        *value = value.trim().to_string();
                    }
                }
            }
        }
    }

    /// Title-case every name cell
    fn normalize_names(table: &mut Table, index: usize) {
        for row in &mut table.rows {
            if let Cell::Text(value) = &mut row[index] {
                *value = Self::title_case(value);
            }
        }
    }

    /// Lowercase every email cell, then null out values that fail the
    /// shape check
    fn normalize_emails(table: &mut Table, index: usize) {
        for row in &mut table.rows {
            row[index] = match std::mem::replace(&mut row[index], Cell::Null) {
                Cell::Text(value) => {
                    let lowered = value.to_lowercase();
                    if EMAIL_PATTERN.is_match(&lowered) {
                        Cell::Text(lowered)
                    } else {
                        Cell::Null
                    }
                }
                // A numeric or missing cell is never a valid address
                _ => Cell::Null,
            };
        }
    }

    /// Reduce every phone cell to its digits, then null out short values
    ///
    /// Validation is purely digit-count: punctuation and country prefixes
    /// are stripped, and whatever digits remain either meet the threshold
    /// or the cell becomes null.
    fn normalize_phones(&self, table: &mut Table, index: usize) {
        for row in &mut table.rows {
            let rendered = match &row[index] {
                Cell::Text(value) => value.clone(),
                Cell::Number(value) => Cell::render_number(*value),
                Cell::Null => {
                    continue;
                }
            };

            let digits: String = rendered.chars().filter(|c| c.is_ascii_digit()).collect();
            row[index] = if digits.len() < self.config.min_phone_digits {
                Cell::Null
            } else {
                Cell::Text(digits)
            };
        }
    }

    /// Coerce CGPA cells to numbers, then impute nulls with the column mean
    ///
    /// When nothing parses the mean is undefined; the cells stay null and
    /// the summary reports the absence of an average. No NaN is stored.
    fn normalize_cgpa(table: &mut Table, index: usize) {
        for row in &mut table.rows {
            row[index] = match std::mem::replace(&mut row[index], Cell::Null) {
                Cell::Number(value) if value.is_finite() => Cell::Number(value),
                Cell::Text(value) => match value.trim().parse::<f64>() {
                    Ok(parsed) if parsed.is_finite() => Cell::Number(parsed),
                    _ => Cell::Null,
                },
                _ => Cell::Null,
            };
        }

        let parsed: Vec<f64> = table.column_cells(index).filter_map(Cell::as_number).collect();
        if parsed.is_empty() {
            return;
        }
        let mean = parsed.iter().sum::<f64>() / parsed.len() as f64;

        for row in &mut table.rows {
            if row[index].is_null() {
                row[index] = Cell::Number(mean);
            }
        }
    }

    /// Replace missing department cells with the configured label
    fn fill_missing_dept(&self, table: &mut Table, index: usize) {
        for row in &mut table.rows {
            if row[index].is_null() {
                row[index] = Cell::text(self.config.missing_dept_label.clone());
            }
        }
    }

    /// Drop rows that duplicate an earlier row, keeping the first
    /// occurrence and the relative order of survivors
    fn dedup_rows(table: &mut Table) {
        let mut seen = HashSet::with_capacity(table.len());
        table.rows.retain(|row| seen.insert(Self::row_fingerprint(row)));
    }

    /// Exact-equality key for a full row
    ///
    /// Numbers are keyed by their IEEE-754 bits so the comparison is
    /// exact, and nulls compare equal to each other.
    fn row_fingerprint(row: &[Cell]) -> String {
        let mut key = String::new();
        for cell in row {
            match cell {
                Cell::Text(value) => {
                    key.push('t');
                    key.push_str(value);
                }
                Cell::Number(value) => {
                    key.push('n');
                    key.push_str(&value.to_bits().to_string());
                }
                Cell::Null => key.push('-'),
            }
            key.push('\u{1f}');
        }
        key
    }

    /// Uppercase the first letter of each word, lowercase the rest
    ///
    /// A word boundary is any non-alphabetic character, so hyphenated and
    /// apostrophized names capitalize each segment.
    fn title_case(value: &str) -> String {
        let mut result = String::with_capacity(value.len());
        let mut at_word_start = true;

        for ch in value.chars() {
            if ch.is_alphabetic() {
                if at_word_start {
                    result.extend(ch.to_uppercase());
                } else {
                    result.extend(ch.to_lowercase());
                }
                at_word_start = false;
            } else {
                result.push(ch);
                at_word_start = true;
            }
        }

        result
    }
}

impl Default for RecordCleaner {
    fn default() -> Self {
        Self::default_config()
    }
}
