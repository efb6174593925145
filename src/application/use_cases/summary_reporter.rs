// ============================================================
// SUMMARY REPORTER USE CASE
// ============================================================
// Read-only aggregation over a cleaned table

use crate::domain::table::{Cell, SummaryReport, Table};

const DEPT_COLUMN: &str = "Dept";
const CGPA_COLUMN: &str = "CGPA";
const PLACED_COLUMN: &str = "Placed";

/// Summary reporter for cleaned placement tables
///
/// Pure aggregation, no mutation: row count, distinct departments, mean
/// CGPA for display, and placement category frequencies. Column-dependent
/// statistics are omitted when the column is absent.
pub struct SummaryReporter;

impl SummaryReporter {
    /// Create a new summary reporter
    pub fn new() -> Self {
        Self
    }

    /// Compute aggregates over a table
    pub fn report(&self, table: &Table) -> SummaryReport {
        SummaryReport {
            total_records: table.len(),
            department_count: table
                .column_index(DEPT_COLUMN)
                .map(|index| Self::distinct_text_values(table, index)),
            average_cgpa: table
                .column_index(CGPA_COLUMN)
                .and_then(|index| Self::mean_of_numbers(table, index)),
            placement_counts: table
                .column_index(PLACED_COLUMN)
                .map(|index| Self::category_counts(table, index)),
        }
    }

    /// Distinct text values in a column (nulls not counted)
    fn distinct_text_values(table: &Table, index: usize) -> usize {
        let mut seen = std::collections::HashSet::new();
        for cell in table.column_cells(index) {
            if let Cell::Text(value) = cell {
                seen.insert(value.as_str());
            }
        }
        seen.len()
    }

    /// Mean of the numeric cells in a column, rounded to 2 decimal places
    ///
    /// None when the column has no numeric values: an undefined mean is
    /// reported as absent rather than as a NaN sentinel.
    fn mean_of_numbers(table: &Table, index: usize) -> Option<f64> {
        let values: Vec<f64> = table.column_cells(index).filter_map(Cell::as_number).collect();
        if values.is_empty() {
            return None;
        }

        let mean = values.iter().sum::<f64>() / values.len() as f64;
        Some((mean * 100.0).round() / 100.0)
    }

    /// Frequency of text categories, most common first; ties keep first
    /// appearance order
    fn category_counts(table: &Table, index: usize) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = Vec::new();

        for cell in table.column_cells(index) {
            if let Cell::Text(value) = cell {
                match counts.iter_mut().find(|(category, _)| category == value) {
                    Some((_, count)) => *count += 1,
                    None => counts.push((value.clone(), 1)),
                }
            }
        }

        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placement_table() -> Table {
        let mut table = Table::new(
            ["Name", "Dept", "CGPA", "Placed"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        );
        table.push_row(vec![
            Cell::text("Ajit"),
            Cell::text("CSE"),
            Cell::Number(8.5),
            Cell::text("Yes"),
        ]);
        table.push_row(vec![
            Cell::text("Riya"),
            Cell::text("IT"),
            Cell::Number(7.2),
            Cell::text("No"),
        ]);
        table.push_row(vec![
            Cell::text("Sneha"),
            Cell::text("Unknown"),
            Cell::Number(9.1),
            Cell::text("Yes"),
        ]);
        table.push_row(vec![
            Cell::text("Mohit"),
            Cell::text("CSE"),
            Cell::Number(9.0),
            Cell::Null,
        ]);
        table
    }

    #[test]
    fn test_report_over_full_table() {
        let report = SummaryReporter::new().report(&placement_table());

        assert_eq!(report.total_records, 4);
        assert_eq!(report.department_count, Some(3));
        // (8.5 + 7.2 + 9.1 + 9.0) / 4 = 8.45
        assert_eq!(report.average_cgpa, Some(8.45));
        // Null Placed cells are not counted as a category
        assert_eq!(
            report.placement_counts,
            Some(vec![("Yes".to_string(), 2), ("No".to_string(), 1)])
        );
    }

    #[test]
    fn test_report_with_columns_absent() {
        let table = Table::new(vec!["Name".to_string()]);
        let report = SummaryReporter::new().report(&table);

        assert_eq!(report.total_records, 0);
        assert_eq!(report.department_count, None);
        assert_eq!(report.average_cgpa, None);
        assert_eq!(report.placement_counts, None);
    }

    #[test]
    fn test_average_is_none_when_no_values_parsed() {
        let mut table = Table::new(vec!["CGPA".to_string()]);
        table.push_row(vec![Cell::Null]);
        table.push_row(vec![Cell::Null]);

        let report = SummaryReporter::new().report(&table);
        assert_eq!(report.average_cgpa, None);
    }

    #[test]
    fn test_average_rounds_to_two_decimals() {
        let mut table = Table::new(vec!["CGPA".to_string()]);
        table.push_row(vec![Cell::Number(8.5)]);
        table.push_row(vec![Cell::Number(7.2)]);
        table.push_row(vec![Cell::Number(9.1)]);

        let report = SummaryReporter::new().report(&table);
        // 24.8 / 3 = 8.2666... -> 8.27
        assert_eq!(report.average_cgpa, Some(8.27));
    }

    #[test]
    fn test_category_counts_tie_keeps_first_appearance() {
        let mut table = Table::new(vec!["Placed".to_string()]);
        table.push_row(vec![Cell::text("No")]);
        table.push_row(vec![Cell::text("Yes")]);
        table.push_row(vec![Cell::text("No")]);
        table.push_row(vec![Cell::text("Yes")]);

        let report = SummaryReporter::new().report(&table);
        assert_eq!(
            report.placement_counts,
            Some(vec![("No".to_string(), 2), ("Yes".to_string(), 2)])
        );
    }
}
