// ============================================================
// SUMMARY REPORT
// ============================================================
// Aggregate statistics over a cleaned table

use serde::{Deserialize, Serialize};

/// Aggregates computed from a cleaned table
///
/// Column-dependent fields are `None` when the column is absent, or, for
/// the CGPA average, when the column holds no numeric values at all (an
/// undefined mean is reported as missing, never as a NaN sentinel).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    /// Total record count after cleaning
    pub total_records: usize,

    /// Distinct departments, when the Dept column exists
    pub department_count: Option<usize>,

    /// Mean CGPA rounded to 2 decimal places, when defined
    pub average_cgpa: Option<f64>,

    /// Placement category frequencies, most common first
    pub placement_counts: Option<Vec<(String, usize)>>,
}

impl SummaryReport {
    /// Get human-readable summary
    pub fn summary(&self) -> String {
        let departments = match self.department_count {
            Some(count) => count.to_string(),
            None => "n/a".to_string(),
        };
        let average_cgpa = match self.average_cgpa {
            Some(mean) => format!("{:.2}", mean),
            None => "n/a".to_string(),
        };
        let placed = match &self.placement_counts {
            Some(counts) => counts
                .iter()
                .map(|(category, count)| format!("{}={}", category, count))
                .collect::<Vec<_>>()
                .join(", "),
            None => "n/a".to_string(),
        };

        format!(
            "Summary Report ({} records):\n\
             - Departments: {}\n\
             - Average CGPA: {}\n\
             - Placed: {}",
            self.total_records, departments, average_cgpa, placed
        )
    }
}
