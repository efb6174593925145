// ============================================================
// SAMPLE DATASET
// ============================================================
// Deliberately messy demo rows for trying the cleaner end to end

use crate::domain::table::{Cell, Table};

/// Build the bundled sample placement dataset
///
/// Every flaw the pipeline handles is represented: stray whitespace,
/// inconsistent casing, an address without an @, a short phone number,
/// a non-numeric CGPA, and missing Dept/Placed values.
pub fn sample_dataset() -> Table {
    let mut table = Table::new(
        ["Name", "Email", "Phone", "Dept", "CGPA", "Placed"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    );

    table.push_row(vec![
        Cell::text("ajit"),
        Cell::text("ajit@GMAIL.COM"),
        Cell::text("+91 98765-43210"),
        Cell::text("CSE"),
        Cell::text("8.5"),
        Cell::text("Yes"),
    ]);
    table.push_row(vec![
        Cell::text("RIYA "),
        Cell::text("riya.gmail.com"),
        Cell::text("99887766"),
        Cell::text("IT"),
        Cell::text("nine"),
        Cell::Null,
    ]);
    table.push_row(vec![
        Cell::text("sneha"),
        Cell::text(" sneha@mail.com"),
        Cell::text(" 1234567890 "),
        Cell::Null,
        Cell::text("7.2"),
        Cell::text("No"),
    ]);
    table.push_row(vec![
        Cell::text("Ajit"),
        Cell::text("AJIT@GMAIL.COM"),
        Cell::text("9876543210"),
        Cell::text("CSE"),
        Cell::Null,
        Cell::text("Yes"),
    ]);
    table.push_row(vec![
        Cell::text("Mohit "),
        Cell::text("mohit@mail"),
        Cell::text("not phone"),
        Cell::text("ECE"),
        Cell::text("9.1"),
        Cell::text("No"),
    ]);

    table
}
