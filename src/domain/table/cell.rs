// ============================================================
// CELL VALUE
// ============================================================
// Tagged union for a single table cell

use serde::{Deserialize, Serialize};

/// A single value at a (row, column) position
///
/// Raw input is heterogeneous: a column may hold a mix of text, numbers
/// and missing values before cleaning. Modeling the cell as a tagged union
/// lets the cleaning steps pattern-match instead of inspecting types at
/// runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    /// Free text content
    Text(String),

    /// Numeric content (parsed or imputed)
    Number(f64),

    /// Missing or invalidated value
    Null,
}

impl Cell {
    /// Build a text cell from any string-like value
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    /// Whether this cell is missing
    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }

    /// Borrow the text content, if any
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Numeric content, if any
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Render this cell as a CSV field
    ///
    /// Null encodes as the empty field; whole-valued numbers print without
    /// a trailing `.0` so a re-parse sees the same digits.
    pub fn to_field(&self) -> String {
        match self {
            Cell::Text(value) => value.clone(),
            Cell::Number(value) => Self::render_number(*value),
            Cell::Null => String::new(),
        }
    }

    /// Shortest decimal rendering of a numeric cell
    pub fn render_number(value: f64) -> String {
        if value.fract() == 0.0 && value.abs() < 1e15 {
            format!("{}", value as i64)
        } else {
            format!("{}", value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_field_renders_whole_numbers_without_fraction() {
        assert_eq!(Cell::Number(9876543210.0).to_field(), "9876543210");
        assert_eq!(Cell::Number(8.5).to_field(), "8.5");
    }

    #[test]
    fn test_null_renders_as_empty_field() {
        assert_eq!(Cell::Null.to_field(), "");
        assert!(Cell::Null.is_null());
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Cell::text("CSE").as_text(), Some("CSE"));
        assert_eq!(Cell::Number(7.2).as_number(), Some(7.2));
        assert_eq!(Cell::Null.as_text(), None);
        assert_eq!(Cell::text("7.2").as_number(), None);
    }
}
