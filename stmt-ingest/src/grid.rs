//! Untyped grid the cleaner operates on, before rows become `StatementRow`s.

use chrono::NaiveDate;

/// One raw cell. Whitespace-only text is normalized to `Empty` at
/// construction so populated-cell counts match what the exports mean.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
    Date(NaiveDate),
}

impl Cell {
    pub fn text(s: impl AsRef<str>) -> Cell {
        let t = s.as_ref().trim();
        if t.is_empty() {
            Cell::Empty
        } else {
            Cell::Text(t.to_string())
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Cell::Date(d) => Some(*d),
            _ => None,
        }
    }
}

/// Header row plus data rows, all cells untyped. Rows are rectangular.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> RawTable {
        RawTable { headers, rows }
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Populated cells in column `col` across all rows.
    pub fn column_populated(&self, col: usize) -> usize {
        self.rows
            .iter()
            .filter(|r| r.get(col).is_some_and(|c| !c.is_empty()))
            .count()
    }

    /// Populated cells in one row.
    pub fn row_populated(row: &[Cell]) -> usize {
        row.iter().filter(|c| !c.is_empty()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_text_is_empty() {
        assert!(Cell::text("   ").is_empty());
        assert_eq!(Cell::text(" x "), Cell::Text("x".to_string()));
    }

    #[test]
    fn test_populated_counts() {
        let t = RawTable::new(
            vec!["a".into(), "b".into()],
            vec![
                vec![Cell::text("1"), Cell::Empty],
                vec![Cell::text("2"), Cell::text("y")],
            ],
        );
        assert_eq!(t.column_populated(0), 2);
        assert_eq!(t.column_populated(1), 1);
        assert_eq!(RawTable::row_populated(&t.rows[0]), 1);
    }
}
