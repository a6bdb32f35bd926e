//! Tabular data types.

use serde::{Deserialize, Serialize};

/// Extracted tabular data: ordered rows of string cells.
///
/// Rectangularity is only as good as the source extractor guarantees; it is
/// not enforced here. Header/data row semantics are out of scope.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TableData {
    /// Rows of cells; a missing source cell is an empty string
    pub rows: Vec<Vec<String>>,
}

impl TableData {
    /// Create an empty table.
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Create a table from prepared rows.
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns (based on the first row).
    pub fn column_count(&self) -> usize {
        self.rows.first().map(|r| r.len()).unwrap_or(0)
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_new() {
        let table = TableData::new();
        assert!(table.is_empty());
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column_count(), 0);
    }

    #[test]
    fn test_table_from_rows() {
        let table = TableData::from_rows(vec![
            vec!["Name".to_string(), "Age".to_string()],
            vec!["Alice".to_string(), "30".to_string()],
        ]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 2);
    }
}
