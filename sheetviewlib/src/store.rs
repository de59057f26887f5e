//! The immutable row store backing one table instance.

use std::collections::HashMap;

use serde::Serialize;

/// One data row: column name → normalized string value.
///
/// Built once at load time and never mutated. Cells the source left
/// absent or null are stored as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Row {
    cells: HashMap<String, String>,
}

impl Row {
    /// Value for a column; `""` for anything the row does not carry.
    pub fn get(&self, column: &str) -> &str {
        self.cells.get(column).map(String::as_str).unwrap_or("")
    }
}

/// Columns and rows loaded for one table instance.
///
/// The ordered column sequence and the row sequence (load order) are
/// fixed at construction. View state lives elsewhere; the store is
/// shared read-only by every render cycle.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RowStore {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl RowStore {
    /// Build a store from parsed columns and raw row mappings.
    ///
    /// Normalizes every row against the known columns: missing values
    /// become `""`, keys outside the header set are dropped.
    pub fn new(columns: Vec<String>, raw_rows: Vec<HashMap<String, String>>) -> Self {
        let rows = raw_rows
            .into_iter()
            .map(|raw| {
                let cells = columns
                    .iter()
                    .map(|c| (c.clone(), raw.get(c).cloned().unwrap_or_default()))
                    .collect();
                Row { cells }
            })
            .collect();
        Self { columns, rows }
    }

    /// Ordered column names, fixed at load time.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows in load order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of loaded rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when no rows were loaded.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// True when `column` is one of this store's columns.
    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }
}
