//! Ordering of a visible row sequence by one column.

use serde::{Deserialize, Serialize};

use crate::store::Row;
use crate::value::compare_values;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    /// Smallest/earliest/A first
    #[default]
    Ascending,
    /// Largest/latest/Z first
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Sort a borrowed row sequence by `column` using value coercion.
///
/// Stable: rows with equal keys keep their relative input order. The
/// canonical store is never reordered — only this borrowed view is.
pub fn sort_rows<'a>(
    mut rows: Vec<&'a Row>,
    column: &str,
    direction: SortDirection,
) -> Vec<&'a Row> {
    rows.sort_by(|a, b| {
        let ord = compare_values(a.get(column), b.get(column));
        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
    rows
}
