//! Free-text filtering of rows across every column.

use crate::store::Row;

/// Return the rows matching `query`, in their original order.
///
/// The query is trimmed and lowercased; a row matches when any
/// column's lowercased value contains it as a substring. An empty
/// trimmed query matches everything. Pure: rows are borrowed, never
/// copied or reordered.
pub fn filter_rows<'a>(rows: &'a [Row], columns: &[String], query: &str) -> Vec<&'a Row> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return rows.iter().collect();
    }
    rows.iter()
        .filter(|row| columns.iter().any(|c| row.get(c).to_lowercase().contains(&q)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::RowStore;
    use std::collections::HashMap;

    fn store() -> RowStore {
        let columns = vec!["Name".to_string(), "Score".to_string()];
        let rows = vec![
            HashMap::from([("Name".to_string(), "Ana".to_string()), ("Score".to_string(), "10".to_string())]),
            HashMap::from([("Name".to_string(), "Bo".to_string()), ("Score".to_string(), "2".to_string())]),
        ];
        RowStore::new(columns, rows)
    }

    #[test]
    fn test_empty_query_returns_all_in_order() {
        let s = store();
        let out = filter_rows(s.rows(), s.columns(), "");
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].get("Name"), "Ana");
        assert_eq!(out[1].get("Name"), "Bo");
    }

    #[test]
    fn test_whitespace_query_returns_all() {
        let s = store();
        assert_eq!(filter_rows(s.rows(), s.columns(), "   ").len(), 2);
    }

    #[test]
    fn test_case_insensitive_substring() {
        let s = store();
        let out = filter_rows(s.rows(), s.columns(), "an");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].get("Name"), "Ana");
    }

    #[test]
    fn test_matches_any_column() {
        let s = store();
        let out = filter_rows(s.rows(), s.columns(), "10");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].get("Name"), "Ana");
    }

    #[test]
    fn test_absent_query_returns_nothing() {
        let s = store();
        assert!(filter_rows(s.rows(), s.columns(), "zzz").is_empty());
    }
}
