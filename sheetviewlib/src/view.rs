//! The render cycle: view state in, display model out.
//!
//! `TableView::project` is the whole filter → sort → project → count
//! sequence as one pure function. Event wiring lives in the
//! controller; a host UI only ever paints what this module produces.

use serde::{Deserialize, Serialize};

use crate::filter::filter_rows;
use crate::sort::{sort_rows, SortDirection};
use crate::store::RowStore;

/// Active sort selection: one column, one direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    /// Column the rows are ordered by
    pub column: String,
    /// Current direction
    pub direction: SortDirection,
}

/// Mutable per-instance view state.
///
/// Owned by exactly one table instance, changed only by input events,
/// never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    /// Free-text search query
    pub query: String,
    /// Sort selection; `None` leaves rows in load order
    pub sort: Option<SortSpec>,
}

impl ViewState {
    /// Replace the search query.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Clear the search query.
    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    /// Apply a header activation: the active column toggles direction,
    /// any other column becomes the sort key ascending.
    pub fn activate_column(&mut self, column: &str) {
        match &mut self.sort {
            Some(spec) if spec.column == column => {
                spec.direction = spec.direction.toggled();
            }
            _ => {
                self.sort = Some(SortSpec {
                    column: column.to_string(),
                    direction: SortDirection::Ascending,
                });
            }
        }
    }
}

/// One header cell of the display model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderCell {
    /// Column name
    pub name: String,
    /// Direction marker when this column is the sort key
    pub sort: Option<SortDirection>,
}

/// Display model for one render cycle: header, visible body, counter.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TableView {
    /// Header cells in column order
    pub headers: Vec<HeaderCell>,
    /// Visible rows, each as cells in column order
    pub rows: Vec<Vec<String>>,
    /// Rows visible after filtering
    pub visible: usize,
    /// Rows in the store
    pub total: usize,
    /// Counter text, e.g. "1 de 2 registro(s)"
    pub counter: String,
}

impl TableView {
    /// Run one render cycle over `store` with `state`.
    ///
    /// Idempotent: the same store and state always produce the same
    /// view. The store is read-only throughout.
    pub fn project(store: &RowStore, state: &ViewState) -> Self {
        let mut visible = filter_rows(store.rows(), store.columns(), &state.query);
        if let Some(spec) = &state.sort {
            visible = sort_rows(visible, &spec.column, spec.direction);
        }

        let headers = store
            .columns()
            .iter()
            .map(|name| HeaderCell {
                name: name.clone(),
                sort: state
                    .sort
                    .as_ref()
                    .filter(|spec| &spec.column == name)
                    .map(|spec| spec.direction),
            })
            .collect();

        let rows: Vec<Vec<String>> = visible
            .iter()
            .map(|row| {
                store
                    .columns()
                    .iter()
                    .map(|c| row.get(c).to_string())
                    .collect()
            })
            .collect();

        let (visible, total) = (rows.len(), store.len());
        TableView {
            headers,
            rows,
            visible,
            total,
            counter: format!("{} de {} registro(s)", visible, total),
        }
    }
}
