//! # sheetviewlib
//!
//! The engine behind `sheetview`: renders tabular data published as a
//! CSV export (e.g. a Google Sheets "publish to the web" link) into a
//! searchable, sortable display model.
//!
//! ## Overview
//!
//! Cells are loosely-typed strings. The library keeps them that way
//! and only interprets them at comparison time:
//!
//! - **Value coercion**: number (Brazilian separators), date, or text
//! - **Row store**: immutable columns + rows per table instance
//! - **Filter engine**: case-insensitive free-text match, any column
//! - **Sort engine**: stable, non-mutating, coercion-driven
//! - **Render cycle**: pure `store + view state → TableView`
//! - **Controller**: `Uninitialized → Loading → Ready | Failed`, one
//!   fetch per instance, input events in, display models out
//!
//! The network and the CSV reader are collaborators behind seams
//! (`FetchSource`, `parse_sheet`), so everything above them is
//! testable without I/O.
//!
//! ## Example
//!
//! ```rust
//! use sheetviewlib::{parse_sheet, RowStore, TableView, ViewState};
//!
//! let sheet = parse_sheet("Name,Score\nAna,10\nBo,2\n").unwrap();
//! let store = RowStore::new(sheet.columns, sheet.rows);
//!
//! let mut state = ViewState::default();
//! state.set_query("an");
//! let view = TableView::project(&store, &state);
//!
//! assert_eq!(view.rows.len(), 1);
//! assert_eq!(view.counter, "1 de 2 registro(s)");
//! ```

pub mod controller;
pub mod error;
pub mod fetch;
pub mod filter;
pub mod sheet;
pub mod sort;
pub mod store;
pub mod value;
pub mod view;

pub use controller::{Phase, Severity, Status, TableController, TableEvent};
pub use error::SheetError;
pub use fetch::{validate_source_url, FetchSource, HttpSource};
pub use filter::filter_rows;
pub use sheet::{parse_sheet, ParseIssue, SheetData};
pub use sort::{sort_rows, SortDirection};
pub use store::{Row, RowStore};
pub use value::{coerce, compare_values, SortKey};
pub use view::{HeaderCell, SortSpec, TableView, ViewState};

/// Result type for sheetviewlib operations
pub type Result<T> = std::result::Result<T, SheetError>;
