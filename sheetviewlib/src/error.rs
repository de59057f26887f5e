//! Error types for sheetviewlib

use thiserror::Error;

/// Errors that can occur while loading a published sheet
#[derive(Error, Debug)]
pub enum SheetError {
    /// Source URL is missing, relative, or not http(s)
    #[error("source URL is missing or not an absolute http(s) address: '{url}'")]
    MisconfiguredSource { url: String },

    /// The sheet yielded zero column headers
    #[error("the sheet has no column headers")]
    EmptySource,

    /// Network or transport failure while fetching the CSV
    #[error("failed to fetch '{url}': {message}")]
    Fetch { url: String, message: String },

    /// The CSV reader could not recover any structure from the body
    #[error("failed to read CSV: {0}")]
    Csv(#[from] csv::Error),
}
