//! CSV parsing collaborator.
//!
//! Wraps the `csv` crate so the rest of the library only ever sees
//! ordered columns, row mappings, and a list of non-fatal parse
//! issues. First record = headers, blank lines skipped, standard
//! quoting.

use std::collections::HashMap;

use crate::Result;

/// One recoverable parse problem.
///
/// Issues never abort the load: rows around them still come through,
/// and the controller downgrades them to a warning status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIssue {
    /// 1-based source line, 0 when unknown
    pub line: u64,
    /// Human-readable description
    pub message: String,
}

/// Parsed sheet: ordered headers, row mappings, recoverable issues.
#[derive(Debug, Clone, Default)]
pub struct SheetData {
    /// Column names from the first record
    pub columns: Vec<String>,
    /// Data rows keyed by column name
    pub rows: Vec<HashMap<String, String>>,
    /// Non-fatal problems encountered while reading
    pub errors: Vec<ParseIssue>,
}

/// Parse a UTF-8 CSV body.
///
/// Rows shorter than the header are padded with empty strings, extra
/// trailing fields are dropped; both cases are recorded as issues.
/// Zero columns (empty body) is not an error here — it is the
/// caller's empty-source signal.
pub fn parse_sheet(text: &str) -> Result<SheetData> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    // A headerless body shows up as a single empty header field
    let columns = if columns.len() == 1 && columns[0].is_empty() {
        Vec::new()
    } else {
        columns
    };

    let mut rows = Vec::new();
    let mut errors = Vec::new();

    for result in reader.records() {
        match result {
            Ok(record) => {
                if record.len() != columns.len() {
                    errors.push(ParseIssue {
                        line: record.position().map(|p| p.line()).unwrap_or(0),
                        message: format!(
                            "expected {} field(s), found {}",
                            columns.len(),
                            record.len()
                        ),
                    });
                }
                let row = columns
                    .iter()
                    .enumerate()
                    .map(|(i, c)| (c.clone(), record.get(i).unwrap_or("").to_string()))
                    .collect();
                rows.push(row);
            }
            Err(e) => errors.push(ParseIssue {
                line: e.position().map(|p| p.line()).unwrap_or(0),
                message: e.to_string(),
            }),
        }
    }

    Ok(SheetData {
        columns,
        rows,
        errors,
    })
}
