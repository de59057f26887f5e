//! Rendering of display models for the terminal and for export.

use console::Style;
use sheetviewlib::{Severity, SortDirection, Status, TableView};

/// CSS-ish class name for a severity, used by the HTML export and
/// status styling.
pub fn severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Ok => "ok",
        Severity::Warn => "warn",
        Severity::Error => "error",
    }
}

/// Style a status line by severity.
pub fn render_status(status: &Status) -> String {
    let style = match status.severity {
        Severity::Ok => Style::new().green(),
        Severity::Warn => Style::new().yellow(),
        Severity::Error => Style::new().red(),
    };
    style.apply_to(&status.message).to_string()
}

/// Header label with the sort marker of the active column.
fn header_label(name: &str, sort: Option<SortDirection>) -> String {
    match sort {
        Some(SortDirection::Ascending) => format!("{} ↑", name),
        Some(SortDirection::Descending) => format!("{} ↓", name),
        None => name.to_string(),
    }
}

/// Render the view as an aligned text table with the counter line.
pub fn render_table(view: &TableView) -> String {
    if view.headers.is_empty() {
        return String::new();
    }

    let labels: Vec<String> = view
        .headers
        .iter()
        .map(|h| header_label(&h.name, h.sort))
        .collect();

    let mut widths: Vec<usize> = labels.iter().map(|l| l.chars().count()).collect();
    for row in &view.rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    let bold = Style::new().bold();
    let mut out = String::new();

    let header_line = labels
        .iter()
        .zip(&widths)
        .map(|(label, w)| format!("{:<width$}", label, width = *w))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(&bold.apply_to(header_line.trim_end()).to_string());
    out.push('\n');

    let total_width: usize = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
    out.push_str(&"-".repeat(total_width));
    out.push('\n');

    for row in &view.rows {
        let line = row
            .iter()
            .zip(&widths)
            .map(|(cell, w)| format!("{:<width$}", cell, width = *w))
            .collect::<Vec<_>>()
            .join("  ");
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out.push('\n');
    out.push_str(&view.counter);
    out.push('\n');
    out
}

/// Render the visible rows as CSV (headers without sort markers).
pub fn render_csv(view: &TableView) -> String {
    let mut out = String::new();

    let quote = |cell: &str| format!("\"{}\"", cell.replace('"', "\"\""));

    let header = view
        .headers
        .iter()
        .map(|h| quote(&h.name))
        .collect::<Vec<_>>()
        .join(",");
    out.push_str(&header);
    out.push('\n');

    for row in &view.rows {
        let line = row.iter().map(|c| quote(c)).collect::<Vec<_>>().join(",");
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Escape text for HTML content and attribute positions.
fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render a self-contained HTML page with header, body, status, and
/// counter regions.
pub fn render_html(title: &str, status: &Status, view: &TableView) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"pt-BR\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    out.push_str(
        "<style>\n\
         body { font-family: sans-serif; margin: 2rem; }\n\
         table { border-collapse: collapse; }\n\
         th, td { border: 1px solid #ccc; padding: 0.3rem 0.6rem; text-align: left; }\n\
         th { background: #f4f4f4; }\n\
         .status.ok { color: #1a7f37; }\n\
         .status.warn { color: #9a6700; }\n\
         .status.error { color: #cf222e; }\n\
         .counter { color: #666; }\n\
         </style>\n</head>\n<body>\n",
    );
    out.push_str(&format!("<h1>{}</h1>\n", escape_html(title)));
    out.push_str(&format!(
        "<p class=\"status {}\">{}</p>\n",
        severity_class(status.severity),
        escape_html(&status.message)
    ));

    if !view.headers.is_empty() {
        out.push_str("<table>\n<thead>\n<tr>");
        for h in &view.headers {
            out.push_str(&format!(
                "<th>{}</th>",
                escape_html(&header_label(&h.name, h.sort))
            ));
        }
        out.push_str("</tr>\n</thead>\n<tbody>\n");
        for row in &view.rows {
            out.push_str("<tr>");
            for cell in row {
                out.push_str(&format!("<td>{}</td>", escape_html(cell)));
            }
            out.push_str("</tr>\n");
        }
        out.push_str("</tbody>\n</table>\n");
        out.push_str(&format!(
            "<p class=\"counter\">{}</p>\n",
            escape_html(&view.counter)
        ));
    }

    out.push_str("</body>\n</html>\n");
    out
}
