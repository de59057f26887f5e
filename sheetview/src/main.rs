//! # sheetview
//!
//! CLI viewer for spreadsheets published as CSV (e.g. Google Sheets
//! "File → Publish to the web").
//!
//! ## Usage
//!
//! ```bash
//! # Render a published sheet as an aligned table
//! sheetview "https://docs.google.com/spreadsheets/d/e/ID/pub?output=csv"
//!
//! # Search and sort, descending
//! sheetview URL --query ana --sort Score --desc
//!
//! # Several sheets, named like tabs
//! sheetview vendas=URL1 estoque=URL2
//!
//! # Export what is visible
//! sheetview URL --output csv
//! sheetview URL --output html > planilha.html
//! sheetview URL --output json
//! ```
//!
//! Each source is one independent table instance; a failure in one
//! never affects the others. The exit code is non-zero only when
//! every source failed to load.

mod render;

use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command};
use console::Style;
use serde::Serialize;
use sheetviewlib::{
    HttpSource, Phase, Status, TableController, TableEvent, TableView,
};
use url::Url;

/// One source's outcome, for JSON output.
#[derive(Debug, Serialize)]
struct SheetReport<'a> {
    /// Tab name when the source was given as NAME=URL
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    source: &'a str,
    phase: Phase,
    status: &'a Status,
    view: TableView,
}

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("sheetview")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Searchable, sortable viewer for spreadsheets published as CSV")
        .arg(
            Arg::new("source")
                .action(ArgAction::Append)
                .num_args(1..)
                .required(true)
                .value_name("SOURCE")
                .help("Published CSV URL, optionally NAME=URL (repeatable)"),
        )
        .arg(
            Arg::new("query")
                .short('q')
                .long("query")
                .value_name("TEXT")
                .help("Search query applied across all columns"),
        )
        .arg(
            Arg::new("sort")
                .short('s')
                .long("sort")
                .value_name("COLUMN")
                .help("Sort by a column (ascending)"),
        )
        .arg(
            Arg::new("desc")
                .long("desc")
                .action(ArgAction::SetTrue)
                .requires("sort")
                .help("Sort descending"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["table", "csv", "json", "html"])
                .default_value("table")
                .help("Output format"),
        )
}

/// Split `NAME=URL` into its parts; a bare URL has no name.
///
/// The `=` only separates a name when the left side is not itself
/// part of a URL (query strings carry `=` too).
fn split_named_source(raw: &str) -> (Option<&str>, &str) {
    if let Some((name, rest)) = raw.split_once('=') {
        if !name.is_empty() && !name.contains("://") && rest.contains("://") {
            return (Some(name), rest);
        }
    }
    (None, raw)
}

/// Display title for one source: its tab name, else its host, else a
/// generic label.
fn source_title(name: Option<&str>, source: &str) -> String {
    if let Some(name) = name {
        return name.to_string();
    }
    Url::parse(source)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_else(|| "Planilha".to_string())
}

/// Load one source and drive it with the configured events.
fn load_sheet(matches: &ArgMatches, source: &str) -> TableController {
    let mut controller = TableController::new(source);
    controller.load(&HttpSource);

    if controller.is_ready() {
        if let Some(query) = matches.get_one::<String>("query") {
            controller.apply(TableEvent::QueryChanged(query.clone()));
        }
        if let Some(column) = matches.get_one::<String>("sort") {
            controller.apply(TableEvent::HeaderActivated(column.clone()));
            if matches.get_flag("desc") {
                controller.apply(TableEvent::HeaderActivated(column.clone()));
            }
        }
    }
    controller
}

fn run(matches: &ArgMatches) -> anyhow::Result<bool> {
    let sources: Vec<&String> = matches
        .get_many::<String>("source")
        .map(|v| v.collect())
        .unwrap_or_default();
    let output = matches
        .get_one::<String>("output")
        .map(String::as_str)
        .unwrap_or("table");
    let many = sources.len() > 1;

    let mut any_ready = false;
    let mut reports = Vec::new();

    for (i, raw) in sources.iter().enumerate() {
        let (name, source) = split_named_source(raw);
        let controller = load_sheet(matches, source);
        any_ready |= controller.is_ready();
        let view = controller.render();

        match output {
            "json" => reports.push((name, controller)),
            "csv" => {
                eprintln!("{}", render::render_status(controller.status()));
                if controller.is_ready() {
                    print!("{}", render::render_csv(&view));
                }
            }
            "html" => {
                eprintln!("{}", render::render_status(controller.status()));
                print!(
                    "{}",
                    render::render_html(&source_title(name, source), controller.status(), &view)
                );
            }
            _ => {
                if many || name.is_some() {
                    let title = source_title(name, source);
                    println!("{}", Style::new().bold().underlined().apply_to(title));
                }
                println!("{}", render::render_status(controller.status()));
                if controller.is_ready() {
                    print!("{}", render::render_table(&view));
                }
                if i + 1 < sources.len() {
                    println!();
                }
            }
        }
    }

    if output == "json" {
        let items: Vec<SheetReport<'_>> = reports
            .iter()
            .map(|(name, controller)| SheetReport {
                name: *name,
                source: controller.source(),
                phase: controller.phase(),
                status: controller.status(),
                view: controller.render(),
            })
            .collect();
        if items.len() == 1 {
            println!("{}", serde_json::to_string_pretty(&items[0])?);
        } else {
            println!("{}", serde_json::to_string_pretty(&items)?);
        }
    }

    Ok(any_ready)
}

fn main() -> ExitCode {
    env_logger::init();
    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
