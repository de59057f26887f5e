//! Table controller: owns one instance's store, view state, and
//! status, and turns input events into render cycles.
//!
//! Lifecycle is `Uninitialized → Loading → Ready | Failed`. A
//! malformed URL never leaves `Uninitialized`; a successful load
//! reaches `Ready` and from then on every event yields a fresh
//! `TableView`. No failure escapes: every path ends in a
//! user-visible status. Instances are fully independent.

use serde::Serialize;

use crate::fetch::{validate_source_url, FetchSource};
use crate::sheet::parse_sheet;
use crate::store::RowStore;
use crate::view::{TableView, ViewState};

/// Lifecycle phase of one table instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Phase {
    /// No data loaded; also the terminal state for a bad source URL
    #[default]
    Uninitialized,
    /// Fetch and parse in flight
    Loading,
    /// Data loaded, events accepted
    Ready,
    /// Fetch or parse failed; no retry
    Failed,
}

/// Severity of a status message, mirroring the display classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational
    #[default]
    Ok,
    /// Recoverable problem, data may still be shown
    Warn,
    /// Load failed, table stays empty
    Error,
}

/// User-visible status line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Status {
    /// Message severity
    pub severity: Severity,
    /// Message text; empty before anything happened
    pub message: String,
}

impl Status {
    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }
}

/// Input events a host UI forwards to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    /// The search box content changed
    QueryChanged(String),
    /// The clear-search action was activated
    ClearQuery,
    /// A column header was activated by pointer or keyboard
    HeaderActivated(String),
}

/// One table instance: configured source, loaded store, view state.
#[derive(Debug, Default)]
pub struct TableController {
    source: String,
    phase: Phase,
    store: RowStore,
    state: ViewState,
    status: Status,
}

impl TableController {
    /// Configure an instance for a source URL. Nothing is fetched yet.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Self::default()
        }
    }

    /// Fetch and parse the source, one-shot.
    ///
    /// Returns the resulting status. Calling again after the first
    /// attempt is a no-op; there is no reload path.
    pub fn load(&mut self, fetcher: &dyn FetchSource) -> &Status {
        if self.phase != Phase::Uninitialized || !self.status.message.is_empty() {
            return &self.status;
        }

        let url = match validate_source_url(&self.source) {
            Ok(url) => url,
            Err(e) => {
                log::warn!("source rejected: {e}");
                self.status = Status::new(
                    Severity::Warn,
                    "Defina um link CSV publicado válido para a planilha.",
                );
                return &self.status;
            }
        };

        self.phase = Phase::Loading;
        self.status = Status::new(Severity::Ok, "Carregando dados da planilha…");

        let body = match fetcher.fetch(&url) {
            Ok(body) => body,
            Err(e) => {
                log::error!("fetch failed: {e}");
                self.phase = Phase::Failed;
                self.status = Status::new(
                    Severity::Error,
                    "Não foi possível carregar a planilha. Confirme o link CSV publicado.",
                );
                return &self.status;
            }
        };

        let sheet = match parse_sheet(&body) {
            Ok(sheet) => sheet,
            Err(e) => {
                log::error!("CSV unreadable: {e}");
                self.phase = Phase::Failed;
                self.status = Status::new(
                    Severity::Error,
                    "Não foi possível carregar a planilha. Confirme o link CSV publicado.",
                );
                return &self.status;
            }
        };

        if sheet.columns.is_empty() {
            self.phase = Phase::Failed;
            self.status = Status::new(
                Severity::Warn,
                "A planilha parece vazia ou sem cabeçalhos.",
            );
            return &self.status;
        }

        for issue in &sheet.errors {
            log::warn!("CSV line {}: {}", issue.line, issue.message);
        }

        let error_count = sheet.errors.len();
        self.store = RowStore::new(sheet.columns, sheet.rows);
        self.phase = Phase::Ready;
        self.status = if error_count > 0 {
            Status::new(
                Severity::Warn,
                format!("Ocorreram {} erro(s) ao ler o CSV.", error_count),
            )
        } else {
            Status::new(
                Severity::Ok,
                format!("Pronto. Carregado {} registro(s).", self.store.len()),
            )
        };
        &self.status
    }

    /// Apply one input event and run a render cycle.
    ///
    /// Returns `None` unless the instance is `Ready`. Activating a
    /// header that is not one of the loaded columns changes nothing
    /// but still re-renders.
    pub fn apply(&mut self, event: TableEvent) -> Option<TableView> {
        if self.phase != Phase::Ready {
            return None;
        }
        match event {
            TableEvent::QueryChanged(query) => self.state.set_query(query),
            TableEvent::ClearQuery => self.state.clear_query(),
            TableEvent::HeaderActivated(column) => {
                if self.store.has_column(&column) {
                    self.state.activate_column(&column);
                }
            }
        }
        Some(self.render())
    }

    /// Current display model.
    ///
    /// Outside `Ready` this is the empty view: no header, no body,
    /// counter untouched.
    pub fn render(&self) -> TableView {
        if self.phase != Phase::Ready {
            return TableView::default();
        }
        TableView::project(&self.store, &self.state)
    }

    /// Configured source URL, as given.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Latest status line.
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// The loaded store (empty outside `Ready`).
    pub fn store(&self) -> &RowStore {
        &self.store
    }

    /// Current view state.
    pub fn view_state(&self) -> &ViewState {
        &self.state
    }

    /// True once data is loaded and events are accepted.
    pub fn is_ready(&self) -> bool {
        self.phase == Phase::Ready
    }
}
