//! TableState - Grid Table State Coordinator
//!
//! Owns loading/error/total-row state for one table and the parameters that
//! drive row fetches. Every issued fetch carries a generation number; a
//! completion is applied only when its generation is still the latest, so a
//! response from a superseded filter, sort, page or an unmounted table never
//! overwrites newer state.
//!
//! ```text
//!  parameter change ──▶ derive DataSourceConfig ──▶ install (generation += 1)
//!                                                        │
//!  begin_fetch() ──▶ FetchTicket { generation, params, config }
//!                                                        │
//!  complete_fetch(generation, result) ──▶ Applied | Failed | Stale
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Local};

use crate::components::composite::data_table::data_provider::VecDataProvider;
use crate::domain::column::{ColumnDescriptor, ProcessedColumn, process_columns};
use crate::domain::filter::{FilterDefinition, FilterModel};
use crate::domain::page::{GetRowsParams, PageResponse, SortModel};
use crate::domain::record::Record;
use crate::error::Error;
use crate::services::data_source::DataSourceConfig;

pub const DEFAULT_NO_ROWS_MESSAGE: &str = "No rows to show";
pub const DEFAULT_LOADING_MESSAGE: &str = "Loading data...";

/// Displayable fetch failure
#[derive(Debug, Clone, PartialEq)]
pub struct TableError {
    pub message: String,
    pub timestamp: DateTime<Local>,
}

impl TableError {
    pub fn from_error(error: &Error) -> Self {
        Self {
            message: error.display_message(),
            timestamp: Local::now(),
        }
    }
}

/// Observer hooks invoked right after the matching state transition
pub trait TableListener {
    fn on_grid_ready(&self) {}
    fn on_data_loaded(&self, _rows: &[Record]) {}
    fn on_error(&self, _error: &Error) {}
}

/// Listener that does nothing
pub struct NoopListener;

impl TableListener for NoopListener {}

/// Listener that records table activity in the log
pub struct LoggingListener {
    pub table: &'static str,
}

impl TableListener for LoggingListener {
    fn on_grid_ready(&self) {
        tracing::debug!(table = self.table, "Grid ready");
    }

    fn on_data_loaded(&self, rows: &[Record]) {
        tracing::info!(table = self.table, rows = rows.len(), "Data loaded");
    }

    fn on_error(&self, error: &Error) {
        tracing::error!(table = self.table, %error, "Data load failed");
    }
}

/// Where rows come from
#[derive(Clone)]
pub enum RowMode {
    /// Paged fetches against a REST endpoint
    Server {
        api_url: String,
        extra_params: BTreeMap<String, String>,
    },
    /// Static rows, filtered/sorted/paged locally
    Client { provider: VecDataProvider<Record> },
}

/// Everything a controller needs to run one fetch
#[derive(Debug, Clone)]
pub struct FetchTicket {
    pub generation: u64,
    pub params: GetRowsParams,
    pub config: Arc<DataSourceConfig>,
}

/// What happened to a completed fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied,
    Failed,
    /// Superseded by a newer request; discarded
    Stale,
}

/// What the table body shows
#[derive(Debug, PartialEq)]
pub enum TableBody<'a> {
    Loading(&'a str),
    Rows(&'a [Record]),
    /// No rows: carries the error message or the no-rows message
    Empty(&'a str),
}

/// State for a single grid table
pub struct TableState {
    pub columns: Vec<ProcessedColumn>,
    pub loading: bool,
    pub error: Option<TableError>,
    pub total_rows: usize,
    pub is_data_loaded: bool,
    pub current_page_size: usize,
    pub filter_model: FilterModel,
    pub sort: Option<SortModel>,
    pub page_index: usize,
    pub rows: Vec<Record>,
    pub no_rows_message: String,
    pub loading_message: String,
    mode: RowMode,
    data_source: Option<Arc<DataSourceConfig>>,
    generation: u64,
    listener: Arc<dyn TableListener>,
}

impl TableState {
    fn with_mode(columns: &[ColumnDescriptor], page_size: usize, mode: RowMode) -> Self {
        Self {
            columns: process_columns(columns),
            loading: false,
            error: None,
            total_rows: 0,
            is_data_loaded: false,
            current_page_size: page_size,
            filter_model: FilterModel::new(),
            sort: None,
            page_index: 0,
            rows: Vec::new(),
            no_rows_message: DEFAULT_NO_ROWS_MESSAGE.to_string(),
            loading_message: DEFAULT_LOADING_MESSAGE.to_string(),
            mode,
            data_source: None,
            generation: 0,
            listener: Arc::new(NoopListener),
        }
    }

    /// Table backed by a paginated endpoint
    pub fn server(
        columns: &[ColumnDescriptor],
        api_url: impl Into<String>,
        page_size: usize,
        extra_params: BTreeMap<String, String>,
    ) -> Self {
        let mode = RowMode::Server {
            api_url: api_url.into(),
            extra_params,
        };
        let mut state = Self::with_mode(columns, page_size, mode);
        state.install_data_source();
        state
    }

    /// Table over a static row set
    pub fn client(columns: &[ColumnDescriptor], rows: Vec<Record>, page_size: usize) -> Self {
        let mode = RowMode::Client {
            provider: VecDataProvider::new(rows),
        };
        Self::with_mode(columns, page_size, mode)
    }

    pub fn set_listener(&mut self, listener: Arc<dyn TableListener>) {
        self.listener = listener;
    }

    pub fn is_server_side(&self) -> bool {
        matches!(self.mode, RowMode::Server { .. })
    }

    /// Currently installed data source configuration
    pub fn data_source(&self) -> Option<&Arc<DataSourceConfig>> {
        self.data_source.as_ref()
    }

    /// Derive a fresh data source configuration from the current page size and
    /// filter model and install it. In-flight fetches become stale.
    fn install_data_source(&mut self) {
        let RowMode::Server {
            api_url,
            extra_params,
        } = &self.mode
        else {
            return;
        };

        let config = DataSourceConfig::derive(
            api_url,
            self.current_page_size,
            &self.filter_model,
            extra_params,
        );
        tracing::debug!(
            page_size = config.page_size,
            filters = config.filter_model.len(),
            "Installing data source"
        );
        self.data_source = Some(Arc::new(config));
        self.generation += 1;
    }

    /// First render: fires `on_grid_ready`, then loads rows.
    ///
    /// Client-side tables are complete immediately; server-side tables return
    /// the ticket for the first fetch.
    pub fn mount(&mut self) -> Option<FetchTicket> {
        self.listener.on_grid_ready();

        if let RowMode::Client { provider } = &self.mode {
            self.is_data_loaded = true;
            let all = provider.all().to_vec();
            self.listener.on_data_loaded(&all);
        }
        self.refresh()
    }

    /// Reload the current page
    pub fn refresh(&mut self) -> Option<FetchTicket> {
        if self.is_server_side() {
            self.begin_fetch()
        } else {
            self.apply_local_view();
            None
        }
    }

    /// Start a server fetch for the current page
    pub fn begin_fetch(&mut self) -> Option<FetchTicket> {
        let config = self.data_source.clone()?;

        self.generation += 1;
        self.loading = true;
        self.is_data_loaded = false;
        self.error = None;

        let start_row = self.page_index * self.current_page_size;
        let params = GetRowsParams::new(start_row, start_row + self.current_page_size)
            .with_sort(self.sort.clone());

        tracing::info!(
            generation = self.generation,
            start_row,
            page_size = self.current_page_size,
            "Fetch issued"
        );

        Some(FetchTicket {
            generation: self.generation,
            params,
            config,
        })
    }

    /// Apply (or discard) the result of a fetch
    pub fn complete_fetch(
        &mut self,
        generation: u64,
        result: Result<PageResponse, Error>,
    ) -> FetchOutcome {
        if generation != self.generation {
            tracing::debug!(
                generation,
                latest = self.generation,
                "Discarding stale response"
            );
            return FetchOutcome::Stale;
        }

        self.loading = false;
        match result {
            Ok(page) => {
                self.total_rows = page.total_count;
                self.rows = page.rows;
                self.is_data_loaded = true;
                self.error = None;
                tracing::info!(generation, total = self.total_rows, "Fetch applied");
                self.listener.on_data_loaded(&self.rows);
                FetchOutcome::Applied
            }
            Err(error) => {
                let table_error = TableError::from_error(&error);
                tracing::warn!(generation, message = %table_error.message, "Fetch failed");
                // Keep the last known total so the page index stays in range
                self.rows.clear();
                self.error = Some(table_error);
                self.listener.on_error(&error);
                FetchOutcome::Failed
            }
        }
    }

    fn apply_local_view(&mut self) {
        let RowMode::Client { provider } = &self.mode else {
            return;
        };

        let start = self.page_index * self.current_page_size;
        let page = provider.query(
            &self.filter_model,
            self.sort.as_ref(),
            start,
            self.current_page_size,
        );
        self.total_rows = page.total;
        self.rows = page.rows;
    }

    /// Replace the whole filter model
    pub fn apply_filter_model(&mut self, filter_model: FilterModel) {
        self.filter_model = filter_model;
        self.page_index = 0;
        self.install_data_source();
    }

    /// Set or clear the filter on one column
    pub fn set_filter(&mut self, field: &str, filter: Option<FilterDefinition>) {
        let mut model = self.filter_model.clone();
        match filter {
            Some(filter) => model.set(field, filter),
            None => {
                model.remove(field);
            }
        }
        self.apply_filter_model(model);
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.current_page_size = page_size;
        self.page_index = 0;
        self.install_data_source();
    }

    /// Header click: none → asc → desc → none
    pub fn toggle_sort(&mut self, col_id: &str) {
        let sortable = self
            .columns
            .iter()
            .any(|c| c.descriptor.field == col_id && c.descriptor.sortable);
        if !sortable {
            return;
        }
        self.sort = SortModel::cycle(self.sort.as_ref(), col_id);
        self.page_index = 0;
        self.generation += 1;
    }

    /// Jump to a zero-based page
    pub fn set_page(&mut self, page_index: usize) {
        self.page_index = page_index.min(self.total_pages().saturating_sub(1));
        self.generation += 1;
    }

    /// Back to the freshly-created state; outstanding fetches become stale
    pub fn reset(&mut self) {
        self.generation += 1;
        self.loading = false;
        self.error = None;
        self.total_rows = 0;
        self.is_data_loaded = false;
        self.rows.clear();
        self.filter_model.clear();
        self.sort = None;
        self.page_index = 0;
        self.install_data_source();
    }

    pub fn total_pages(&self) -> usize {
        if self.current_page_size == 0 {
            return 1;
        }
        self.total_rows.div_ceil(self.current_page_size).max(1)
    }

    pub fn body(&self) -> TableBody<'_> {
        if self.loading {
            TableBody::Loading(&self.loading_message)
        } else if !self.rows.is_empty() {
            TableBody::Rows(&self.rows)
        } else if let Some(error) = &self.error {
            TableBody::Empty(&error.message)
        } else {
            TableBody::Empty(&self.no_rows_message)
        }
    }

    pub fn error_banner(&self) -> Option<String> {
        self.error
            .as_ref()
            .map(|e| format!("Error fetching data: {}", e.message))
    }

    pub fn status_line(&self) -> String {
        if self.loading {
            "Loading...".to_string()
        } else {
            format!("Total rows: {}", self.total_rows)
        }
    }

    /// Export needs a settled, successful load
    pub fn can_export(&self) -> bool {
        !self.loading && self.is_data_loaded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::column::ColumnType;
    use crate::domain::filter::FilterOperator;
    use crate::domain::page::SortDirection;
    use serde_json::json;
    use std::sync::Mutex;

    fn columns() -> Vec<ColumnDescriptor> {
        vec![
            ColumnDescriptor::new("id").kind(ColumnType::Number),
            ColumnDescriptor::new("name").header("Name"),
            ColumnDescriptor::new("secret").sortable(false),
        ]
    }

    fn rows(names: &[&str]) -> Vec<Record> {
        names
            .iter()
            .enumerate()
            .filter_map(|(i, name)| json!({ "id": i + 1, "name": name }).as_object().cloned())
            .collect()
    }

    fn server_state() -> TableState {
        TableState::server(&columns(), "http://localhost:3000/api/items", 20, BTreeMap::new())
    }

    #[derive(Default)]
    struct Recorder {
        events: Mutex<Vec<String>>,
    }

    impl TableListener for Recorder {
        fn on_grid_ready(&self) {
            self.events.lock().expect("lock").push("ready".into());
        }
        fn on_data_loaded(&self, rows: &[Record]) {
            self.events.lock().expect("lock").push(format!("loaded:{}", rows.len()));
        }
        fn on_error(&self, error: &Error) {
            self.events.lock().expect("lock").push(format!("error:{error}"));
        }
    }

    #[test]
    fn fetch_lifecycle_applies_rows_and_total() {
        let mut state = server_state();
        let ticket = state.mount().expect("server table fetches on mount");
        assert!(state.loading);
        assert!(!state.is_data_loaded);
        assert_eq!(state.body(), TableBody::Loading(DEFAULT_LOADING_MESSAGE));
        assert_eq!(state.status_line(), "Loading...");
        assert!(!state.can_export());

        let page = PageResponse {
            rows: rows(&["Item 1", "Item 2"]),
            total_count: 2,
        };
        assert_eq!(state.complete_fetch(ticket.generation, Ok(page)), FetchOutcome::Applied);
        assert!(!state.loading);
        assert!(state.is_data_loaded);
        assert_eq!(state.total_rows, 2);
        assert_eq!(state.error_banner(), None);
        assert_eq!(state.status_line(), "Total rows: 2");
        assert!(state.can_export());
        match state.body() {
            TableBody::Rows(rows) => assert_eq!(rows.len(), 2),
            other => panic!("unexpected body {other:?}"),
        }
    }

    #[test]
    fn failure_clears_rows_and_shows_error() {
        let mut state = server_state();
        let first = state.begin_fetch().expect("ticket");
        state.complete_fetch(
            first.generation,
            Ok(PageResponse {
                rows: rows(&["old"]),
                total_count: 1,
            }),
        );

        let second = state.begin_fetch().expect("ticket");
        let err = Error::Server {
            status: 500,
            message: None,
        };
        assert_eq!(state.complete_fetch(second.generation, Err(err)), FetchOutcome::Failed);

        assert!(!state.loading);
        assert!(state.rows.is_empty());
        let banner = state.error_banner().expect("banner");
        assert!(banner.starts_with("Error fetching"));
        assert!(banner.to_lowercase().contains("error"));
        assert_eq!(
            state.body(),
            TableBody::Empty("Request failed with status code 500")
        );
        assert!(!state.can_export());
    }

    #[test]
    fn failed_page_keeps_pagination_in_range() {
        let mut state = server_state();
        let first = state.begin_fetch().expect("ticket");
        state.complete_fetch(
            first.generation,
            Ok(PageResponse {
                rows: rows(&["a"]),
                total_count: 100,
            }),
        );
        assert_eq!(state.total_pages(), 5);

        state.set_page(3);
        let ticket = state.begin_fetch().expect("ticket");
        assert_eq!(ticket.params.start_row, 60);
        assert_eq!(
            state.complete_fetch(ticket.generation, Err(Error::MissingApiUrl)),
            FetchOutcome::Failed
        );

        assert!(state.rows.is_empty());
        assert_eq!(state.total_rows, 100);
        assert!(state.page_index < state.total_pages());

        state.set_page(state.page_index - 1);
        assert_eq!(state.page_index, 2);
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut state = server_state();
        let old = state.begin_fetch().expect("ticket");

        state.set_filter(
            "name",
            Some(FilterDefinition::text(FilterOperator::Contains, "new")),
        );
        let new = state.begin_fetch().expect("ticket");
        assert_eq!(new.params.start_row, 0);

        let late = PageResponse {
            rows: rows(&["stale"]),
            total_count: 99,
        };
        assert_eq!(state.complete_fetch(old.generation, Ok(late)), FetchOutcome::Stale);
        assert!(state.loading);
        assert!(state.rows.is_empty());

        let fresh = PageResponse {
            rows: rows(&["new"]),
            total_count: 1,
        };
        assert_eq!(state.complete_fetch(new.generation, Ok(fresh)), FetchOutcome::Applied);
        assert_eq!(state.total_rows, 1);
    }

    #[test]
    fn filter_change_reinstalls_the_data_source() {
        let mut state = server_state();
        let before = state.data_source().cloned().expect("installed");

        state.set_filter(
            "name",
            Some(FilterDefinition::text(FilterOperator::Equals, "Ann")),
        );
        let ticket = state.begin_fetch().expect("ticket");
        assert!(!Arc::ptr_eq(&before, &ticket.config));

        let query = ticket.config.query_for(&ticket.params).expect("query");
        assert_eq!(query.get("nameEquals").map(String::as_str), Some("Ann"));
        assert!(before.query_for(&ticket.params).expect("query").get("nameEquals").is_none());
    }

    #[test]
    fn page_size_change_reinstalls_and_resets_page() {
        let mut state = server_state();
        state.total_rows = 100;
        state.set_page(3);
        assert_eq!(state.page_index, 3);

        state.set_page_size(50);
        assert_eq!(state.page_index, 0);
        let ticket = state.begin_fetch().expect("ticket");
        assert_eq!(ticket.config.page_size, 50);
        assert_eq!(ticket.params.end_row, 50);
    }

    #[test]
    fn unmount_makes_outstanding_fetch_stale() {
        let mut state = server_state();
        let ticket = state.begin_fetch().expect("ticket");
        state.reset();
        let page = PageResponse {
            rows: rows(&["late"]),
            total_count: 1,
        };
        assert_eq!(state.complete_fetch(ticket.generation, Ok(page)), FetchOutcome::Stale);
        assert!(!state.loading);
        assert!(state.rows.is_empty());
    }

    #[test]
    fn sort_cycles_on_sortable_columns_only() {
        let mut state = server_state();
        state.toggle_sort("name");
        assert_eq!(state.sort, Some(SortModel::new("name", SortDirection::Asc)));
        state.toggle_sort("secret");
        assert_eq!(state.sort, Some(SortModel::new("name", SortDirection::Asc)));

        let ticket = state.begin_fetch().expect("ticket");
        let query = ticket.config.query_for(&ticket.params).expect("query");
        assert_eq!(query.get("sort").map(String::as_str), Some("asc"));
        assert_eq!(query.get("sortField").map(String::as_str), Some("name"));
    }

    #[test]
    fn listener_sees_each_transition() {
        let recorder = Arc::new(Recorder::default());
        let mut state = server_state();
        state.set_listener(recorder.clone());

        let ticket = state.mount().expect("ticket");
        state.complete_fetch(
            ticket.generation,
            Ok(PageResponse {
                rows: rows(&["a", "b", "c"]),
                total_count: 3,
            }),
        );
        let ticket = state.begin_fetch().expect("ticket");
        state.complete_fetch(ticket.generation, Err(Error::MissingApiUrl));

        let events = recorder.events.lock().expect("lock").clone();
        assert_eq!(
            events,
            vec!["ready", "loaded:3", "error:No API URL configured"]
        );
    }

    #[test]
    fn client_mode_is_loaded_immediately() {
        let recorder = Arc::new(Recorder::default());
        let mut state = TableState::client(&columns(), rows(&["b", "a", "c"]), 2);
        state.set_listener(recorder.clone());

        assert!(state.mount().is_none());
        assert!(state.is_data_loaded);
        assert!(!state.loading);
        assert_eq!(state.total_rows, 3);
        assert_eq!(state.rows.len(), 2);
        assert_eq!(state.total_pages(), 2);

        state.set_filter(
            "name",
            Some(FilterDefinition::text(FilterOperator::Equals, "a")),
        );
        assert!(state.refresh().is_none());
        assert_eq!(state.total_rows, 1);

        let events = recorder.events.lock().expect("lock").clone();
        assert_eq!(events, vec!["ready", "loaded:3"]);
    }

    #[test]
    fn empty_result_shows_no_rows_message() {
        let mut state = server_state();
        let ticket = state.begin_fetch().expect("ticket");
        state.complete_fetch(
            ticket.generation,
            Ok(PageResponse {
                rows: Vec::new(),
                total_count: 0,
            }),
        );
        assert_eq!(state.body(), TableBody::Empty(DEFAULT_NO_ROWS_MESSAGE));
        assert_eq!(state.total_pages(), 1);
    }
}
