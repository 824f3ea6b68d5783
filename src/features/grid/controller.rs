//! Grid Controller
//!
//! Turns user actions on the grid into state changes and row fetches. Fetches
//! run on the tokio runtime; results are handed back to `TableState`, which
//! discards them when a newer fetch has been issued since.

use std::path::PathBuf;

use chrono::Utc;
use gpui::{App, AppContext, Entity};

use crate::app::entities::AppEntities;
use crate::domain::filter::FilterModel;
use crate::error::{Error, Result};
use crate::services::run_in_tokio;
use crate::services::service_hub::ServiceHub;
use crate::state::table_state::{FetchOutcome, FetchTicket, TableState};
use crate::utils::export::{export_dir, export_to_dir};

/// Grid page controller
pub struct GridController {
    entities: AppEntities,
    table: Entity<TableState>,
}

impl GridController {
    /// Create a new controller
    pub fn new(entities: AppEntities, table: Entity<TableState>) -> Self {
        Self { entities, table }
    }

    pub fn table(&self) -> &Entity<TableState> {
        &self.table
    }

    /// First render of the grid
    pub fn mount(&self, cx: &mut App) {
        let ticket = self.table.update(cx, |state, cx| {
            let ticket = state.mount();
            cx.notify();
            ticket
        });
        self.fetch(ticket, cx);
    }

    /// Reload the current page
    pub fn refresh(&self, cx: &mut App) {
        self.update_and_fetch(cx, |_| {});
    }

    pub fn apply_filters(&self, model: FilterModel, cx: &mut App) {
        tracing::debug!(filters = model.len(), "Applying filters");
        self.update_and_fetch(cx, |state| state.apply_filter_model(model));
    }

    pub fn set_page_size(&self, page_size: usize, cx: &mut App) {
        self.update_and_fetch(cx, |state| state.set_page_size(page_size));
    }

    pub fn toggle_sort(&self, col_id: &str, cx: &mut App) {
        self.update_and_fetch(cx, |state| state.toggle_sort(col_id));
    }

    pub fn set_page(&self, page_index: usize, cx: &mut App) {
        self.update_and_fetch(cx, |state| state.set_page(page_index));
    }

    /// Grid leaves the screen; any response still in flight is dropped
    pub fn unmount(&self, cx: &mut App) {
        self.table.update(cx, |state, _cx| state.reset());
    }

    /// Write the loaded rows to a CSV file
    pub fn export(&self, cx: &mut App) -> Result<PathBuf> {
        let export_config = self.entities.config.read(cx).config.export.clone();
        let state = self.table.read(cx);
        if !state.can_export() {
            return Err(Error::invalid("Nothing loaded to export"));
        }

        let dir = export_dir(&export_config)?;
        export_to_dir(&dir, &state.columns, &state.rows, Utc::now())
    }

    fn update_and_fetch(&self, cx: &mut App, change: impl FnOnce(&mut TableState)) {
        let ticket = self.table.update(cx, |state, cx| {
            change(state);
            let ticket = state.refresh();
            cx.notify();
            ticket
        });
        self.fetch(ticket, cx);
    }

    fn fetch(&self, ticket: Option<FetchTicket>, cx: &mut App) {
        let Some(FetchTicket {
            generation,
            params,
            config,
        }) = ticket
        else {
            return;
        };

        let Some(hub) = cx.try_global::<ServiceHub>() else {
            self.table.update(cx, |state, cx| {
                state.complete_fetch(generation, Err(Error::invalid("Services not initialized")));
                cx.notify();
            });
            return;
        };

        let data_source = hub.data_source(config);
        let table = self.table.downgrade();

        cx.spawn(async move |cx| {
            let result = run_in_tokio(async move { data_source.get_rows(params).await }).await;

            let applied = table.update(cx, |state, cx| {
                let outcome = state.complete_fetch(generation, result);
                if outcome != FetchOutcome::Stale {
                    cx.notify();
                }
                outcome
            });
            if applied.is_err() {
                tracing::debug!(generation, "Grid released before response arrived");
            }
        })
        .detach();
    }
}
