//! Grid Page
//!
//! Server-side paged item grid: filter bar, page size picker, CSV export,
//! sortable table and pagination.

use std::sync::Arc;

use gpui::{
    AppContext, ClickEvent, Context, Entity, IntoElement, ParentElement, Render, SharedString,
    Styled, Window, div, prelude::*, px,
};

use crate::app::entities::AppEntities;
use crate::components::composite::data_table::column::record_columns;
use crate::components::composite::data_table::{
    DataTable, DataTableEvent, FilterBar, FilterBarEvent, Pagination,
};
use crate::components::primitives::button::{Button, ButtonSize};
use crate::domain::column::{ColumnDescriptor, ColumnType};
use crate::domain::record::Record;
use crate::features::grid::controller::GridController;
use crate::state::table_state::{LoggingListener, TableBody, TableState};
use crate::theme::colors::GridColors;
use crate::utils::format::format_time;

/// Page sizes offered in the picker
pub const PAGE_SIZES: [usize; 4] = [10, 20, 50, 100];

/// Columns of the items endpoint
pub fn item_columns() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::new("id")
            .header("ID")
            .kind(ColumnType::Number),
        ColumnDescriptor::new("name").header("Name"),
        ColumnDescriptor::new("category").header("Category"),
        ColumnDescriptor::new("price")
            .header("Price")
            .kind(ColumnType::Number),
        ColumnDescriptor::new("createdAt")
            .header("Created")
            .kind(ColumnType::Date),
        ColumnDescriptor::new("active")
            .header("Active")
            .kind(ColumnType::Boolean),
    ]
}

/// Grid page component
pub struct GridPage {
    controller: GridController,
    table: Entity<DataTable<Record>>,
    filter_bar: Entity<FilterBar>,
    notice: Option<SharedString>,
}

impl GridPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let api = entities.config.read(cx).config.api.clone();

        let table_state = cx.new(|_| {
            let mut state = TableState::server(
                &item_columns(),
                api.items_url.clone(),
                api.page_size,
                api.extra_params.clone(),
            );
            state.set_listener(Arc::new(LoggingListener { table: "items" }));
            state
        });

        let columns = table_state.read(cx).columns.clone();

        let table = cx.new(|cx| {
            let mut table = DataTable::<Record>::new(cx);
            table.set_columns(record_columns(&columns));
            table
        });
        let filter_bar = cx.new(|cx| FilterBar::new(&columns, cx));

        cx.subscribe(&table, |this, _table, event: &DataTableEvent, cx| {
            if let DataTableEvent::SortRequested(col_id) = event {
                this.controller.toggle_sort(col_id, cx);
            }
        })
        .detach();

        cx.subscribe(&filter_bar, |this, _bar, event: &FilterBarEvent, cx| {
            let FilterBarEvent::Apply(model) = event;
            this.notice = None;
            this.controller.apply_filters(model.clone(), cx);
        })
        .detach();

        // Push state into the table view
        let table_clone = table.clone();
        cx.observe(&table_state, move |_this, state, cx| {
            let (rows, overlay, sort) = {
                let state = state.read(cx);
                let overlay = match state.body() {
                    TableBody::Loading(text) | TableBody::Empty(text) => {
                        Some(SharedString::from(text.to_string()))
                    }
                    TableBody::Rows(_) => None,
                };
                (state.rows.clone(), overlay, state.sort.clone())
            };
            table_clone.update(cx, |table, cx| {
                table.set_rows(rows);
                table.set_overlay(overlay);
                table.set_sort(sort);
                cx.notify();
            });
            cx.notify();
        })
        .detach();

        let controller = GridController::new(entities, table_state);
        controller.mount(cx);

        Self {
            controller,
            table,
            filter_bar,
            notice: None,
        }
    }

    /// Called when the page leaves the screen
    pub fn unmount(&mut self, cx: &mut Context<Self>) {
        self.controller.unmount(cx);
    }

    fn render_toolbar(
        &self,
        page_size: usize,
        can_export: bool,
        loading: bool,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        div()
            .flex()
            .items_center()
            .justify_between()
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(
                        div()
                            .text_sm()
                            .text_color(GridColors::text_secondary())
                            .child("Page size"),
                    )
                    .children(PAGE_SIZES.iter().map(|&size| {
                        Button::secondary(("page-size", size), size.to_string())
                            .size(ButtonSize::Small)
                            .selected(size == page_size)
                            .on_click(cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                                this.controller.set_page_size(size, cx);
                            }))
                    })),
            )
            .child(
                div()
                    .flex()
                    .gap_2()
                    .child(
                        Button::secondary("grid-refresh", "Refresh")
                            .disabled(loading)
                            .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                this.controller.refresh(cx);
                            })),
                    )
                    .child(
                        Button::primary("grid-export", "Export CSV")
                            .disabled(!can_export)
                            .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                let notice = match this.controller.export(cx) {
                                    Ok(path) => format!("Exported to {}", path.display()),
                                    Err(error) => {
                                        tracing::error!(%error, "CSV export failed");
                                        format!("Export failed: {}", error.display_message())
                                    }
                                };
                                this.notice = Some(notice.into());
                                cx.notify();
                            })),
                    ),
            )
    }
}

impl Render for GridPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let (page_index, total_pages, status, loading, banner, page_size, can_export) = {
            let state = self.controller.table().read(cx);
            (
                state.page_index,
                state.total_pages(),
                state.status_line(),
                state.loading,
                state
                    .error_banner()
                    .zip(state.error.as_ref().map(|e| format_time(&e.timestamp))),
                state.current_page_size,
                state.can_export(),
            )
        };

        let page = cx.entity().downgrade();

        div()
            .size_full()
            .flex()
            .flex_col()
            .p_4()
            .gap_3()
            .child(
                div()
                    .text_size(px(20.0))
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .text_color(GridColors::text_primary())
                    .child("Items"),
            )
            .child(self.filter_bar.clone())
            .child(self.render_toolbar(page_size, can_export, loading, cx))
            .children(self.notice.clone().map(|notice| {
                div()
                    .text_sm()
                    .text_color(GridColors::text_secondary())
                    .child(notice)
            }))
            .child(div().flex_1().min_h(px(200.0)).child(self.table.clone()))
            .children(banner.map(|(message, at)| {
                div()
                    .flex()
                    .justify_between()
                    .px_3()
                    .py_2()
                    .rounded_md()
                    .bg(GridColors::danger_bg())
                    .border_1()
                    .border_color(GridColors::danger_border())
                    .text_sm()
                    .text_color(GridColors::danger())
                    .child(message)
                    .child(div().text_color(GridColors::text_muted()).child(at))
            }))
            .child(
                Pagination::new(page_index, total_pages)
                    .status(status)
                    .disabled(loading)
                    .on_page_change(move |index, _window, cx| {
                        let _ = page.update(cx, |this, cx| this.controller.set_page(index, cx));
                    }),
            )
    }
}
