//! DataTable Component
//!
//! Header row with sort indicators, a scrolling body, and a single overlay line
//! (loading, error, or no-rows text) that replaces the body when set. Header
//! and row clicks are published as `DataTableEvent`s.

use gpui::{
    ClickEvent, Context, EventEmitter, InteractiveElement, IntoElement, ParentElement, Render,
    SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use super::column::{Column, ColumnWidth};
use crate::domain::page::SortModel;
use crate::theme::colors::GridColors;

/// Events emitted by a data table
#[derive(Debug, Clone, PartialEq)]
pub enum DataTableEvent {
    /// A sortable header was clicked
    SortRequested(SharedString),
    /// A body row was clicked (index into the current rows)
    RowClicked(usize),
}

/// DataTable component
pub struct DataTable<R: Clone + 'static> {
    columns: Vec<Column<R>>,
    rows: Vec<R>,
    row_height: f32,
    header_height: f32,
    overlay: Option<SharedString>,
    sort: Option<SortModel>,
    clickable_rows: bool,
}

impl<R: Clone + 'static> EventEmitter<DataTableEvent> for DataTable<R> {}

impl<R: Clone + 'static> DataTable<R> {
    /// Create a new data table
    pub fn new(_cx: &mut Context<Self>) -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
            row_height: 36.0,
            header_height: 40.0,
            overlay: None,
            sort: None,
            clickable_rows: false,
        }
    }

    /// Set the columns
    pub fn set_columns(&mut self, columns: Vec<Column<R>>) {
        self.columns = columns;
    }

    /// Set the rows
    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
    }

    /// Text shown instead of the body; `None` shows the rows
    pub fn set_overlay(&mut self, overlay: Option<SharedString>) {
        self.overlay = overlay;
    }

    /// Active sort, drawn as a header indicator
    pub fn set_sort(&mut self, sort: Option<SortModel>) {
        self.sort = sort;
    }

    /// Rows react to clicks with a pointer cursor and `RowClicked`
    pub fn set_clickable_rows(&mut self, clickable: bool) {
        self.clickable_rows = clickable;
    }

    fn sized<E: Styled>(element: E, width: ColumnWidth) -> E {
        match width {
            ColumnWidth::Fixed(w) => element.w(px(w)).flex_none(),
            ColumnWidth::Flex { min } => element.flex_1().min_w(px(min)),
        }
    }

    /// Render the header row
    fn render_header(&self, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .h(px(self.header_height))
            .w_full()
            .flex()
            .items_center()
            .bg(GridColors::table_header_bg())
            .border_b_1()
            .border_color(GridColors::border())
            .children(self.columns.iter().map(|col| {
                let indicator = self
                    .sort
                    .as_ref()
                    .filter(|s| s.col_id.as_str() == col.id.as_ref())
                    .map(|s| s.sort.indicator())
                    .unwrap_or("");

                let mut cell = div()
                    .id(SharedString::from(format!("header-{}", col.id)))
                    .px_3()
                    .flex()
                    .gap_1()
                    .text_sm()
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .text_color(GridColors::text_primary())
                    .child(col.label.clone())
                    .child(indicator);

                if col.sortable {
                    let col_id = col.id.clone();
                    cell = cell.cursor_pointer().on_click(cx.listener(
                        move |_this, _event: &ClickEvent, _window, cx| {
                            cx.emit(DataTableEvent::SortRequested(col_id.clone()));
                        },
                    ));
                }

                Self::sized(cell, col.width)
            }))
    }

    /// Render a data row
    fn render_row(&self, row: &R, index: usize, cx: &mut Context<Self>) -> impl IntoElement {
        let bg = if index % 2 == 0 {
            GridColors::content_bg()
        } else {
            GridColors::table_row_alt()
        };

        let mut element = div()
            .id(("row", index))
            .h(px(self.row_height))
            .w_full()
            .flex()
            .items_center()
            .bg(bg)
            .hover(|s| s.bg(GridColors::table_row_hover()))
            .border_b_1()
            .border_color(GridColors::border())
            .children(self.columns.iter().map(|col| {
                let cell = div()
                    .px_3()
                    .text_sm()
                    .text_color(GridColors::text_primary())
                    .overflow_hidden()
                    .child(col.render_cell(row));
                Self::sized(cell, col.width)
            }));

        if self.clickable_rows {
            element = element.cursor_pointer().on_click(cx.listener(
                move |_this, _event: &ClickEvent, _window, cx| {
                    cx.emit(DataTableEvent::RowClicked(index));
                },
            ));
        }

        element
    }

    fn render_overlay(&self, text: SharedString) -> impl IntoElement {
        div()
            .flex_1()
            .flex()
            .items_center()
            .justify_center()
            .py_8()
            .text_color(GridColors::text_muted())
            .child(text)
    }
}

impl<R: Clone + 'static> Render for DataTable<R> {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let mut table = div()
            .size_full()
            .flex()
            .flex_col()
            .bg(GridColors::content_bg())
            .border_1()
            .border_color(GridColors::border())
            .rounded_md()
            .overflow_hidden();

        table = table.child(self.render_header(cx));

        if let Some(text) = self.overlay.clone() {
            table = table.child(self.render_overlay(text));
        } else if self.rows.is_empty() {
            table = table.child(self.render_overlay("No rows to show".into()));
        } else {
            let rows: Vec<_> = self
                .rows
                .iter()
                .enumerate()
                .map(|(i, row)| self.render_row(row, i, cx).into_any_element())
                .collect();
            table = table.child(
                div()
                    .id("data-table-rows")
                    .flex_1()
                    .overflow_y_scroll()
                    .children(rows),
            );
        }

        table
    }
}
