//! Pagination Component
//!
//! Page navigation for the DataTable. Pages are zero-based internally and
//! shown one-based.

use std::rc::Rc;

use gpui::{
    App, ClickEvent, InteractiveElement, IntoElement, ParentElement, RenderOnce, SharedString,
    StatefulInteractiveElement, Styled, Window, div, prelude::*,
};

use crate::theme::colors::GridColors;

type PageChangeHandler = Rc<dyn Fn(usize, &mut Window, &mut App) + 'static>;

/// Pagination component
#[derive(IntoElement)]
pub struct Pagination {
    page_index: usize,
    total_pages: usize,
    status: SharedString,
    disabled: bool,
    on_page_change: Option<PageChangeHandler>,
}

impl Pagination {
    /// Create a new pagination component
    pub fn new(page_index: usize, total_pages: usize) -> Self {
        Self {
            page_index,
            total_pages: total_pages.max(1),
            status: SharedString::default(),
            disabled: false,
            on_page_change: None,
        }
    }

    /// Text shown on the left (row count / loading)
    pub fn status(mut self, status: impl Into<SharedString>) -> Self {
        self.status = status.into();
        self
    }

    /// Block navigation while a page is loading
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the page change handler (receives the zero-based page)
    pub fn on_page_change(mut self, handler: impl Fn(usize, &mut Window, &mut App) + 'static) -> Self {
        self.on_page_change = Some(Rc::new(handler));
        self
    }

    fn nav_button(
        &self,
        id: &'static str,
        label: &'static str,
        target: Option<usize>,
    ) -> impl IntoElement {
        let enabled = target.is_some() && !self.disabled;

        let mut btn = div()
            .id(id)
            .px_2()
            .py_1()
            .rounded_sm()
            .text_sm()
            .text_color(if enabled {
                GridColors::text_primary()
            } else {
                GridColors::text_muted()
            })
            .child(label);

        if let (true, Some(target), Some(handler)) = (enabled, target, self.on_page_change.clone()) {
            btn = btn
                .cursor_pointer()
                .hover(|s| s.bg(GridColors::table_row_hover()))
                .on_click(move |_event: &ClickEvent, window, cx| handler(target, window, cx));
        }

        btn
    }
}

impl RenderOnce for Pagination {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let current = self.page_index;
        let last = self.total_pages - 1;

        let first = (current > 0).then_some(0);
        let prev = current.checked_sub(1);
        let next = (current < last).then_some(current + 1);
        let end = (current < last).then_some(last);

        div()
            .w_full()
            .px_4()
            .py_2()
            .flex()
            .items_center()
            .justify_between()
            .border_t_1()
            .border_color(GridColors::border())
            .child(
                div()
                    .text_sm()
                    .text_color(GridColors::text_secondary())
                    .child(self.status.clone()),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(self.nav_button("first-page", "«", first))
                    .child(self.nav_button("prev-page", "←", prev))
                    .child(
                        div()
                            .text_sm()
                            .text_color(GridColors::text_primary())
                            .child(format!("Page {} of {}", current + 1, self.total_pages)),
                    )
                    .child(self.nav_button("next-page", "→", next))
                    .child(self.nav_button("last-page", "»", end)),
            )
    }
}
