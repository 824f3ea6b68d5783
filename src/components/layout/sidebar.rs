//! Sidebar Component
//!
//! Navigation sidebar with one entry per section.

use gpui::{
    ClickEvent, Context, InteractiveElement, IntoElement, ParentElement, Render, SharedString,
    StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::Section;
use crate::theme::colors::GridColors;

/// Sidebar component
pub struct Sidebar {
    entities: AppEntities,
}

impl Sidebar {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.router, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn render_nav_item(&self, section: Section, active: Section) -> impl IntoElement {
        let is_active = section == active;
        let entities = self.entities.clone();

        let (bg_color, text_color, border_color) = if is_active {
            (
                GridColors::accent_soft(),
                GridColors::accent(),
                GridColors::accent(),
            )
        } else {
            (
                gpui::rgba(0x00000000),
                GridColors::text_secondary(),
                gpui::rgba(0x00000000),
            )
        };

        div()
            .id(SharedString::from(format!("nav-{}", section.label())))
            .w_full()
            .px_4()
            .py_2()
            .bg(bg_color)
            .border_l_2()
            .border_color(border_color)
            .text_color(text_color)
            .text_size(px(14.0))
            .cursor_pointer()
            .hover(|s| s.bg(GridColors::table_row_hover()))
            .on_click(move |_event: &ClickEvent, _window, cx| {
                entities.router.update(cx, |router, cx| {
                    if router.navigate(section.route()) {
                        cx.notify();
                    }
                });
            })
            .child(section.label())
    }
}

impl Render for Sidebar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let active = self.entities.router.read(cx).current.section();

        div()
            .w(px(180.0))
            .h_full()
            .bg(GridColors::sidebar_bg())
            .border_r_1()
            .border_color(GridColors::border())
            .flex()
            .flex_col()
            .pt_4()
            .children(
                Section::all()
                    .iter()
                    .map(|section| self.render_nav_item(*section, active)),
            )
    }
}
