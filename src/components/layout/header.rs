//! Header Component
//!
//! Application title, the current route with a back action, and configuration
//! warnings.

use gpui::{ClickEvent, Context, IntoElement, ParentElement, Render, Styled, Window, div, px};

use crate::app::entities::AppEntities;
use crate::components::primitives::button::{Button, ButtonSize};
use crate::theme::colors::GridColors;

/// Header component
pub struct Header {
    entities: AppEntities,
}

impl Header {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.router, |_this, _, cx| cx.notify())
            .detach();

        cx.observe(&entities.config, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }
}

impl Render for Header {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let (title, path, can_go_back) = {
            let router = self.entities.router.read(cx);
            (router.current.title(), router.current.path(), router.can_go_back())
        };
        let config_error = self.entities.config.read(cx).last_error.clone();

        div()
            .h(px(48.0))
            .w_full()
            .bg(GridColors::header_bg())
            .flex()
            .items_center()
            .justify_between()
            .px_4()
            // Left side: Logo and title
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(
                        div()
                            .size(px(32.0))
                            .rounded_md()
                            .bg(gpui::rgba(0xffffffcc))
                            .flex()
                            .items_center()
                            .justify_center()
                            .text_color(GridColors::header_bg())
                            .font_weight(gpui::FontWeight::BOLD)
                            .child("R"),
                    )
                    .child(
                        div()
                            .text_color(GridColors::text_header())
                            .text_size(px(18.0))
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .child("REST Grid"),
                    )
                    .child(
                        div()
                            .text_color(gpui::rgba(0xffffffaa))
                            .text_size(px(14.0))
                            .child(title),
                    ),
            )
            // Right side: config warning and route
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_6()
                    .children(can_go_back.then(|| {
                        Button::ghost("header-back", "Back")
                            .size(ButtonSize::Small)
                            .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                this.entities.router.update(cx, |router, cx| {
                                    router.back();
                                    cx.notify();
                                });
                            }))
                    }))
                    .children(config_error.map(|error| {
                        div()
                            .text_color(gpui::rgba(0xfde68aff))
                            .text_size(px(12.0))
                            .child(format!("Config: {error}"))
                    }))
                    .child(
                        div()
                            .px_3()
                            .py_1()
                            .rounded_md()
                            .bg(gpui::rgba(0xffffff22))
                            .text_color(GridColors::text_header())
                            .text_size(px(13.0))
                            .child(path),
                    ),
            )
    }
}
