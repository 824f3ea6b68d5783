//! User Details Page
//!
//! Shows one user. Follows the route: a different id triggers a new load.

use gpui::{
    ClickEvent, Context, IntoElement, ParentElement, Render, Styled, Window, div, prelude::*, px,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::Route;
use crate::components::primitives::button::Button;
use crate::domain::user::UserDetail;
use crate::features::user_details::controller::UserDetailsController;
use crate::theme::colors::GridColors;

/// User details page component
pub struct UserDetailsPage {
    entities: AppEntities,
    controller: UserDetailsController,
}

impl UserDetailsPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let controller = UserDetailsController::new(entities.clone());

        cx.observe(&entities.user_detail, |_this, _, cx| cx.notify())
            .detach();

        // Reload whenever the route switches to another user
        cx.observe(&entities.router, |this, router, cx| {
            if let Route::UserDetails { id } = router.read(cx).current.clone() {
                this.controller.ensure_loaded(&id, cx);
            }
        })
        .detach();

        if let Route::UserDetails { id } = entities.router.read(cx).current.clone() {
            controller.ensure_loaded(&id, cx);
        }

        Self {
            entities,
            controller,
        }
    }

    /// Called when the page leaves the screen
    pub fn unmount(&mut self, cx: &mut Context<Self>) {
        self.controller.unmount(cx);
    }

    fn render_user(user: &UserDetail) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .gap_2()
            .child(
                div()
                    .text_size(px(22.0))
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .text_color(GridColors::text_primary())
                    .child(user.name.clone()),
            )
            .children(user.display_lines().into_iter().map(|(label, value)| {
                div()
                    .flex()
                    .gap_2()
                    .text_sm()
                    .child(
                        div()
                            .w(px(100.0))
                            .font_weight(gpui::FontWeight::MEDIUM)
                            .text_color(GridColors::text_secondary())
                            .child(format!("{label}:")),
                    )
                    .child(
                        div()
                            .text_color(GridColors::text_primary())
                            .child(value),
                    )
            }))
    }
}

impl Render for UserDetailsPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let (message, user) = {
            let state = self.entities.user_detail.read(cx);
            (state.message(), state.user.clone())
        };

        let body = match (message, user) {
            (Some(message), _) => div()
                .text_color(GridColors::text_muted())
                .child(message)
                .into_any_element(),
            (None, Some(user)) => Self::render_user(&user).into_any_element(),
            (None, None) => div()
                .text_color(GridColors::text_muted())
                .child("User not found")
                .into_any_element(),
        };

        div()
            .size_full()
            .flex()
            .flex_col()
            .p_4()
            .gap_4()
            .child(
                div().child(
                    Button::secondary("back-to-users", "Back to Users").on_click(cx.listener(
                        |this, _event: &ClickEvent, _window, cx| {
                            this.controller.back_to_users(cx);
                        },
                    )),
                ),
            )
            .child(
                div()
                    .p_4()
                    .rounded_md()
                    .bg(GridColors::content_bg())
                    .border_1()
                    .border_color(GridColors::border())
                    .child(body),
            )
    }
}
