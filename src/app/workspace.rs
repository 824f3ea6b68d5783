//! Workspace - Main Shell with Layout and Routing
//!
//! The workspace holds the header, sidebar and the content area, and shows the
//! page for the current route. Pages are created when their route is entered
//! and unmounted and dropped when it is left.

use gpui::{
    AppContext, Context, Entity, IntoElement, ParentElement, Render, Styled, Window, div,
    prelude::*,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::Route;
use crate::components::layout::header::Header;
use crate::components::layout::sidebar::Sidebar;
use crate::features::grid::page::GridPage;
use crate::features::user_details::page::UserDetailsPage;
use crate::features::users::page::UsersPage;
use crate::theme::colors::GridColors;

/// Main workspace containing the application layout
pub struct Workspace {
    entities: AppEntities,
    header: Entity<Header>,
    sidebar: Entity<Sidebar>,
    // Page views (created lazily)
    users_page: Option<Entity<UsersPage>>,
    user_details_page: Option<Entity<UserDetailsPage>>,
    grid_page: Option<Entity<GridPage>>,
}

impl Workspace {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Create layout components
        let header = cx.new(|cx| Header::new(entities.clone(), cx));
        let sidebar = cx.new(|cx| Sidebar::new(entities.clone(), cx));

        // Observe router for page changes
        cx.observe(&entities.router, |this, router, cx| {
            let route = router.read(cx).current.clone();
            this.leave_pages(&route, cx);
            cx.notify();
        })
        .detach();

        Self {
            entities,
            header,
            sidebar,
            users_page: None,
            user_details_page: None,
            grid_page: None,
        }
    }

    /// Unmount the pages that the new route no longer shows
    fn leave_pages(&mut self, route: &Route, cx: &mut Context<Self>) {
        if !matches!(route, Route::Users) {
            if let Some(page) = self.users_page.take() {
                tracing::debug!("Unmounting users page");
                page.update(cx, |page, cx| page.unmount(cx));
            }
        }
        if !matches!(route, Route::Items) {
            if let Some(page) = self.grid_page.take() {
                tracing::debug!("Unmounting grid page");
                page.update(cx, |page, cx| page.unmount(cx));
            }
        }
        if !matches!(route, Route::UserDetails { .. }) {
            if let Some(page) = self.user_details_page.take() {
                tracing::debug!("Unmounting user details page");
                page.update(cx, |page, cx| page.unmount(cx));
            }
        }
    }

    /// Get or create the page view for a route
    fn get_or_create_page(&mut self, route: &Route, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        let entities = self.entities.clone();
        match route {
            Route::Users => self
                .users_page
                .get_or_insert_with(|| cx.new(|cx| UsersPage::new(entities, cx)))
                .clone()
                .into_any_element(),
            Route::UserDetails { .. } => self
                .user_details_page
                .get_or_insert_with(|| cx.new(|cx| UserDetailsPage::new(entities, cx)))
                .clone()
                .into_any_element(),
            Route::Items => self
                .grid_page
                .get_or_insert_with(|| cx.new(|cx| GridPage::new(entities, cx)))
                .clone()
                .into_any_element(),
        }
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let route = self.entities.router.read(cx).current.clone();
        let content = self.get_or_create_page(&route, cx);

        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(GridColors::background())
            .child(
                // Header
                self.header.clone(),
            )
            .child(
                // Main content area
                div()
                    .flex_1()
                    .flex()
                    .flex_row()
                    .overflow_hidden()
                    .child(
                        // Sidebar
                        self.sidebar.clone(),
                    )
                    .child(
                        // Content
                        div()
                            .flex_1()
                            .flex()
                            .flex_col()
                            .overflow_hidden()
                            .bg(GridColors::content_bg())
                            .child(content),
                    ),
            )
    }
}
