//! Users Page
//!
//! User directory table. Clicking a row opens the user's details.

use gpui::{
    AppContext, Context, Entity, IntoElement, ParentElement, Render, SharedString, Styled,
    Window, div, prelude::*, px,
};

use crate::app::entities::AppEntities;
use crate::components::composite::data_table::column::record_columns;
use crate::components::composite::data_table::{DataTable, DataTableEvent};
use crate::domain::column::{ColumnDescriptor, ColumnType, process_columns};
use crate::domain::record::Record;
use crate::features::users::controller::UsersController;
use crate::theme::colors::GridColors;

/// Columns shown in the user list
pub fn user_columns() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::new("id")
            .header("Id")
            .kind(ColumnType::Number)
            .sortable(false),
        ColumnDescriptor::new("name").header("Name").sortable(false),
        ColumnDescriptor::new("email").header("Email").sortable(false),
        ColumnDescriptor::new("phone").header("Phone").sortable(false),
    ]
}

/// Users page component
pub struct UsersPage {
    entities: AppEntities,
    controller: UsersController,
    table: Entity<DataTable<Record>>,
}

impl UsersPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let controller = UsersController::new(entities.clone());

        let table = cx.new(|cx| {
            let mut table = DataTable::<Record>::new(cx);
            table.set_columns(record_columns(&process_columns(&user_columns())));
            table.set_clickable_rows(true);
            table
        });

        cx.subscribe(&table, |this, _table, event: &DataTableEvent, cx| {
            if let DataTableEvent::RowClicked(index) = event {
                this.controller.open_user(*index, cx);
            }
        })
        .detach();

        // Observe users state
        let table_clone = table.clone();
        cx.observe(&entities.users, move |_this, users, cx| {
            let (rows, overlay) = {
                let users = users.read(cx);
                (users.users.clone(), users.message().map(SharedString::from))
            };
            table_clone.update(cx, |table, cx| {
                table.set_rows(rows);
                table.set_overlay(overlay);
                cx.notify();
            });
            cx.notify();
        })
        .detach();

        controller.load(cx);

        Self {
            entities,
            controller,
            table,
        }
    }

    /// Called when the page leaves the screen
    pub fn unmount(&mut self, cx: &mut Context<Self>) {
        self.controller.unmount(cx);
    }
}

impl Render for UsersPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let count = self.entities.users.read(cx).users.len();

        div()
            .size_full()
            .flex()
            .flex_col()
            .p_4()
            .gap_3()
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .text_size(px(20.0))
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .text_color(GridColors::text_primary())
                            .child("Users"),
                    )
                    .child(
                        div()
                            .text_sm()
                            .text_color(GridColors::text_secondary())
                            .child(format!("{count} users")),
                    ),
            )
            .child(div().flex_1().child(self.table.clone()))
    }
}
