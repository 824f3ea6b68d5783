//! Users Controller
//!
//! Loads the user directory and routes row clicks to the detail view.

use gpui::{App, AppContext};

use crate::app::entities::AppEntities;
use crate::error::Error;
use crate::services::run_in_tokio;
use crate::services::service_hub::ServiceHub;

/// Users page controller
pub struct UsersController {
    entities: AppEntities,
}

impl UsersController {
    /// Create a new controller
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Fetch the user list
    pub fn load(&self, cx: &mut App) {
        let generation = self.entities.users.update(cx, |state, cx| {
            let generation = state.begin_load();
            cx.notify();
            generation
        });

        let Some(hub) = cx.try_global::<ServiceHub>() else {
            self.entities.users.update(cx, |state, cx| {
                state.complete_load(generation, Err(Error::invalid("Services not initialized")));
                cx.notify();
            });
            return;
        };

        let directory = hub.users();
        let users = self.entities.users.downgrade();

        cx.spawn(async move |cx| {
            let result = run_in_tokio(async move { directory.list().await }).await;
            let _ = users.update(cx, |state, cx| {
                if state.complete_load(generation, result) {
                    cx.notify();
                }
            });
        })
        .detach();
    }

    /// Row click: open the user's detail route
    pub fn open_user(&self, index: usize, cx: &mut App) {
        let Some(route) = self.entities.users.read(cx).detail_route_for(index) else {
            tracing::warn!(index, "Clicked row has no user id");
            return;
        };

        self.entities.router.update(cx, |router, cx| {
            if router.navigate(route) {
                cx.notify();
            }
        });
    }

    /// View torn down; a pending load is ignored
    pub fn unmount(&self, cx: &mut App) {
        self.entities.users.update(cx, |state, _cx| state.cancel());
    }
}
