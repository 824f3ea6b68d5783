//! User Details Controller
//!
//! Loads the user named by the current route.

use gpui::{App, AppContext};

use crate::app::entities::AppEntities;
use crate::app::navigation::Route;
use crate::error::Error;
use crate::services::run_in_tokio;
use crate::services::service_hub::ServiceHub;

/// User details page controller
pub struct UserDetailsController {
    entities: AppEntities,
}

impl UserDetailsController {
    /// Create a new controller
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Load `id` unless it is the user already shown
    pub fn ensure_loaded(&self, id: &str, cx: &mut App) {
        if self.entities.user_detail.read(cx).needs_load(id) {
            self.load(id, cx);
        }
    }

    /// Fetch a single user
    pub fn load(&self, id: &str, cx: &mut App) {
        let generation = self.entities.user_detail.update(cx, |state, cx| {
            let generation = state.begin_load(id);
            cx.notify();
            generation
        });

        let Some(hub) = cx.try_global::<ServiceHub>() else {
            self.entities.user_detail.update(cx, |state, cx| {
                state.complete_load(generation, Err(Error::invalid("Services not initialized")));
                cx.notify();
            });
            return;
        };

        let directory = hub.users();
        let detail = self.entities.user_detail.downgrade();
        let id = id.to_string();

        cx.spawn(async move |cx| {
            let result = run_in_tokio(async move { directory.get(&id).await }).await;
            let _ = detail.update(cx, |state, cx| {
                if state.complete_load(generation, result) {
                    cx.notify();
                }
            });
        })
        .detach();
    }

    /// "Back to Users"
    pub fn back_to_users(&self, cx: &mut App) {
        self.entities.router.update(cx, |router, cx| {
            router.return_to(Route::Users);
            cx.notify();
        });
    }

    /// View torn down; forget the shown user
    pub fn unmount(&self, cx: &mut App) {
        self.entities.user_detail.update(cx, |state, cx| {
            state.reset();
            cx.notify();
        });
    }
}
