//! AppEntities - Global Entity Handles
//!
//! All global GPUI entities are collected here for easy access and management.
//! Per-table grid state is owned by the page that mounts it.

use gpui::{App, AppContext, Entity, Global};

use crate::state::{
    config_state::ConfigState, router_state::RouterState, user_detail_state::UserDetailState,
    users_state::UsersState,
};

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Application configuration state
    pub config: Entity<ConfigState>,
    /// Current route
    pub router: Entity<RouterState>,
    /// User directory list
    pub users: Entity<UsersState>,
    /// Selected user
    pub user_detail: Entity<UserDetailState>,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize all entities around the startup configuration
    pub fn init(config: ConfigState, cx: &mut App) -> Self {
        Self {
            config: cx.new(|_| config),
            router: cx.new(|_| RouterState::default()),
            users: cx.new(|_| UsersState::default()),
            user_detail: cx.new(|_| UserDetailState::default()),
        }
    }
}
