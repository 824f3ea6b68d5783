//! UsersState - User Directory List State

use crate::app::navigation::Route;
use crate::domain::record::{Record, cell_text};
use crate::error::Error;

/// State for the users list
#[derive(Debug, Clone, Default)]
pub struct UsersState {
    pub users: Vec<Record>,
    pub loading: bool,
    pub error: Option<String>,
    generation: u64,
}

impl UsersState {
    /// Mark a load as started and return its generation
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        self.generation
    }

    /// Apply a finished load; returns false when it was superseded
    pub fn complete_load(&mut self, generation: u64, result: Result<Vec<Record>, Error>) -> bool {
        if generation != self.generation {
            return false;
        }

        self.loading = false;
        match result {
            Ok(users) => {
                tracing::info!(count = users.len(), "Users loaded");
                self.users = users;
            }
            Err(error) => {
                tracing::error!(%error, "Error fetching users");
                self.users.clear();
                self.error = Some(error.display_message());
            }
        }
        true
    }

    /// Drop in-flight loads (view torn down)
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.loading = false;
    }

    /// Loading or error text replacing the table
    pub fn message(&self) -> Option<String> {
        if self.loading {
            Some("Loading users...".to_string())
        } else {
            self.error
                .as_ref()
                .map(|e| format!("Error fetching users: {e}"))
        }
    }

    /// Detail route for a clicked row
    pub fn detail_route_for(&self, index: usize) -> Option<Route> {
        let user = self.users.get(index)?;
        let id = cell_text(user, "id");
        (!id.is_empty()).then(|| Route::user(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn users() -> Vec<Record> {
        json!([{ "id": 1, "name": "Leanne" }, { "id": "abc", "name": "Ervin" }, { "name": "Nobody" }])
            .as_array()
            .expect("array")
            .iter()
            .filter_map(|u| u.as_object().cloned())
            .collect()
    }

    #[test]
    fn load_then_click_navigates_to_detail() {
        let mut state = UsersState::default();
        let generation = state.begin_load();
        assert_eq!(state.message().as_deref(), Some("Loading users..."));

        assert!(state.complete_load(generation, Ok(users())));
        assert_eq!(state.message(), None);
        assert_eq!(state.detail_route_for(0).map(|r| r.path()).as_deref(), Some("/user/1"));
        assert_eq!(state.detail_route_for(1), Some(Route::user("abc")));
        assert_eq!(state.detail_route_for(2), None);
        assert_eq!(state.detail_route_for(9), None);
    }

    #[test]
    fn failure_message() {
        let mut state = UsersState::default();
        let generation = state.begin_load();
        state.complete_load(generation, Err(Error::protocol("Network Error")));
        assert_eq!(
            state.message().as_deref(),
            Some("Error fetching users: Network Error")
        );
    }

    #[test]
    fn cancelled_load_is_ignored() {
        let mut state = UsersState::default();
        let generation = state.begin_load();
        state.cancel();
        assert!(!state.complete_load(generation, Ok(users())));
        assert!(state.users.is_empty());
    }
}
