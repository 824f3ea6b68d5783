//! UserDetailState - Single User View State

use crate::domain::user::UserDetail;
use crate::error::Error;

/// State for the user detail view
#[derive(Debug, Clone, Default)]
pub struct UserDetailState {
    /// Identifier taken from the route
    pub user_id: Option<String>,
    pub user: Option<UserDetail>,
    pub loading: bool,
    pub error: Option<String>,
    generation: u64,
}

impl UserDetailState {
    /// Start loading `id`; the previous record is dropped
    pub fn begin_load(&mut self, id: &str) -> u64 {
        self.generation += 1;
        self.user_id = Some(id.to_string());
        self.user = None;
        self.loading = true;
        self.error = None;
        self.generation
    }

    pub fn complete_load(&mut self, generation: u64, result: Result<UserDetail, Error>) -> bool {
        if generation != self.generation {
            tracing::debug!(generation, latest = self.generation, "Discarding stale user");
            return false;
        }

        self.loading = false;
        match result {
            Ok(user) => self.user = Some(user),
            Err(error) => {
                tracing::error!(%error, "Error fetching user details");
                self.error = Some(error.display_message());
            }
        }
        true
    }

    /// Whether the route id differs from the one loaded
    pub fn needs_load(&self, id: &str) -> bool {
        self.user_id.as_deref() != Some(id)
    }

    pub fn reset(&mut self) {
        self.generation += 1;
        self.user_id = None;
        self.user = None;
        self.loading = false;
        self.error = None;
    }

    pub fn message(&self) -> Option<String> {
        if self.loading {
            Some("Loading user details...".to_string())
        } else {
            self.error
                .as_ref()
                .map(|e| format!("Error fetching user details: {e}"))
        }
    }
}
