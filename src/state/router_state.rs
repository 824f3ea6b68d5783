//! RouterState - Current Route and History

use crate::app::navigation::Route;

/// Oldest entries are dropped past this depth
const MAX_HISTORY: usize = 32;

/// State for route navigation
#[derive(Debug, Default)]
pub struct RouterState {
    /// Currently shown route
    pub current: Route,
    history: Vec<Route>,
}

impl RouterState {
    /// Navigate to a route; returns false when already there
    pub fn navigate(&mut self, route: Route) -> bool {
        if route == self.current {
            return false;
        }
        tracing::debug!(from = %self.current, to = %route, "Navigate");
        let previous = std::mem::replace(&mut self.current, route);
        self.history.push(previous);
        if self.history.len() > MAX_HISTORY {
            self.history.remove(0);
        }
        true
    }

    /// Return to the previous route, or the list if there is none
    pub fn back(&mut self) {
        self.current = self.history.pop().unwrap_or_default();
    }

    /// Unwind history to the most recent visit of `route`.
    ///
    /// Entries after that visit are discarded; without one the route is shown
    /// with the history left as it is.
    pub fn return_to(&mut self, route: Route) {
        if route == self.current {
            return;
        }
        tracing::debug!(from = %self.current, to = %route, "Return");
        if let Some(index) = self.history.iter().rposition(|r| *r == route) {
            self.history.truncate(index);
        }
        self.current = route;
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigate_and_back() {
        let mut router = RouterState::default();
        assert!(router.navigate(Route::user("1")));
        assert_eq!(router.current.path(), "/user/1");
        assert!(!router.navigate(Route::user("1")));

        router.back();
        assert_eq!(router.current, Route::Users);
        assert!(!router.can_go_back());

        router.back();
        assert_eq!(router.current, Route::Users);
    }

    #[test]
    fn history_depth_is_capped() {
        let mut router = RouterState::default();
        for i in 0..(MAX_HISTORY * 3) {
            router.navigate(Route::user(i.to_string()));
        }
        assert_eq!(router.history.len(), MAX_HISTORY);

        for _ in 0..MAX_HISTORY {
            router.back();
        }
        assert!(!router.can_go_back());
    }

    #[test]
    fn returning_to_list_drops_the_detail_visit() {
        let mut router = RouterState::default();
        router.navigate(Route::user("3"));
        router.return_to(Route::Users);

        assert_eq!(router.current, Route::Users);
        assert!(!router.can_go_back());

        // Back from the list never reopens the detail view
        router.back();
        assert_eq!(router.current, Route::Users);
    }

    #[test]
    fn returning_to_unvisited_route_keeps_history() {
        let mut router = RouterState::default();
        router.navigate(Route::Items);
        router.navigate(Route::user("5"));
        router.return_to(Route::Users);

        assert_eq!(router.current, Route::Users);
        assert!(router.can_go_back());
        router.back();
        assert_eq!(router.current, Route::Items);
    }
}
