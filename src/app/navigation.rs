//! Navigation - Routes
//!
//! Routes the application can show, with their path form:
//! `/` (users), `/user/<id>` (user details), `/items` (server-side grid).

use std::fmt;

use gpui::SharedString;

/// A navigable location
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Route {
    /// User directory list
    #[default]
    Users,
    /// Details for one user
    UserDetails { id: String },
    /// Paginated items grid
    Items,
}

impl Route {
    pub fn user(id: impl Into<String>) -> Self {
        Route::UserDetails { id: id.into() }
    }

    /// Path form of the route
    pub fn path(&self) -> String {
        match self {
            Route::Users => "/".to_string(),
            Route::UserDetails { id } => format!("/user/{id}"),
            Route::Items => "/items".to_string(),
        }
    }

    /// Sidebar section this route belongs to
    pub fn section(&self) -> Section {
        match self {
            Route::Users | Route::UserDetails { .. } => Section::Users,
            Route::Items => Section::Items,
        }
    }

    pub fn title(&self) -> SharedString {
        match self {
            Route::Users => "Users".into(),
            Route::UserDetails { .. } => "User Details".into(),
            Route::Items => "Items".into(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Top-level sidebar entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Users,
    Items,
}

impl Section {
    pub fn label(&self) -> &'static str {
        match self {
            Section::Users => "Users",
            Section::Items => "Items",
        }
    }

    /// Landing route of the section
    pub fn route(&self) -> Route {
        match self {
            Section::Users => Route::Users,
            Section::Items => Route::Items,
        }
    }

    pub fn all() -> &'static [Section] {
        &[Section::Users, Section::Items]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_path_contains_identifier() {
        assert_eq!(Route::user("7").path(), "/user/7");
        assert_eq!(Route::user("7").to_string(), "/user/7");
    }

    #[test]
    fn detail_view_belongs_to_users_section() {
        assert_eq!(Route::user("7").section(), Section::Users);
        assert_eq!(Route::Items.section().route(), Route::Items);
    }
}
