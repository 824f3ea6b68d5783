//! REST Grid Client Library
//!
//! A desktop data grid over REST endpoints: server-side paging, filtering and
//! sorting mapped onto query parameters, CSV export, and a user directory with
//! a master/detail view.

pub mod app;
pub mod components;
pub mod domain;
pub mod error;
pub mod features;
pub mod services;
pub mod state;
pub mod theme;
pub mod utils;
