//! Features - Vertical Feature Slices
//!
//! Each feature contains its page and controller.

pub mod grid;
pub mod user_details;
pub mod users;
