//! State - GPUI Entity State Modules
//!
//! Each state module represents a distinct piece of application state,
//! split by update frequency to avoid unnecessary re-renders.

pub mod config_state;
pub mod router_state;
pub mod table_state;
pub mod user_detail_state;
pub mod users_state;
