//! Utilities

pub mod config_store;
pub mod export;
pub mod format;
