//! Domain - Pure Data Structures and Protocol Types
//!
//! These types don't depend on GPUI and represent the table domain.

pub mod column;
pub mod config;
pub mod filter;
pub mod page;
pub mod record;
pub mod user;
