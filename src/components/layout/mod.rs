//! Layout Components
//!
//! Header and sidebar around the routed content.

pub mod header;
pub mod sidebar;
